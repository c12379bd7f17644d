//! monkey-parser - Pratt parser for the Monkey programming language.
//!
//! ============================================================================
//! SCOPE
//! ============================================================================
//!
//! Phase 2 of the interpreter pipeline:
//!
//! ```text
//! token stream ──▶ [Parser] ──▶ AST ──▶ (monkey-eval)
//! ```
//!
//! [`Parser`] maintains a current and a peek token (one token of
//! lookahead) and parses expressions via Pratt's algorithm: a prefix
//! production (dispatched on the current token's kind) followed by zero
//! or more infix productions (dispatched on the peek token's kind, each
//! folding the expression parsed so far into a larger one) for as long as
//! the next operator binds tighter than the precedence the caller asked
//! for. Dispatch is a plain `match` on token kind rather than a table of
//! closures — there's no dynamic registration step, and the compiler
//! checks the match is exhaustive.
//!
//! Parse errors are accumulated in [`Parser::errors`] rather than
//! returned from `parse_program`; a sub-parser that hits one simply
//! returns `None` and does not attempt recovery. Because the top-level
//! loop advances exactly once per iteration regardless of whether a
//! statement parsed successfully, a single failure can leave the cursor
//! mid-expression, and the very next token may produce an unrelated
//! second error. This cascading is expected, not a bug — see the tests
//! in `parser::statement` for a worked example.

mod parser;
mod precedence;

pub use parser::Parser;
pub use precedence::Precedence;
