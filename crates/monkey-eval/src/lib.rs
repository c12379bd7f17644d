//! monkey-eval - Tree-walking evaluator for the Monkey programming
//! language.
//!
//! ============================================================================
//! SCOPE
//! ============================================================================
//!
//! Phase 3 of the interpreter pipeline, and the last one:
//!
//! ```text
//! AST ──▶ [Evaluator] + Environment ──▶ Object
//! ```
//!
//! [`eval_program`] is the single public entry point: given a parsed
//! [`monkey_ast::Program`] and an [`monkey_object::EnvHandle`] it walks
//! the tree recursively, dispatching on node kind, and returns the
//! resulting [`monkey_object::Object`].
//!
//! Two value kinds act as propagating sentinels the whole way down:
//! `Object::Error`, which once produced bubbles up through
//! every evaluator function unchanged, and `Object::Return`, produced by
//! `return` statements and propagated through blocks *without* being
//! unwrapped, so that only the function call boundary (or the top-level
//! program) ever actually unwraps one. Every evaluator function that
//! consumes a sub-result checks for both before using it.

mod eval;

pub use eval::eval_program;
