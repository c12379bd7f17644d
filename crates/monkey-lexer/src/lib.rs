//! monkey-lexer - Lexical analysis for the Monkey programming language.
//!
//! ============================================================================
//! SCOPE
//! ============================================================================
//!
//! This crate is phase 1 of the interpreter pipeline:
//!
//! ```text
//! source text ──▶ [Lexer] ──▶ token stream ──▶ (monkey-parser)
//! ```
//!
//! A `Lexer` turns a source string into a stream of [`Token`]s via a single
//! public operation, [`Lexer::next_token`], driven by a one-character
//! lookahead. It never fails: malformed input produces `Token::Illegal`
//! tokens rather than an `Err`, and the parser is the one that turns those
//! into user-visible errors. At end of input the lexer returns `Token::Eof`
//! forever.
//!
//! Deliberately out of scope here (see the crate's tests for the exact
//! contract instead of a grammar file): Unicode identifiers, escape
//! sequences inside string literals, floating point literals, and anything
//! resembling source spans beyond the current character/token cursor.

mod lexer;
mod token;

pub use lexer::Lexer;
pub use token::Token;
