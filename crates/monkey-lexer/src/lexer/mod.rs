//! The scanner itself, split by what it's scanning.
//!
//! `core` owns the cursor and the top-level `next_token` dispatch; the
//! other submodules are small leaf readers the core dispatches into once
//! it has classified the current character.

mod core;
mod identifier;
mod number;
mod operator;
mod string_lit;

pub use core::Lexer;
