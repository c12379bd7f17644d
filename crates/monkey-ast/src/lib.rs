//! monkey-ast - AST node types for the Monkey programming language.
//!
//! ============================================================================
//! SCOPE
//! ============================================================================
//!
//! Phase 2 of the interpreter pipeline:
//!
//! ```text
//! token stream ──▶ (monkey-parser builds these nodes) ──▶ [AST] ──▶ (monkey-eval)
//! ```
//!
//! This crate only defines the node shapes and their canonical debug
//! string (the `Display` impls below) — it has no parsing logic of its
//! own. Nodes are plain tagged sum types: one variant per statement kind,
//! one per expression kind, built once by the parser and never mutated
//! afterward.
//!
//! A parser that fails partway through a sub-expression leaves the
//! corresponding field `None` rather than fabricating a placeholder node.
//! Every `Display` impl below renders an absent field as the literal text
//! `null`, so a canonical string is always producible even for a program
//! with parse errors.

mod expression;
mod statement;

pub use expression::{
    CallExpression, Expression, FunctionLiteral, HashLiteral, Identifier, IfExpression,
    IndexExpression, InfixExpression, PrefixExpression,
};
pub use statement::{BlockStatement, ExpressionStatement, LetStatement, Program, ReturnStatement, Statement};
