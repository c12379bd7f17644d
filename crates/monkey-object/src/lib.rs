//! monkey-object - Runtime value model, environment, and built-in
//! functions for the Monkey programming language.
//!
//! ============================================================================
//! SCOPE
//! ============================================================================
//!
//! Phase 3's data side:
//!
//! ```text
//! AST ──▶ (monkey-eval reads this crate's types) ──▶ [Object / Environment] ──▶ Object
//! ```
//!
//! This crate has no evaluation logic of its own — it defines the
//! `Object` sum type every runtime value belongs to, the `Environment`
//! lexical-scope chain, the `HashKey`/`HashObject` machinery hashable
//! values need, and the builtin-function table. `monkey-eval` is the
//! only consumer that drives any of it.
//!
//! Environments are reference-counted (`Rc<RefCell<Environment>>`)
//! rather than arena-allocated; a recursive closure's defining
//! environment ends up containing a reference to itself, which is a
//! well-understood `Rc` leak rather than a correctness bug, and
//! implementing a tracing or arena-based collector is explicitly out of
//! scope for this crate (see `DESIGN.md`).

mod builtins;
mod environment;
mod hash;
mod object;

pub use builtins::lookup as lookup_builtin;
pub use environment::{EnvHandle, Environment};
pub use hash::{fnv1a, HashKey, HashKeyKind};
pub use object::{BuiltinFunction, FunctionObject, HashObject, HashPair, Object};
