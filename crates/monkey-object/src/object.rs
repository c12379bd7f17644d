//! The runtime value model: one tagged sum type, `Object`, with one
//! variant per value kind — a `match` on `Object` is exhaustive at
//! compile time, so adding a kind here is a compiler-checked exercise
//! rather than a runtime one.

use std::fmt;
use std::rc::Rc;

use monkey_ast::{BlockStatement, Identifier};
use rustc_hash::FxHashMap;

use crate::environment::EnvHandle;
use crate::hash::{fnv1a, HashKey, HashKeyKind};

/// A runtime value. `Return` and `Error` are the two propagating
/// sentinels the evaluator propagates unchanged — every other variant is an
/// ordinary value a Monkey program can hold, print, or pass around.
#[derive(Debug, Clone)]
pub enum Object {
    Integer(i32),
    Boolean(bool),
    Null,
    /// Wraps the value a `return` statement produced, so block evaluation
    /// can propagate it upward without unwrapping.
    Return(Box<Object>),
    /// Wraps a runtime error message. Once produced, bubbles up through
    /// every evaluator function unchanged.
    Error(String),
    Function(FunctionObject),
    String(String),
    Builtin(BuiltinFunction),
    Array(Vec<Object>),
    Hash(HashObject),
}

/// A closure: a parameter list, a body, and the environment that existed
/// at the moment the function literal was evaluated.
#[derive(Debug, Clone)]
pub struct FunctionObject {
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
    pub env: EnvHandle,
}

/// An opaque callable implemented in Rust rather than in Monkey.
/// `name` exists only for error messages and equality; the table
/// of builtins lives in `crate::builtins`.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinFunction {
    pub name: &'static str,
    pub func: fn(&[Object]) -> Object,
}

/// `{ key: value, ... }`. Keyed by the flattened `(kind, digest)` of the
/// original key so heterogeneous hashable values share one lookup table;
/// `HashPair` retains the original key value so iteration (and `inspect`)
/// can recover it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HashObject {
    pub pairs: FxHashMap<HashKey, HashPair>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HashPair {
    pub key: Object,
    pub value: Object,
}

impl Object {
    /// A stable, human-readable kind name for error messages (the error
    /// message templates embed this verbatim, e.g. `"Type mismatch: INT +
    /// BOOL"`).
    pub fn kind_name(&self) -> &'static str {
        match self {
            Object::Integer(_) => "INT",
            Object::Boolean(_) => "BOOL",
            Object::Null => "NULL",
            Object::Return(_) => "RETURN",
            Object::Error(_) => "ERROR",
            Object::Function(_) => "FUNCTION",
            Object::String(_) => "STRING",
            Object::Builtin(_) => "BUILTIN",
            Object::Array(_) => "ARRAY",
            Object::Hash(_) => "HASH",
        }
    }

    /// The `HashKey` this value would occupy as a hash key, or `None` if
    /// it isn't hashable. Only `Integer`, `Boolean`, and `String` are
    /// (see DESIGN.md); everything else — notably `Builtin` — is not.
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Object::Integer(value) => Some(HashKey {
                kind: HashKeyKind::Integer,
                digest: *value as u64,
            }),
            Object::Boolean(value) => Some(HashKey {
                kind: HashKeyKind::Boolean,
                digest: if *value { 1 } else { 0 },
            }),
            Object::String(value) => Some(HashKey {
                kind: HashKeyKind::String,
                digest: fnv1a(value.as_bytes()),
            }),
            _ => None,
        }
    }
}

/// Structural equality, used by the evaluator's `==`/`!=` on non-integer
/// operands. Comparing structurally rather than relying on singleton
/// `TRUE`/`FALSE`/`NULL` identity keeps `==`/`!=` correct without any
/// pointer-identity requirement. `Function` still compares its captured
/// environment by pointer — two
/// closures over genuinely different frames are never equal even if
/// their parameters and bodies happen to match.
impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Object::Integer(a), Object::Integer(b)) => a == b,
            (Object::Boolean(a), Object::Boolean(b)) => a == b,
            (Object::Null, Object::Null) => true,
            (Object::Return(a), Object::Return(b)) => a == b,
            (Object::Error(a), Object::Error(b)) => a == b,
            (Object::String(a), Object::String(b)) => a == b,
            (Object::Array(a), Object::Array(b)) => a == b,
            (Object::Hash(a), Object::Hash(b)) => a == b,
            (Object::Builtin(a), Object::Builtin(b)) => a.name == b.name,
            (Object::Function(a), Object::Function(b)) => {
                Rc::ptr_eq(&a.env, &b.env) && a.parameters == b.parameters && a.body == b.body
            }
            _ => false,
        }
    }
}

/// The `inspect` string: what a REPL prints for a value, and
/// what `puts` prints for each argument.
impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Integer(n) => write!(f, "{}", n),
            Object::Boolean(b) => write!(f, "{}", b),
            Object::Null => write!(f, "null"),
            Object::Return(value) => write!(f, "{}", value),
            Object::Error(msg) => write!(f, "Error: {}", msg),
            Object::Function(func) => {
                let params = func.parameters.iter().map(|p| p.to_string()).collect::<Vec<_>>().join(", ");
                write!(f, "fn({}) {{\n{}\n}}", params, func.body)
            }
            Object::String(s) => write!(f, "{}", s),
            Object::Builtin(_) => write!(f, "builtin function"),
            Object::Array(elems) => {
                write!(f, "[")?;
                for elem in elems {
                    write!(f, "{}, ", elem)?;
                }
                write!(f, "]")
            }
            Object::Hash(hash) => {
                write!(f, "{{")?;
                for pair in hash.pairs.values() {
                    write!(f, "{}: {}, ", pair.key, pair.value)?;
                }
                write!(f, "}}")
            }
        }
    }
}
