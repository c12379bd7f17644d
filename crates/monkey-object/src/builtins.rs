//! The global builtin-function table.
//!
//! Builtins are looked up by name from the evaluator's identifier
//! resolution: an identifier that isn't bound in the environment chain
//! falls back here before producing an "unknown variable" error. The
//! table is a flat array rather than a `HashMap` — it has
//! two entries and is only ever scanned once per unresolved identifier.

use crate::object::{BuiltinFunction, Object};

const BUILTINS: &[(&str, fn(&[Object]) -> Object)] = &[("len", builtin_len), ("puts", builtin_puts)];

/// Looks `name` up against the builtin table, returning a callable
/// `Object::Builtin` on a match.
pub fn lookup(name: &str) -> Option<Object> {
    BUILTINS
        .iter()
        .find(|(builtin_name, _)| *builtin_name == name)
        .map(|(builtin_name, func)| Object::Builtin(BuiltinFunction { name: builtin_name, func: *func }))
}

fn builtin_len(args: &[Object]) -> Object {
    if args.len() != 1 {
        return Object::Error(format!("Wrong number of args: got {}, expected 1", args.len()));
    }
    match &args[0] {
        Object::String(s) => Object::Integer(s.len() as i32),
        Object::Array(elems) => Object::Integer(elems.len() as i32),
        other => Object::Error(format!("Argument to `len` not supported, got {}", other.kind_name())),
    }
}

/// Prints each argument's inspect form on its own line and returns
/// `Null`. The only builtin with a side effect — deliberately not unit
/// tested on stdout content here, only on its return value and arity —
/// the REPL/printing surface is exercised by the binary's own tests.
fn builtin_puts(args: &[Object]) -> Object {
    for arg in args {
        println!("{}", arg);
    }
    Object::Null
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_of_string_is_byte_length() {
        assert_eq!(builtin_len(&[Object::String("four".to_string())]), Object::Integer(4));
    }

    #[test]
    fn len_of_array_is_element_count() {
        assert_eq!(
            builtin_len(&[Object::Array(vec![Object::Integer(1), Object::Integer(2), Object::Integer(3)])]),
            Object::Integer(3)
        );
    }

    #[test]
    fn len_rejects_unsupported_argument_kind() {
        assert_eq!(
            builtin_len(&[Object::Integer(1)]),
            Object::Error("Argument to `len` not supported, got INT".to_string())
        );
    }

    #[test]
    fn len_rejects_wrong_arity() {
        assert_eq!(
            builtin_len(&[Object::Integer(1), Object::Integer(2)]),
            Object::Error("Wrong number of args: got 2, expected 1".to_string())
        );
    }

    #[test]
    fn puts_returns_null() {
        assert_eq!(builtin_puts(&[Object::Integer(1)]), Object::Null);
    }

    #[test]
    fn lookup_finds_len_and_puts_but_nothing_else() {
        assert!(matches!(lookup("len"), Some(Object::Builtin(_))));
        assert!(matches!(lookup("puts"), Some(Object::Builtin(_))));
        assert!(lookup("nope").is_none());
    }
}
