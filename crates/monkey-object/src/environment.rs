//! Lexically scoped name-to-value map with parent chain.
//!
//! An environment is just a frame plus an optional outer pointer; lookup
//! walks outward until a name is found or the chain runs out. Frames are
//! shared via `Rc<RefCell<_>>` rather than owned by value because a
//! closure keeps its defining frame alive for as long as the closure
//! itself is reachable — see `FunctionObject::env` in `object.rs`.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::object::Object;

/// A shared handle to an `Environment`. Every environment beyond the
/// program's top-level one is reached only through a handle like this:
/// the enclosing environment of a call, or the captured environment of a
/// closure.
pub type EnvHandle = Rc<RefCell<Environment>>;

/// One frame of name-to-value bindings, plus the frame it's nested in.
#[derive(Debug, Default)]
pub struct Environment {
    store: FxHashMap<String, Object>,
    outer: Option<EnvHandle>,
}

impl Environment {
    /// A fresh, top-level environment with no outer frame.
    pub fn new() -> EnvHandle {
        Rc::new(RefCell::new(Environment::default()))
    }

    /// A fresh frame nested inside `outer`. Used for function application
    /// (§4.4.4): the new frame's outer is the *function's captured*
    /// environment, not the caller's, which is what makes lexical scoping
    /// and closures work.
    pub fn enclosed(outer: EnvHandle) -> EnvHandle {
        Rc::new(RefCell::new(Environment {
            store: FxHashMap::default(),
            outer: Some(outer),
        }))
    }

    /// Looks up `name` in this frame, then each outer frame in turn.
    pub fn get(&self, name: &str) -> Option<Object> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self.outer.as_ref().and_then(|outer| outer.borrow().get(name)),
        }
    }

    /// Binds `name` to `value` in *this* frame only, returning the value
    /// back so callers can chain it (`let` uses this to produce its own
    /// evaluation result).
    pub fn set(&mut self, name: String, value: Object) -> Object {
        self.store.insert(name, value.clone());
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_finds_a_binding_in_the_innermost_frame() {
        let env = Environment::new();
        env.borrow_mut().set("x".to_string(), Object::Integer(5));
        assert_eq!(env.borrow().get("x"), Some(Object::Integer(5)));
    }

    #[test]
    fn get_falls_back_to_outer_frames() {
        let outer = Environment::new();
        outer.borrow_mut().set("x".to_string(), Object::Integer(1));
        let inner = Environment::enclosed(Rc::clone(&outer));
        assert_eq!(inner.borrow().get("x"), Some(Object::Integer(1)));
    }

    #[test]
    fn inner_binding_shadows_outer_without_mutating_it() {
        let outer = Environment::new();
        outer.borrow_mut().set("x".to_string(), Object::Integer(1));
        let inner = Environment::enclosed(Rc::clone(&outer));
        inner.borrow_mut().set("x".to_string(), Object::Integer(2));

        assert_eq!(inner.borrow().get("x"), Some(Object::Integer(2)));
        assert_eq!(outer.borrow().get("x"), Some(Object::Integer(1)));
    }

    #[test]
    fn get_is_none_when_name_is_unbound_anywhere() {
        let env = Environment::new();
        assert_eq!(env.borrow().get("missing"), None);
    }
}
