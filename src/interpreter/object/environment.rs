use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::object::core::Object;

/// A lexical scope: name-to-value bindings plus an optional link to the
/// enclosing scope.
///
/// Lookups walk the chain outward; writes always go to the innermost scope.
/// Environments are shared behind `Rc<RefCell<...>>` because a function
/// value captures the environment it was defined in, and that environment
/// must stay alive (and visible to later `let` bindings) for as long as the
/// function does.
///
/// # Examples
/// ```
/// use quill::interpreter::object::{Environment, Object};
///
/// let outer = Environment::new();
/// outer.borrow_mut().set("x", Object::Integer(5));
///
/// let inner = Environment::enclosed(&outer);
/// assert_eq!(inner.borrow().get("x"), Some(Object::Integer(5)));
///
/// inner.borrow_mut().set("x", Object::Integer(7));
/// assert_eq!(inner.borrow().get("x"), Some(Object::Integer(7)));
/// assert_eq!(outer.borrow().get("x"), Some(Object::Integer(5)));
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Environment {
    store: HashMap<String, Object>,
    outer: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    /// Creates an empty top-level environment.
    #[must_use]
    pub fn new() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Creates an empty environment whose lookups fall through to `outer`.
    #[must_use]
    pub fn enclosed(outer: &Rc<RefCell<Self>>) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self { store: HashMap::new(),
                                    outer: Some(Rc::clone(outer)), }))
    }

    /// Looks `name` up in this scope, then outward through the enclosing
    /// scopes.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Object> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self.outer.as_ref().and_then(|outer| outer.borrow().get(name)),
        }
    }

    /// Binds `name` in this scope only. An existing binding in an enclosing
    /// scope is shadowed, never overwritten.
    pub fn set(&mut self, name: impl Into<String>, value: Object) {
        self.store.insert(name.into(), value);
    }
}
