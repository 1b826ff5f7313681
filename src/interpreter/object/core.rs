use std::{
    cell::RefCell,
    collections::HashMap,
    fmt,
    hash::{DefaultHasher, Hash, Hasher},
    rc::Rc,
};

use crate::{ast::BlockStatement, interpreter::object::environment::Environment};

/// A runtime value.
///
/// Everything evaluation produces is an `Object`, including the two control
/// values: [`Object::ReturnValue`] carries a result out of nested blocks
/// until a function boundary unwraps it, and [`Object::Error`] is a
/// first-class value that short-circuits every surrounding construct on its
/// way out.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    /// A 64-bit signed integer.
    Integer(i64),
    /// `true` or `false`.
    Boolean(bool),
    /// The absent value; also what a missing `else` arm produces.
    Null,
    /// An immutable string.
    Str(String),
    /// A value travelling out of a `return` statement.
    ReturnValue(Box<Object>),
    /// A runtime error, carrying its message.
    Error(String),
    /// A user-defined function together with its defining environment.
    Function(Function),
    /// A built-in function such as `len`.
    Builtin(BuiltinFunction),
    /// An immutable array of values.
    Array(Rc<Vec<Object>>),
    /// A hash table keyed by the hash keys of integers, booleans, and
    /// strings. Each entry keeps the original key object for display.
    Hash(Rc<HashMap<HashKey, HashPair>>),
}

impl Object {
    /// Returns the fixed type name used verbatim in error messages, such as
    /// the `INTEGER` in `type mismatch: INTEGER + BOOLEAN`.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Boolean(_) => "BOOLEAN",
            Self::Null => "NULL",
            Self::Str(_) => "STRING",
            Self::ReturnValue(_) => "RETURN_VALUE",
            Self::Error(_) => "ERROR",
            Self::Function(_) => "FUNCTION",
            Self::Builtin(_) => "BUILTIN",
            Self::Array(_) => "ARRAY",
            Self::Hash(_) => "HASH",
        }
    }

    /// Returns the key under which this value is stored in a hash table,
    /// or `None` for types that cannot be hash keys.
    ///
    /// Keys hash by content, so `"name"` written twice is the same key, and
    /// an integer and a boolean can never collide with each other.
    ///
    /// # Examples
    /// ```
    /// use quill::interpreter::object::Object;
    ///
    /// let a = Object::Str("name".to_string());
    /// let b = Object::Str("name".to_string());
    /// assert_eq!(a.hash_key(), b.hash_key());
    /// assert!(Object::Null.hash_key().is_none());
    /// ```
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Self::Integer(value) => {
                Some(HashKey { kind:  HashKind::Integer,
                               value: *value as u64, })
            },
            Self::Boolean(value) => {
                Some(HashKey { kind:  HashKind::Boolean,
                               value: u64::from(*value), })
            },
            Self::Str(value) => {
                let mut hasher = DefaultHasher::new();
                value.hash(&mut hasher);
                Some(HashKey { kind:  HashKind::Str,
                               value: hasher.finish(), })
            },
            _ => None,
        }
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Null => write!(f, "null"),
            Self::Str(value) => write!(f, "{value}"),
            Self::ReturnValue(value) => write!(f, "{value}"),
            Self::Error(message) => write!(f, "ERROR: {message}"),
            Self::Function(function) => write!(f, "{function}"),
            Self::Builtin(_) => write!(f, "builtin function"),
            Self::Array(elements) => {
                let elements: Vec<String> = elements.iter().map(ToString::to_string).collect();
                write!(f, "[{}]", elements.join(", "))
            },
            Self::Hash(pairs) => {
                let pairs: Vec<String> =
                    pairs.values().map(|pair| format!("{}: {}", pair.key, pair.value)).collect();
                write!(f, "{{{}}}", pairs.join(", "))
            },
        }
    }
}

/// A user-defined function value.
///
/// The captured environment is the one the `fn` literal was evaluated in,
/// which is what makes closures work: calls extend that environment, not
/// the caller's.
#[derive(Debug, Clone)]
pub struct Function {
    /// The parameter names, in order.
    pub parameters: Vec<String>,
    /// The function body.
    pub body:       BlockStatement,
    /// The environment the function literal was evaluated in.
    pub env:        Rc<RefCell<Environment>>,
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.parameters == other.parameters
        && self.body == other.body
        && Rc::ptr_eq(&self.env, &other.env)
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fn({}) {{\n{}\n}}", self.parameters.join(", "), self.body)
    }
}

/// A built-in function exposed to scripts by name.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinFunction {
    /// The name scripts call this builtin by.
    pub name: &'static str,
    /// The host implementation.
    pub func: fn(Vec<Object>) -> Object,
}

impl PartialEq for BuiltinFunction {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// The composite key a hashable value maps to.
///
/// The kind keeps keys of different types apart even when their numeric
/// hashes collide, so `1` and `true` are always distinct keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashKey {
    kind:  HashKind,
    value: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum HashKind {
    Integer,
    Boolean,
    Str,
}

/// One hash table entry: the original key object and its value.
#[derive(Debug, Clone, PartialEq)]
pub struct HashPair {
    /// The key as written, kept for display.
    pub key:   Object,
    /// The stored value.
    pub value: Object,
}
