/// The `Object` enum, its inspect rendering, type names, and hash keys.
pub mod core;
/// The chainable lexical environment bindings live in.
pub mod environment;

pub use self::core::{BuiltinFunction, Function, HashKey, HashPair, Object};
pub use environment::Environment;
