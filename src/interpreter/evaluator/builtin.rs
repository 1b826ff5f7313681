use std::rc::Rc;

use crate::interpreter::{
    evaluator::core::NULL,
    object::{BuiltinFunction, Object},
};

/// Resolves a builtin by name. The environment chain is consulted first, so
/// a script-level `let len = ...` shadows the builtin of the same name.
pub(in crate::interpreter::evaluator) fn lookup(name: &str) -> Option<Object> {
    let builtin = match name {
        "len" => BuiltinFunction { name: "len", func: len },
        "first" => BuiltinFunction { name: "first", func: first },
        "last" => BuiltinFunction { name: "last", func: last },
        "rest" => BuiltinFunction { name: "rest", func: rest },
        "push" => BuiltinFunction { name: "push", func: push },
        "puts" => BuiltinFunction { name: "puts", func: puts },
        _ => return None,
    };

    Some(Object::Builtin(builtin))
}

fn check_arity(arguments: &[Object], want: usize) -> Option<Object> {
    if arguments.len() == want {
        None
    } else {
        Some(Object::Error(format!("wrong number of arguments. got={}, want={want}",
                                   arguments.len())))
    }
}

/// `len(x)` — the element count of an array or the byte length of a string.
fn len(arguments: Vec<Object>) -> Object {
    if let Some(error) = check_arity(&arguments, 1) {
        return error;
    }

    match &arguments[0] {
        Object::Str(value) => Object::Integer(value.len() as i64),
        Object::Array(elements) => Object::Integer(elements.len() as i64),
        other => {
            Object::Error(format!("argument to `len` not supported, got {}", other.type_name()))
        },
    }
}

/// `first(array)` — the first element, or `null` for an empty array.
fn first(arguments: Vec<Object>) -> Object {
    if let Some(error) = check_arity(&arguments, 1) {
        return error;
    }

    match &arguments[0] {
        Object::Array(elements) => elements.first().cloned().unwrap_or(NULL),
        other => {
            Object::Error(format!("argument to `first` must be ARRAY, got {}", other.type_name()))
        },
    }
}

/// `last(array)` — the last element, or `null` for an empty array.
fn last(arguments: Vec<Object>) -> Object {
    if let Some(error) = check_arity(&arguments, 1) {
        return error;
    }

    match &arguments[0] {
        Object::Array(elements) => elements.last().cloned().unwrap_or(NULL),
        other => {
            Object::Error(format!("argument to `last` must be ARRAY, got {}", other.type_name()))
        },
    }
}

/// `rest(array)` — a new array without the first element, or `null` for an
/// empty array.
fn rest(arguments: Vec<Object>) -> Object {
    if let Some(error) = check_arity(&arguments, 1) {
        return error;
    }

    match &arguments[0] {
        Object::Array(elements) => {
            if elements.is_empty() {
                NULL
            } else {
                Object::Array(Rc::new(elements[1..].to_vec()))
            }
        },
        other => {
            Object::Error(format!("argument to `rest` must be ARRAY, got {}", other.type_name()))
        },
    }
}

/// `push(array, value)` — a new array with `value` appended; the original
/// array is untouched.
fn push(arguments: Vec<Object>) -> Object {
    if let Some(error) = check_arity(&arguments, 2) {
        return error;
    }

    match &arguments[0] {
        Object::Array(elements) => {
            let mut elements = elements.as_ref().clone();
            elements.push(arguments[1].clone());
            Object::Array(Rc::new(elements))
        },
        other => {
            Object::Error(format!("argument to `push` must be ARRAY, got {}", other.type_name()))
        },
    }
}

/// `puts(...)` — prints each argument on its own line and returns `null`.
fn puts(arguments: Vec<Object>) -> Object {
    for argument in &arguments {
        println!("{argument}");
    }

    NULL
}
