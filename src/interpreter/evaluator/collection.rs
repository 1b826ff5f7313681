use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{
    ast::Expression,
    interpreter::{
        evaluator::{
            core::{NULL, eval_expression, is_error},
            function::eval_expressions,
        },
        object::{Environment, HashKey, HashPair, Object},
    },
};

/// Evaluates an array literal's elements left to right; the first error
/// value wins.
pub(in crate::interpreter::evaluator) fn eval_array_literal(elements: &[Expression],
                                                            env: &Rc<RefCell<Environment>>)
                                                            -> Object {
    match eval_expressions(elements, env) {
        Ok(elements) => Object::Array(Rc::new(elements)),
        Err(error) => error,
    }
}

/// Evaluates a hash literal pair by pair. Keys must hash; a key of an
/// unhashable type aborts the literal with an `unusable as hash key` error.
/// Duplicate keys keep the last written value.
pub(in crate::interpreter::evaluator) fn eval_hash_literal(pairs: &[(Expression, Expression)],
                                                           env: &Rc<RefCell<Environment>>)
                                                           -> Object {
    let mut table = HashMap::new();

    for (key_expression, value_expression) in pairs {
        let key = eval_expression(key_expression, env);
        if is_error(&key) {
            return key;
        }
        let Some(hash_key) = key.hash_key() else {
            return Object::Error(format!("unusable as hash key: {}", key.type_name()));
        };

        let value = eval_expression(value_expression, env);
        if is_error(&value) {
            return value;
        }

        table.insert(hash_key, HashPair { key, value });
    }

    Object::Hash(Rc::new(table))
}

/// Evaluates `<left>[<index>]`.
///
/// Arrays only accept integer indexes, and an out-of-range or negative index
/// yields `null` rather than an error; a hash lookup for an absent key also
/// yields `null`. Indexing any other type is an error.
pub(in crate::interpreter::evaluator) fn eval_index(left: &Expression,
                                                    index: &Expression,
                                                    env: &Rc<RefCell<Environment>>)
                                                    -> Object {
    let left = eval_expression(left, env);
    if is_error(&left) {
        return left;
    }
    let index = eval_expression(index, env);
    if is_error(&index) {
        return index;
    }

    match (&left, &index) {
        (Object::Array(elements), Object::Integer(position)) => {
            eval_array_index(elements, *position)
        },
        (Object::Hash(pairs), _) => eval_hash_index(pairs, &index),
        _ => Object::Error(format!("index operator not supported: {}", left.type_name())),
    }
}

fn eval_array_index(elements: &[Object], position: i64) -> Object {
    usize::try_from(position).ok()
                             .and_then(|position| elements.get(position).cloned())
                             .unwrap_or(NULL)
}

fn eval_hash_index(pairs: &HashMap<HashKey, HashPair>, key: &Object) -> Object {
    let Some(hash_key) = key.hash_key() else {
        return Object::Error(format!("unusable as hash key: {}", key.type_name()));
    };

    pairs.get(&hash_key).map_or(NULL, |pair| pair.value.clone())
}
