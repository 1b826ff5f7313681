use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::Expression,
    interpreter::{
        evaluator::core::{eval_block, eval_expression, is_error},
        object::{Environment, Function, Object},
    },
};

/// Evaluates a call expression: the callee first, then the arguments left to
/// right, then the application itself. The first error value encountered
/// anywhere in that sequence is the result.
pub(in crate::interpreter::evaluator) fn eval_call(function: &Expression,
                                                   arguments: &[Expression],
                                                   env: &Rc<RefCell<Environment>>)
                                                   -> Object {
    let function = eval_expression(function, env);
    if is_error(&function) {
        return function;
    }

    let arguments = match eval_expressions(arguments, env) {
        Ok(arguments) => arguments,
        Err(error) => return error,
    };

    apply_function(&function, arguments)
}

/// Evaluates expressions left to right, stopping at the first error value.
pub(in crate::interpreter::evaluator) fn eval_expressions(expressions: &[Expression],
                                                          env: &Rc<RefCell<Environment>>)
                                                          -> Result<Vec<Object>, Object> {
    let mut results = Vec::with_capacity(expressions.len());

    for expression in expressions {
        let value = eval_expression(expression, env);
        if is_error(&value) {
            return Err(value);
        }
        results.push(value);
    }

    Ok(results)
}

/// Applies a function or builtin value to its evaluated arguments.
///
/// User functions run their body in a fresh environment enclosing the
/// *defining* environment, with the parameters bound locally. The body's
/// result is unwrapped from any `ReturnValue`, so a `return` never unwinds
/// past its own call.
fn apply_function(function: &Object, arguments: Vec<Object>) -> Object {
    match function {
        Object::Function(function) => {
            if arguments.len() != function.parameters.len() {
                return Object::Error(format!("wrong number of arguments. got={}, want={}",
                                             arguments.len(),
                                             function.parameters.len()));
            }
            let env = extend_function_env(function, arguments);
            unwrap_return_value(eval_block(&function.body, &env))
        },
        Object::Builtin(builtin) => (builtin.func)(arguments),
        _ => Object::Error(format!("not a function: {}", function.type_name())),
    }
}

fn extend_function_env(function: &Function, arguments: Vec<Object>) -> Rc<RefCell<Environment>> {
    let env = Environment::enclosed(&function.env);

    for (parameter, argument) in function.parameters.iter().zip(arguments) {
        env.borrow_mut().set(parameter.clone(), argument);
    }

    env
}

fn unwrap_return_value(object: Object) -> Object {
    match object {
        Object::ReturnValue(value) => *value,
        _ => object,
    }
}
