use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::{BlockStatement, Expression, PrefixOperator, Program, Statement},
    interpreter::{
        evaluator::{builtin, collection, function, infix},
        object::{Environment, Function, Object},
    },
};

/// The shared `true` value.
pub const TRUE: Object = Object::Boolean(true);
/// The shared `false` value.
pub const FALSE: Object = Object::Boolean(false);
/// The shared absent value.
pub const NULL: Object = Object::Null;

/// Evaluates a whole program in the given environment and returns the value
/// of its last statement.
///
/// This is the outermost unwinding boundary: a [`Object::ReturnValue`]
/// produced anywhere in top-level code is unwrapped here, and an
/// [`Object::Error`] stops evaluation of the remaining statements.
pub fn eval_program(program: &Program, env: &Rc<RefCell<Environment>>) -> Object {
    let mut result = NULL;

    for statement in &program.statements {
        result = eval_statement(statement, env);
        match result {
            Object::ReturnValue(value) => return *value,
            Object::Error(_) => return result,
            _ => {},
        }
    }

    result
}

/// Evaluates the statements of a block in order.
///
/// Unlike [`eval_program`], a block passes `ReturnValue` and `Error` objects
/// through untouched, so a `return` nested several blocks deep still unwinds
/// all the way to the enclosing function call.
pub(in crate::interpreter::evaluator) fn eval_block(block: &BlockStatement,
                                                    env: &Rc<RefCell<Environment>>)
                                                    -> Object {
    let mut result = NULL;

    for statement in &block.statements {
        result = eval_statement(statement, env);
        if matches!(result, Object::ReturnValue(_) | Object::Error(_)) {
            return result;
        }
    }

    result
}

fn eval_statement(statement: &Statement, env: &Rc<RefCell<Environment>>) -> Object {
    match statement {
        Statement::Expression { expression, .. } => eval_expression(expression, env),
        Statement::Let { name, value, .. } => {
            let value = eval_expression(value, env);
            if is_error(&value) {
                return value;
            }
            env.borrow_mut().set(name.clone(), value);
            NULL
        },
        Statement::Return { value, .. } => {
            let value = value.as_ref().map_or(NULL, |value| eval_expression(value, env));
            if is_error(&value) {
                return value;
            }
            Object::ReturnValue(Box::new(value))
        },
    }
}

/// Evaluates a single expression node.
pub(in crate::interpreter::evaluator) fn eval_expression(expression: &Expression,
                                                         env: &Rc<RefCell<Environment>>)
                                                         -> Object {
    match expression {
        Expression::IntegerLiteral { value, .. } => Object::Integer(*value),
        Expression::StringLiteral { value, .. } => Object::Str(value.clone()),
        Expression::Boolean { value, .. } => boolean_object(*value),
        Expression::Identifier { name, .. } => eval_identifier(name, env),
        Expression::Prefix { operator, right, .. } => {
            let right = eval_expression(right, env);
            if is_error(&right) {
                return right;
            }
            eval_prefix(*operator, &right)
        },
        Expression::Infix { left, operator, right, .. } => {
            let left = eval_expression(left, env);
            if is_error(&left) {
                return left;
            }
            let right = eval_expression(right, env);
            if is_error(&right) {
                return right;
            }
            infix::eval_infix(*operator, left, right)
        },
        Expression::If { condition, consequence, alternative, .. } => {
            eval_if(condition, consequence, alternative.as_ref(), env)
        },
        Expression::FunctionLiteral { parameters, body, .. } => {
            Object::Function(Function { parameters: parameters.clone(),
                                        body:       body.clone(),
                                        env:        Rc::clone(env), })
        },
        Expression::Call { function, arguments, .. } => {
            function::eval_call(function, arguments, env)
        },
        Expression::ArrayLiteral { elements, .. } => {
            collection::eval_array_literal(elements, env)
        },
        Expression::Index { left, index, .. } => collection::eval_index(left, index, env),
        Expression::HashLiteral { pairs, .. } => collection::eval_hash_literal(pairs, env),
    }
}

fn eval_prefix(operator: PrefixOperator, right: &Object) -> Object {
    match operator {
        PrefixOperator::Bang => boolean_object(!is_truthy(right)),
        PrefixOperator::Minus => eval_minus(right),
    }
}

fn eval_minus(right: &Object) -> Object {
    match right {
        Object::Integer(value) => Object::Integer(value.wrapping_neg()),
        _ => Object::Error(format!("unknown operator: -{}", right.type_name())),
    }
}

/// Resolves a name against the environment chain first and the builtin
/// table second, so a `let` binding can shadow a builtin.
fn eval_identifier(name: &str, env: &Rc<RefCell<Environment>>) -> Object {
    if let Some(value) = env.borrow().get(name) {
        return value;
    }
    if let Some(builtin) = builtin::lookup(name) {
        return builtin;
    }
    Object::Error(format!("identifier not found: {name}"))
}

fn eval_if(condition: &Expression,
           consequence: &BlockStatement,
           alternative: Option<&BlockStatement>,
           env: &Rc<RefCell<Environment>>)
           -> Object {
    let condition = eval_expression(condition, env);
    if is_error(&condition) {
        return condition;
    }

    if is_truthy(&condition) {
        eval_block(consequence, env)
    } else if let Some(alternative) = alternative {
        eval_block(alternative, env)
    } else {
        NULL
    }
}

/// Only `false` and `null` are falsy; every other value, including `0` and
/// the empty string, is truthy.
pub(in crate::interpreter::evaluator) const fn is_truthy(object: &Object) -> bool {
    !matches!(object, Object::Boolean(false) | Object::Null)
}

pub(in crate::interpreter::evaluator) const fn is_error(object: &Object) -> bool {
    matches!(object, Object::Error(_))
}

pub(in crate::interpreter::evaluator) const fn boolean_object(value: bool) -> Object {
    if value { TRUE } else { FALSE }
}
