use crate::{
    ast::InfixOperator,
    interpreter::{
        evaluator::core::{FALSE, TRUE, boolean_object},
        object::Object,
    },
};

/// Evaluates `<left> <op> <right>` on already-evaluated operands.
///
/// Integer pairs and string pairs have their own operator tables, and the
/// singleton types support `==`/`!=`. Composite values (arrays, hashes,
/// functions) have no operators at all. Operands of different types always
/// produce a `type mismatch` error, even for operators the types would
/// individually support.
pub(in crate::interpreter::evaluator) fn eval_infix(operator: InfixOperator,
                                                    left: Object,
                                                    right: Object)
                                                    -> Object {
    match (left, right) {
        (Object::Integer(left), Object::Integer(right)) => {
            eval_integer_infix(operator, left, right)
        },
        (Object::Str(left), Object::Str(right)) => eval_string_infix(operator, &left, &right),
        (Object::Boolean(left), Object::Boolean(right)) => {
            eval_boolean_infix(operator, left, right)
        },
        (Object::Null, Object::Null) => eval_null_infix(operator),
        (left, right) if left.type_name() != right.type_name() => {
            Object::Error(format!("type mismatch: {} {operator} {}",
                                  left.type_name(),
                                  right.type_name()))
        },
        (left, right) => {
            Object::Error(format!("unknown operator: {} {operator} {}",
                                  left.type_name(),
                                  right.type_name()))
        },
    }
}

fn eval_boolean_infix(operator: InfixOperator, left: bool, right: bool) -> Object {
    match operator {
        InfixOperator::Equal => boolean_object(left == right),
        InfixOperator::NotEqual => boolean_object(left != right),
        _ => Object::Error(format!("unknown operator: BOOLEAN {operator} BOOLEAN")),
    }
}

/// There is only one `null`, so equality against itself is fixed.
fn eval_null_infix(operator: InfixOperator) -> Object {
    match operator {
        InfixOperator::Equal => TRUE,
        InfixOperator::NotEqual => FALSE,
        _ => Object::Error(format!("unknown operator: NULL {operator} NULL")),
    }
}

/// Integer arithmetic wraps at the 64-bit boundary, and division truncates
/// toward zero.
fn eval_integer_infix(operator: InfixOperator, left: i64, right: i64) -> Object {
    match operator {
        InfixOperator::Plus => Object::Integer(left.wrapping_add(right)),
        InfixOperator::Minus => Object::Integer(left.wrapping_sub(right)),
        InfixOperator::Asterisk => Object::Integer(left.wrapping_mul(right)),
        InfixOperator::Slash => {
            if right == 0 {
                Object::Error("division by zero".to_string())
            } else {
                Object::Integer(left.wrapping_div(right))
            }
        },
        InfixOperator::LessThan => boolean_object(left < right),
        InfixOperator::GreaterThan => boolean_object(left > right),
        InfixOperator::Equal => boolean_object(left == right),
        InfixOperator::NotEqual => boolean_object(left != right),
    }
}

fn eval_string_infix(operator: InfixOperator, left: &str, right: &str) -> Object {
    match operator {
        InfixOperator::Plus => Object::Str(format!("{left}{right}")),
        InfixOperator::Equal => boolean_object(left == right),
        InfixOperator::NotEqual => boolean_object(left != right),
        _ => Object::Error(format!("unknown operator: STRING {operator} STRING")),
    }
}
