use crate::{
    ast::{BinaryOperator, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::{cast, core::EvalResult},
        value::core::{Value, values_equal},
    },
};

/// Evaluates a binary operator applied to two already-evaluated operands.
///
/// Both operands are always evaluated before this function runs, so `&&`
/// and `||` do not short-circuit; they combine the operands' truthiness.
///
/// # Errors
/// Propagates coercion failures, division by zero, and type mismatches.
///
/// # Example
/// ```
/// use voidlang::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::eval_binary, value::core::Value},
/// };
///
/// let sum = eval_binary(BinaryOperator::Add, &Value::Int(2), &Value::Int(3), 1).unwrap();
/// assert_eq!(sum, Value::Int(5));
///
/// let half = eval_binary(BinaryOperator::Div, &Value::Int(1), &Value::Int(2), 1).unwrap();
/// assert_eq!(half, Value::Float(0.5));
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: &Value,
                   right: &Value,
                   line: usize)
                   -> EvalResult<Value> {
    match op {
        BinaryOperator::Add => eval_add(left, right, line),
        BinaryOperator::Sub
        | BinaryOperator::Mul
        | BinaryOperator::Div
        | BinaryOperator::Mod
        | BinaryOperator::Pow => eval_numeric(op, left, right, line),
        BinaryOperator::Less
        | BinaryOperator::Greater
        | BinaryOperator::LessEqual
        | BinaryOperator::GreaterEqual => eval_ordering(op, left, right, line),
        BinaryOperator::Equal => Ok(Value::Bool(values_equal(left, right))),
        BinaryOperator::NotEqual => Ok(Value::Bool(!values_equal(left, right))),
        BinaryOperator::And => Ok(Value::Bool(left.truthy() && right.truthy())),
        BinaryOperator::Or => Ok(Value::Bool(left.truthy() || right.truthy())),
    }
}

/// Evaluates a unary operator.
///
/// `-` coerces its operand to a number and negates it; `!` inverts the
/// operand's truthiness.
pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
    match op {
        UnaryOperator::Negate => Ok(Value::from_number(-cast::to_number(value, line)?)),
        UnaryOperator::Not => Ok(Value::Bool(!value.truthy())),
    }
}

/// `+` is overloaded three ways, tried in order:
///
/// 1. either operand is a string — concatenate the renderings,
/// 2. both operands are numbers — numeric addition,
/// 3. both operands are lists — a new list holding both sequences.
fn eval_add(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    if matches!(left, Value::Str(_)) || matches!(right, Value::Str(_)) {
        return Ok(Value::Str(format!("{left}{right}")));
    }
    if left.is_number() && right.is_number() {
        let sum = cast::to_number(left, line)? + cast::to_number(right, line)?;
        return Ok(Value::from_number(sum));
    }
    if let (Value::List(a), Value::List(b)) = (left, right) {
        let mut joined = a.borrow().clone();
        joined.extend(b.borrow().iter().cloned());
        return Ok(Value::from(joined));
    }
    Err(RuntimeError::TypeError { details: format!("cannot add {} and {}",
                                                   left.type_name(),
                                                   right.type_name()),
                                  line })
}

fn eval_numeric(op: BinaryOperator,
                left: &Value,
                right: &Value,
                line: usize)
                -> EvalResult<Value> {
    let l = cast::to_number(left, line)?;
    let r = cast::to_number(right, line)?;

    let result = match op {
        BinaryOperator::Sub => l - r,
        BinaryOperator::Mul => l * r,
        BinaryOperator::Div => {
            if r == 0.0 {
                return Err(RuntimeError::DivisionByZero { line });
            }
            l / r
        },
        BinaryOperator::Mod => {
            if r == 0.0 {
                return Err(RuntimeError::DivisionByZero { line });
            }
            l % r
        },
        BinaryOperator::Pow => l.powf(r),
        _ => unreachable!("eval_binary dispatched a non-arithmetic operator"),
    };
    Ok(Value::from_number(result))
}

/// Ordering coerces both operands to numbers; comparing a non-numeric
/// string is fatal through that path.
fn eval_ordering(op: BinaryOperator,
                 left: &Value,
                 right: &Value,
                 line: usize)
                 -> EvalResult<Value> {
    let l = cast::to_number(left, line)?;
    let r = cast::to_number(right, line)?;

    let result = match op {
        BinaryOperator::Less => l < r,
        BinaryOperator::Greater => l > r,
        BinaryOperator::LessEqual => l <= r,
        BinaryOperator::GreaterEqual => l >= r,
        _ => unreachable!("eval_binary dispatched a non-ordering operator"),
    };
    Ok(Value::Bool(result))
}
