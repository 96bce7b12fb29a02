use crate::{
    ast::VarType,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::f64_floor_to_i64,
};

/// Coerces a value to a number.
///
/// This is the shared coercion path used by the scalar casts, ordering,
/// arithmetic, indexing, and `rand`:
///
/// - integers and floats are themselves,
/// - booleans become `0` or `1`,
/// - strings are parsed as decimal integers or floats,
/// - everything else is fatal.
///
/// # Errors
/// Returns `RuntimeError::ExpectedNumber` when the value has no numeric
/// reading.
///
/// # Example
/// ```
/// use voidlang::interpreter::{evaluator::cast::to_number, value::core::Value};
///
/// assert_eq!(to_number(&Value::Str("12.5".to_string()), 1).unwrap(), 12.5);
/// assert_eq!(to_number(&Value::Bool(true), 1).unwrap(), 1.0);
/// assert!(to_number(&Value::Str("twelve".to_string()), 1).is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn to_number(value: &Value, line: usize) -> EvalResult<f64> {
    match value {
        Value::Int(n) => Ok(*n as f64),
        Value::Float(n) => Ok(*n),
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Value::Str(s) => {
            s.trim()
             .parse()
             .map_err(|_| RuntimeError::ExpectedNumber { value: s.clone(),
                                                         line })
        },
        other => Err(RuntimeError::ExpectedNumber { value: other.to_string(),
                                                    line }),
    }
}

/// Applies the declared-type coercion a binding performs on declaration
/// and on every assignment.
///
/// Scalar targets convert the value:
/// - `string` renders it,
/// - `int` coerces to a number, rejects NaN, and floors,
/// - `float` coerces to a number and rejects NaN,
/// - `bool` takes its truthiness.
///
/// `list` and `dict` targets never convert; a non-matching shape is fatal.
///
/// # Errors
/// Returns `RuntimeError::ExpectedNumber` for failed numeric coercions and
/// `RuntimeError::TypeError` for shape mismatches on collection bindings.
pub fn coerce(declared: VarType, value: Value, line: usize) -> EvalResult<Value> {
    match declared {
        VarType::String => Ok(Value::Str(value.to_string())),
        VarType::Int => {
            let n = checked_number(declared, &value, line)?;
            Ok(Value::Int(f64_floor_to_i64(n, line)?))
        },
        VarType::Float => Ok(Value::Float(checked_number(declared, &value, line)?)),
        VarType::Bool => Ok(Value::Bool(value.truthy())),
        VarType::List => match value {
            Value::List(_) => Ok(value),
            other => Err(shape_mismatch(declared, &other, line)),
        },
        VarType::Dict => match value {
            Value::Dict(_) => Ok(value),
            other => Err(shape_mismatch(declared, &other, line)),
        },
    }
}

fn checked_number(declared: VarType, value: &Value, line: usize) -> EvalResult<f64> {
    let n = to_number(value, line)?;
    if n.is_nan() {
        return Err(RuntimeError::TypeError { details: format!("cannot store NaN in a {declared} variable"),
                                             line });
    }
    Ok(n)
}

fn shape_mismatch(declared: VarType, value: &Value, line: usize) -> RuntimeError {
    RuntimeError::TypeError { details: format!("a {declared} variable cannot hold {}",
                                               value.type_name()),
                              line }
}
