use crate::{
    interpreter::{
        evaluator::{cast, core::EvalResult},
        value::core::{Value, values_equal},
    },
    util::num::f64_floor_to_i64,
};

/// Absolute value of a numeric operand.
pub fn abs(args: &[Value], line: usize) -> EvalResult<Value> {
    Ok(Value::from_number(cast::to_number(&args[0], line)?.abs()))
}

/// Square root. A negative operand follows the host float semantics and
/// yields NaN.
pub fn sqrt(args: &[Value], line: usize) -> EvalResult<Value> {
    Ok(Value::from_number(cast::to_number(&args[0], line)?.sqrt()))
}

/// The three unary rounding builtins: `floor`, `ceil`, and `round`.
///
/// `round` uses the host rule, ties away from zero.
pub fn unary_round(name: &str, args: &[Value], line: usize) -> EvalResult<Value> {
    let n = cast::to_number(&args[0], line)?;
    let rounded = match name {
        "floor" => n.floor(),
        "ceil" => n.ceil(),
        _ => n.round(),
    };
    Ok(Value::from_number(rounded))
}

/// Binary numeric minimum or maximum, selected by `name`.
pub fn min_max(name: &str, args: &[Value], line: usize) -> EvalResult<Value> {
    let a = cast::to_number(&args[0], line)?;
    let b = cast::to_number(&args[1], line)?;
    let value = if name == "min" { a.min(b) } else { a.max(b) };
    Ok(Value::from_number(value))
}

/// `toInt` — parse-as-decimal-integer; any failure yields `0`.
///
/// Numbers and booleans floor; strings try an integer parse first, then a
/// float parse followed by flooring; everything else is `0`.
pub fn to_int(args: &[Value], line: usize) -> EvalResult<Value> {
    let result = match &args[0] {
        Value::Int(n) => *n,
        Value::Float(n) => f64_floor_to_i64(*n, line).unwrap_or(0),
        Value::Bool(b) => i64::from(*b),
        Value::Str(s) => {
            let trimmed = s.trim();
            if let Ok(n) = trimmed.parse::<i64>() {
                n
            } else if let Ok(f) = trimmed.parse::<f64>() {
                f64_floor_to_i64(f, line).unwrap_or(0)
            } else {
                0
            }
        },
        _ => 0,
    };
    Ok(Value::Int(result))
}

/// `toFloat` — parse-as-float; any failure yields `0.0`.
#[allow(clippy::cast_precision_loss)]
pub fn to_float(args: &[Value]) -> EvalResult<Value> {
    let result = match &args[0] {
        Value::Int(n) => *n as f64,
        Value::Float(n) => *n,
        Value::Bool(b) => if *b { 1.0 } else { 0.0 },
        Value::Str(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    };
    Ok(Value::Float(result))
}

/// `toString` — the canonical rendering of any value.
pub fn to_string(args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Str(args[0].to_string()))
}

/// `toBool` — the truthiness of any value.
pub fn to_bool(args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Bool(args[0].truthy()))
}

/// `length` — element count for lists, entry count for dictionaries,
/// character count of the rendering otherwise.
#[allow(clippy::cast_possible_wrap)]
pub fn length(args: &[Value]) -> EvalResult<Value> {
    let count = match &args[0] {
        Value::List(items) => items.borrow().len(),
        Value::Dict(d) => d.borrow().len(),
        other => other.to_string().chars().count(),
    };
    Ok(Value::Int(count as i64))
}

/// `upper` — the uppercased rendering.
pub fn upper(args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Str(args[0].to_string().to_uppercase()))
}

/// `lower` — the lowercased rendering.
pub fn lower(args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Str(args[0].to_string().to_lowercase()))
}

/// `trim` — the rendering with surrounding whitespace stripped.
pub fn trim(args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Str(args[0].to_string().trim().to_string()))
}

/// `contains` — element membership for lists (under the language equality
/// relation), substring test otherwise.
pub fn contains(args: &[Value]) -> EvalResult<Value> {
    let found = match &args[0] {
        Value::List(items) => items.borrow().iter().any(|v| values_equal(v, &args[1])),
        other => other.to_string().contains(&args[1].to_string()),
    };
    Ok(Value::Bool(found))
}
