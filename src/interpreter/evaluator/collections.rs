use crate::{
    ast::{CollectionKind, CollectionMethod},
    error::RuntimeError,
    interpreter::{
        evaluator::{cast, core::EvalResult},
        value::core::Value,
    },
    util::num::f64_floor_to_i64,
};

/// Evaluates an indexing expression `obj[idx]`.
///
/// - On a list, the index is coerced to a number; negative indices resolve
///   from the end; out-of-range is fatal.
/// - On a dictionary, a key equal to `idx` is looked up; a missing key is
///   fatal.
/// - On a string, the same rule as lists applies and a one-character
///   string is returned.
///
/// # Errors
/// Returns `IndexOutOfBounds`, `MissingKey`, or `TypeError` depending on
/// the failure.
pub fn index_access(object: &Value, index: &Value, line: usize) -> EvalResult<Value> {
    match object {
        Value::List(items) => {
            let items = items.borrow();
            let at = resolve_index(index, items.len(), line)?;
            Ok(items[at].clone())
        },
        Value::Dict(d) => {
            d.borrow()
             .get(index)
             .cloned()
             .ok_or_else(|| RuntimeError::MissingKey { key: index.to_string(),
                                                       line })
        },
        Value::Str(s) => {
            let chars: Vec<char> = s.chars().collect();
            let at = resolve_index(index, chars.len(), line)?;
            Ok(Value::Str(chars[at].to_string()))
        },
        other => Err(RuntimeError::TypeError { details: format!("{} cannot be indexed",
                                                                other.type_name()),
                                               line }),
    }
}

/// Evaluates an indexed assignment `obj[idx] = value`.
///
/// Lists replace the element at the resolved index; dictionaries replace
/// the value under an equal key in place or append a new entry. Strings
/// are immutable, so assigning into one is fatal.
pub fn index_assign(target: &Value, index: &Value, value: Value, line: usize) -> EvalResult<()> {
    match target {
        Value::List(items) => {
            let len = items.borrow().len();
            let at = resolve_index(index, len, line)?;
            items.borrow_mut()[at] = value;
            Ok(())
        },
        Value::Dict(d) => {
            d.borrow_mut().insert(index.clone(), value);
            Ok(())
        },
        Value::Str(_) => Err(RuntimeError::TypeError { details: "strings are immutable; assigning to an element is not possible".to_string(),
                                                       line }),
        other => {
            Err(RuntimeError::TypeError { details: format!("{} does not support indexed assignment",
                                                           other.type_name()),
                                          line })
        },
    }
}

/// Executes a collection method call.
///
/// The binding's shape is rechecked on every call: the value currently
/// held must match the collection kind named in the call.
///
/// | call               | effect                                          |
/// |--------------------|-------------------------------------------------|
/// | `x.add:list(v)`    | append `v`                                      |
/// | `x.add:dict(k:v)`  | replace under an equal key in place, or append  |
/// | `x.delete:list(i)` | remove at index `i` (negatives allowed)         |
/// | `x.delete:dict(k)` | remove the entry whose key equals `k`           |
/// | `x.clear:list()`   | truncate to empty                               |
/// | `x.clear:dict()`   | truncate to empty                               |
pub fn method_call(object: &str,
                   held: &Value,
                   method: CollectionMethod,
                   kind: CollectionKind,
                   args: &[Value],
                   line: usize)
                   -> EvalResult<()> {
    match (kind, held) {
        (CollectionKind::List, Value::List(items)) => match method {
            CollectionMethod::Add => {
                check_method_arity("add:list", 1, args.len(), line)?;
                items.borrow_mut().push(args[0].clone());
                Ok(())
            },
            CollectionMethod::Delete => {
                check_method_arity("delete:list", 1, args.len(), line)?;
                let len = items.borrow().len();
                let at = resolve_index(&args[0], len, line)?;
                items.borrow_mut().remove(at);
                Ok(())
            },
            CollectionMethod::Clear => {
                check_method_arity("clear:list", 0, args.len(), line)?;
                items.borrow_mut().clear();
                Ok(())
            },
        },
        (CollectionKind::Dict, Value::Dict(d)) => match method {
            CollectionMethod::Add => {
                // The grammar tolerates extra arguments after the pair.
                if args.len() < 2 {
                    return Err(RuntimeError::ArgumentCountMismatch { name: "add:dict".to_string(),
                                                                     expected: 2,
                                                                     found: args.len(),
                                                                     line });
                }
                d.borrow_mut().insert(args[0].clone(), args[1].clone());
                Ok(())
            },
            CollectionMethod::Delete => {
                check_method_arity("delete:dict", 1, args.len(), line)?;
                d.borrow_mut()
                 .remove(&args[0])
                 .map(|_| ())
                 .ok_or_else(|| RuntimeError::MissingKey { key: args[0].to_string(),
                                                           line })
            },
            CollectionMethod::Clear => {
                check_method_arity("clear:dict", 0, args.len(), line)?;
                d.borrow_mut().clear();
                Ok(())
            },
        },
        (kind, other) => {
            Err(RuntimeError::TypeError { details: format!("'{object}' holds {}, but '{method}:{kind}' needs a {kind}",
                                                           other.type_name()),
                                          line })
        },
    }
}

/// Coerces an index to a number, resolves negatives from the end, and
/// bounds-checks it.
#[allow(clippy::cast_possible_wrap)]
#[allow(clippy::cast_sign_loss)]
fn resolve_index(index: &Value, len: usize, line: usize) -> EvalResult<usize> {
    let raw = f64_floor_to_i64(cast::to_number(index, line)?, line)?;
    let resolved = if raw < 0 { raw + len as i64 } else { raw };
    if resolved < 0 || resolved >= len as i64 {
        return Err(RuntimeError::IndexOutOfBounds { index: raw, len, line });
    }
    Ok(resolved as usize)
}

fn check_method_arity(name: &str, expected: usize, found: usize, line: usize) -> EvalResult<()> {
    if expected == found {
        Ok(())
    } else {
        Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                  expected,
                                                  found,
                                                  line })
    }
}
