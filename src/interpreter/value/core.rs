use std::{cell::RefCell, rc::Rc};

use crate::{interpreter::value::dict::Dict, util::num::f64_to_i64_exact};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// assignments, collection elements, and conditions. Lists and dictionaries
/// are held behind shared handles: assigning one to another binding shares
/// the underlying container, and mutation through either binding is visible
/// through both. All other variants have value semantics.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absence of a value.
    Null,
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// An integer value (the whole-number subset of numbers).
    Int(i64),
    /// A floating-point value (double precision).
    Float(f64),
    /// An owned string value.
    Str(String),
    /// An ordered, mutable sequence of values behind a shared handle.
    List(Rc<RefCell<Vec<Self>>>),
    /// An insertion-ordered key/value association behind a shared handle.
    Dict(Rc<RefCell<Dict>>),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(Rc::new(RefCell::new(v)))
    }
}

impl From<Dict> for Value {
    fn from(v: Dict) -> Self {
        Self::Dict(Rc::new(RefCell::new(v)))
    }
}

impl Value {
    /// Wraps a computed number, re-tagging whole finite results as `int`.
    ///
    /// Arithmetic runs on `f64`; this keeps `1 + 2` printing as `3` while
    /// `1 / 2` stays `0.5`.
    ///
    /// # Example
    /// ```
    /// use voidlang::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from_number(512.0), Value::Int(512));
    /// assert_eq!(Value::from_number(0.5), Value::Float(0.5));
    /// ```
    #[must_use]
    pub fn from_number(n: f64) -> Self {
        f64_to_i64_exact(n).map_or(Self::Float(n), Self::Int)
    }

    /// Returns the scalar-to-bool coercion used by conditions, `!`, `&&`,
    /// `||`, and `toBool`.
    ///
    /// `null` is false; booleans are themselves; numbers are true when
    /// nonzero; strings, lists, and dictionaries are true when non-empty.
    ///
    /// # Example
    /// ```
    /// use voidlang::interpreter::value::core::Value;
    ///
    /// assert!(Value::Int(2).truthy());
    /// assert!(!Value::Str(String::new()).truthy());
    /// assert!(!Value::Null.truthy());
    /// ```
    #[must_use]
    pub fn truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Int(n) => *n != 0,
            Self::Float(n) => *n != 0.0,
            Self::Str(s) => !s.is_empty(),
            Self::List(items) => !items.borrow().is_empty(),
            Self::Dict(d) => !d.borrow().is_empty(),
        }
    }

    /// The name of the value's runtime type, as used in diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::List(_) => "list",
            Self::Dict(_) => "dict",
        }
    }

    /// Returns `true` if the value carries a numeric tag (`int` or `float`).
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_))
    }

    #[allow(clippy::cast_precision_loss)]
    fn as_loose_number(&self) -> Option<f64> {
        match self {
            Self::Int(n) => Some(*n as f64),
            Self::Float(n) => Some(*n),
            Self::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            _ => None,
        }
    }
}

/// The equality relation used by `==`, `!=`, and dictionary-key matching.
///
/// 1. Operands with the same tag compare their payloads directly; lists and
///    dictionaries compare by handle identity, not by contents.
/// 2. Otherwise, if both operands are booleans or numbers, both are coerced
///    to numbers and compared.
/// 3. Otherwise their canonical string renderings are compared.
///
/// # Example
/// ```
/// use voidlang::interpreter::value::core::{Value, values_equal};
///
/// assert!(values_equal(&Value::Int(1), &Value::Float(1.0)));
/// assert!(values_equal(&Value::Bool(true), &Value::Int(1)));
/// assert!(values_equal(&Value::Int(7), &Value::Str("7".to_string())));
/// assert!(!values_equal(&Value::Int(1), &Value::Int(2)));
/// ```
#[must_use]
pub fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Int(a), Value::Int(b)) => a == b,
        (Value::Float(a), Value::Float(b)) => a == b,
        (Value::Str(a), Value::Str(b)) => a == b,
        (Value::List(a), Value::List(b)) => Rc::ptr_eq(a, b),
        (Value::Dict(a), Value::Dict(b)) => Rc::ptr_eq(a, b),
        _ => match (left.as_loose_number(), right.as_loose_number()) {
            (Some(a), Some(b)) => a == b,
            _ => left.to_string() == right.to_string(),
        },
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::List(items) => {
                write!(f, "[")?;
                for (index, value) in items.borrow().iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}")?;
                }
                write!(f, "]")
            },
            Self::Dict(d) => {
                write!(f, "{{")?;
                for (index, (key, value)) in d.borrow().entries().iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}:{value}")?;
                }
                write!(f, "}}")
            },
        }
    }
}
