use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::{builtin, random},
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the evaluation context, a slice of evaluated
/// argument values, and the call's line number.
type BuiltinFn = fn(&mut Context<'_>, &[Value], usize) -> EvalResult<Value>;

/// Specifies the required number of arguments for a builtin.
#[derive(Clone, Copy)]
enum Arity {
    Exact(usize),
}

impl Arity {
    /// Tests whether the given argument count satisfies this constraint.
    const fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
        }
    }

    const fn expected(&self) -> usize {
        match self {
            Self::Exact(m) => *m,
        }
    }
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// The names of every builtin, in table order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "abs"      => { arity: Arity::Exact(1), func: |_, args, line| builtin::abs(args, line) },
    "sqrt"     => { arity: Arity::Exact(1), func: |_, args, line| builtin::sqrt(args, line) },
    "floor"    => { arity: Arity::Exact(1), func: |_, args, line| builtin::unary_round("floor", args, line) },
    "ceil"     => { arity: Arity::Exact(1), func: |_, args, line| builtin::unary_round("ceil", args, line) },
    "round"    => { arity: Arity::Exact(1), func: |_, args, line| builtin::unary_round("round", args, line) },
    "min"      => { arity: Arity::Exact(2), func: |_, args, line| builtin::min_max("min", args, line) },
    "max"      => { arity: Arity::Exact(2), func: |_, args, line| builtin::min_max("max", args, line) },
    "random"   => { arity: Arity::Exact(0), func: random::random },
    "toInt"    => { arity: Arity::Exact(1), func: |_, args, line| builtin::to_int(args, line) },
    "toFloat"  => { arity: Arity::Exact(1), func: |_, args, _| builtin::to_float(args) },
    "toString" => { arity: Arity::Exact(1), func: |_, args, _| builtin::to_string(args) },
    "toBool"   => { arity: Arity::Exact(1), func: |_, args, _| builtin::to_bool(args) },
    "length"   => { arity: Arity::Exact(1), func: |_, args, _| builtin::length(args) },
    "upper"    => { arity: Arity::Exact(1), func: |_, args, _| builtin::upper(args) },
    "lower"    => { arity: Arity::Exact(1), func: |_, args, _| builtin::lower(args) },
    "trim"     => { arity: Arity::Exact(1), func: |_, args, _| builtin::trim(args) },
    "contains" => { arity: Arity::Exact(2), func: |_, args, _| builtin::contains(args) },
}

impl Context<'_> {
    /// Evaluates a builtin function call.
    ///
    /// The name is looked up in the builtin table; the arity is verified;
    /// the handler runs over the already-evaluated arguments.
    ///
    /// # Errors
    /// - `UnknownFunction` for a name outside the table.
    /// - `ArgumentCountMismatch` when the arity check fails.
    /// - Whatever the handler itself raises.
    pub(crate) fn call_builtin(&mut self,
                               name: &str,
                               args: &[Value],
                               line: usize)
                               -> EvalResult<Value> {
        let Some(def) = BUILTIN_TABLE.iter().find(|b| b.name == name) else {
            return Err(RuntimeError::UnknownFunction { name: name.to_string(),
                                                       line });
        };
        if !def.arity.check(args.len()) {
            return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                             expected: def.arity.expected(),
                                                             found: args.len(),
                                                             line });
        }
        (def.func)(self, args, line)
    }
}
