#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read or assign a variable that was never created.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to create a variable that already exists in the current scope.
    Redefinition {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a function the runtime does not provide.
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A function or collection method received the wrong number of
    /// arguments.
    ArgumentCountMismatch {
        /// The name of the function or method.
        name:     String,
        /// How many arguments it takes.
        expected: usize,
        /// How many arguments it received.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A value had an unexpected or incompatible type.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A numeric value was required, but the operand cannot be coerced to
    /// one.
    ExpectedNumber {
        /// The rendering of the value that failed to coerce.
        value: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Attempted division (or remainder) with a zero right operand.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to access a list or string element outside its bounds.
    IndexOutOfBounds {
        /// The index that was requested, after resolving negatives.
        index: i64,
        /// The length of the collection.
        len:   usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Looked up or deleted a dictionary key that is not present.
    MissingKey {
        /// The rendering of the missing key.
        key:  String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// `rand(min, max)` was called with `min` greater than `max`.
    InvalidRandRange {
        /// The lower bound that was supplied.
        min:  i64,
        /// The upper bound that was supplied.
        max:  i64,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A loop ran past the 1,000,000-iteration safety ceiling.
    IterationLimitExceeded {
        /// The source line of the loop.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => {
                write!(f, "Runtime error on line {line}: Unknown variable '{name}'.")
            },
            Self::Redefinition { name, line } => {
                write!(f, "Runtime error on line {line}: Variable '{name}' already exists in this scope.")
            },
            Self::UnknownFunction { name, line } => {
                write!(f, "Runtime error on line {line}: Unknown function '{name}'.")
            },
            Self::ArgumentCountMismatch { name, expected, found, line } => {
                write!(f, "Runtime error on line {line}: '{name}' takes {expected} argument(s), but {found} were given.")
            },
            Self::TypeError { details, line } => {
                write!(f, "Runtime error on line {line}: Type error: {details}.")
            },
            Self::ExpectedNumber { value, line } => {
                write!(f, "Runtime error on line {line}: Cannot convert '{value}' to a number.")
            },
            Self::DivisionByZero { line } => {
                write!(f, "Runtime error on line {line}: Division by zero.")
            },
            Self::IndexOutOfBounds { index, len, line } => {
                write!(f, "Runtime error on line {line}: Index {index} is out of bounds for length {len}.")
            },
            Self::MissingKey { key, line } => {
                write!(f, "Runtime error on line {line}: Key '{key}' is not present in the dictionary.")
            },
            Self::InvalidRandRange { min, max, line } => {
                write!(f, "Runtime error on line {line}: rand({min}, {max}) has its bounds reversed.")
            },
            Self::IterationLimitExceeded { line } => {
                write!(f, "Runtime error on line {line}: Loop exceeded the 1000000 iteration ceiling.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
