#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing the token stream.
pub enum ParseError {
    /// Found a token that cannot begin or continue the current construct.
    UnexpectedToken {
        /// A description of the token encountered.
        token:  String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A specific token was required but something else appeared.
    ExpectedToken {
        /// What the parser was looking for.
        expected: String,
        /// A description of the token actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// The token stream ended in the middle of a construct.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// `create:` was not followed by one of the six type names.
    ExpectedTypeName {
        /// A description of the token actually found.
        found:  String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// The `@VoidApp "Name";` program header is missing or malformed.
    InvalidHeader {
        /// Details about what is wrong with the header.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
        /// The source column where the error occurred.
        column:  usize,
    },
    /// The program ended without declaring its `main` block.
    MissingMainBlock {
        /// The source line where the program ended.
        line:   usize,
        /// The source column where the program ended.
        column: usize,
    },
    /// Found tokens after the closing `@VoidEnd;` marker.
    UnexpectedTrailingTokens {
        /// A description of the extra token.
        token:  String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line, column } => {
                write!(f, "Parse error on line {line}, column {column}: Unexpected {token}.")
            },
            Self::ExpectedToken { expected, found, line, column } => {
                write!(f, "Parse error on line {line}, column {column}: Expected {expected}, found {found}.")
            },
            Self::UnexpectedEndOfInput { line, column } => {
                write!(f, "Parse error on line {line}, column {column}: Unexpected end of input.")
            },
            Self::ExpectedTypeName { found, line, column } => {
                write!(f, "Parse error on line {line}, column {column}: Expected a type name after 'create:', found {found}.")
            },
            Self::InvalidHeader { details, line, column } => {
                write!(f, "Parse error on line {line}, column {column}: Invalid program header: {details}.")
            },
            Self::MissingMainBlock { line, column } => {
                write!(f, "Parse error on line {line}, column {column}: The program has no 'main' block.")
            },
            Self::UnexpectedTrailingTokens { token, line, column } => {
                write!(f, "Parse error on line {line}, column {column}: Found {token} after '@VoidEnd;'.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
