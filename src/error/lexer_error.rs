#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing source text.
pub enum LexerError {
    /// Encountered a character with no meaning in the language.
    UnexpectedCharacter {
        /// The offending character sequence, as it appears in the source.
        found:  String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A string literal was opened but never closed on the same line.
    UnterminatedString {
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A `#*` comment was opened but the closing `*#` never appeared.
    UnterminatedComment {
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// An `@` directive other than `@VoidApp` or `@VoidEnd`.
    UnknownDirective {
        /// The directive text, including the leading `@`.
        name:   String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// An integer literal too large for the runtime integer type.
    IntegerTooLarge {
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
}

impl std::fmt::Display for LexerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { found, line, column } => {
                write!(f, "Lexer error on line {line}, column {column}: Unexpected character '{found}'.")
            },
            Self::UnterminatedString { line, column } => {
                write!(f, "Lexer error on line {line}, column {column}: Unterminated string literal.")
            },
            Self::UnterminatedComment { line, column } => {
                write!(f, "Lexer error on line {line}, column {column}: Unterminated '#*' comment.")
            },
            Self::UnknownDirective { name, line, column } => {
                write!(f, "Lexer error on line {line}, column {column}: Unknown directive '{name}'.")
            },
            Self::IntegerTooLarge { line, column } => {
                write!(f, "Lexer error on line {line}, column {column}: Integer literal is too large.")
            },
        }
    }
}

impl std::error::Error for LexerError {}
