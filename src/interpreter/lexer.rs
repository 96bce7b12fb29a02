use logos::Logos;

use crate::error::LexerError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexError)]
pub enum Token {
    /// Floating-point literal tokens, such as `3.14`. A digit is required on
    /// both sides of the dot; there is no exponent syntax and no sign.
    #[regex(r"[0-9]+\.[0-9]+", parse_float)]
    Float(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_int)]
    Int(i64),
    /// String literal tokens, delimited by `"` or `'`. Escape sequences are
    /// resolved here; any unrecognized `\x` yields `x` literally.
    #[regex(r#""([^"\\\n]|\\[^\n])*""#, unescape)]
    #[regex(r"'([^'\\\n]|\\[^\n])*'", unescape)]
    Str(String),
    /// Boolean literal tokens: `true` or `false`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),

    /// `@VoidApp` — opens the program header.
    #[token("@VoidApp")]
    AppDirective,
    /// `@VoidEnd` — the optional end-of-program marker.
    #[token("@VoidEnd")]
    EndDirective,
    /// Any other `@` directive is fatal.
    #[regex(r"@[A-Za-z_][A-Za-z0-9_]*", unknown_directive)]
    UnknownDirective,

    /// `using`
    #[token("using")]
    Using,
    /// `style`
    #[token("style")]
    Style,
    /// `main`
    #[token("main")]
    Main,
    /// `echo`
    #[token("echo")]
    Echo,
    /// `write`
    #[token("write")]
    Write,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `for`
    #[token("for")]
    For,
    /// `rand` — a keyword, so `rand` is not available as an identifier.
    #[token("rand")]
    Rand,
    /// `add`
    #[token("add")]
    Add,
    /// `delete`
    #[token("delete")]
    Delete,
    /// `clear`
    #[token("clear")]
    Clear,
    /// The `create:` compound, emitted only when the identifier `create` is
    /// immediately followed by `:`. A bare `create` stays an identifier.
    #[token("create:")]
    Create,

    /// `string`
    #[token("string")]
    StringType,
    /// `int`
    #[token("int")]
    IntType,
    /// `float`
    #[token("float")]
    FloatType,
    /// `bool`
    #[token("bool")]
    BoolType,
    /// `list`
    #[token("list")]
    ListType,
    /// `dict`
    #[token("dict")]
    DictType,

    /// Identifier tokens; variable names such as `x` or `total`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    /// `**`
    #[token("**")]
    DoubleStar,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `&&`
    #[token("&&")]
    AmpAmp,
    /// `||`
    #[token("||")]
    PipePipe,
    /// `=`
    #[token("=")]
    Equals,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `!`
    #[token("!")]
    Bang,

    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `,`
    #[token(",")]
    Comma,
    /// `:`
    #[token(":")]
    Colon,
    /// `.`
    #[token(".")]
    Dot,

    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip)]
    LineComment,
    /// `#* Block comments. *#` — scanned manually so an unterminated one is
    /// reported at the opening `#*`.
    #[token("#*", block_comment)]
    BlockComment,
    /// Spaces, tabs, and line feeds.
    #[regex(r"[ \t\r\n]+", logos::skip)]
    Whitespace,
    /// A lone quote reaches here only when the string regexes could not
    /// close the literal on the same line.
    #[token("\"", unterminated_string)]
    #[token("'", unterminated_string)]
    UnterminatedString,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Float(n) => write!(f, "float literal '{n}'"),
            Self::Int(n) => write!(f, "integer literal '{n}'"),
            Self::Str(s) => write!(f, "string literal \"{s}\""),
            Self::Bool(b) => write!(f, "'{b}'"),
            Self::AppDirective => write!(f, "'@VoidApp'"),
            Self::EndDirective => write!(f, "'@VoidEnd'"),
            Self::Using => write!(f, "'using'"),
            Self::Style => write!(f, "'style'"),
            Self::Main => write!(f, "'main'"),
            Self::Echo => write!(f, "'echo'"),
            Self::Write => write!(f, "'write'"),
            Self::If => write!(f, "'if'"),
            Self::Else => write!(f, "'else'"),
            Self::While => write!(f, "'while'"),
            Self::For => write!(f, "'for'"),
            Self::Rand => write!(f, "'rand'"),
            Self::Add => write!(f, "'add'"),
            Self::Delete => write!(f, "'delete'"),
            Self::Clear => write!(f, "'clear'"),
            Self::Create => write!(f, "'create:'"),
            Self::StringType => write!(f, "'string'"),
            Self::IntType => write!(f, "'int'"),
            Self::FloatType => write!(f, "'float'"),
            Self::BoolType => write!(f, "'bool'"),
            Self::ListType => write!(f, "'list'"),
            Self::DictType => write!(f, "'dict'"),
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::DoubleStar => write!(f, "'**'"),
            Self::EqualEqual => write!(f, "'=='"),
            Self::BangEqual => write!(f, "'!='"),
            Self::LessEqual => write!(f, "'<='"),
            Self::GreaterEqual => write!(f, "'>='"),
            Self::AmpAmp => write!(f, "'&&'"),
            Self::PipePipe => write!(f, "'||'"),
            Self::Equals => write!(f, "'='"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::Percent => write!(f, "'%'"),
            Self::Less => write!(f, "'<'"),
            Self::Greater => write!(f, "'>'"),
            Self::Bang => write!(f, "'!'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::LBrace => write!(f, "'{{'"),
            Self::RBrace => write!(f, "'}}'"),
            Self::LBracket => write!(f, "'['"),
            Self::RBracket => write!(f, "']'"),
            Self::Semicolon => write!(f, "';'"),
            Self::Comma => write!(f, "','"),
            Self::Colon => write!(f, "':'"),
            Self::Dot => write!(f, "'.'"),
            Self::LineComment | Self::BlockComment | Self::Whitespace | Self::UnknownDirective => {
                write!(f, "comment or whitespace")
            },
            Self::UnterminatedString => write!(f, "unterminated string"),
        }
    }
}

/// The error payload produced inside the lexer, before positions are known.
///
/// `lex` converts these into [`LexerError`] values with line and column
/// attached.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LexError {
    /// A character with no meaning in the language.
    #[default]
    UnexpectedCharacter,
    /// A string literal with no closing quote on its line.
    UnterminatedString,
    /// A `#*` comment with no closing `*#`.
    UnterminatedComment,
    /// An `@` directive other than `@VoidApp` or `@VoidEnd`.
    UnknownDirective(String),
    /// An integer literal the runtime integer type cannot hold.
    IntegerTooLarge,
}

impl LexError {
    fn at(self, slice: &str, line: usize, column: usize) -> LexerError {
        match self {
            Self::UnexpectedCharacter => LexerError::UnexpectedCharacter { found: slice.to_string(),
                                                                           line,
                                                                           column },
            Self::UnterminatedString => LexerError::UnterminatedString { line, column },
            Self::UnterminatedComment => LexerError::UnterminatedComment { line, column },
            Self::UnknownDirective(name) => LexerError::UnknownDirective { name, line, column },
            Self::IntegerTooLarge => LexerError::IntegerTooLarge { line, column },
        }
    }
}

/// A token together with the 1-based source position of its first character.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    /// The token itself.
    pub token:  Token,
    /// The 1-based source line of the token's first character.
    pub line:   usize,
    /// The 1-based source column of the token's first character.
    pub column: usize,
}

/// Maps byte offsets in a source text to 1-based (line, column) positions.
///
/// Built once per lexing pass; columns count characters from the start of
/// the line, not bytes.
struct LineIndex<'s> {
    source: &'s str,
    starts: Vec<usize>,
}

impl<'s> LineIndex<'s> {
    fn new(source: &'s str) -> Self {
        let mut starts = vec![0];
        for (offset, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                starts.push(offset + 1);
            }
        }
        Self { source, starts }
    }

    fn position(&self, offset: usize) -> (usize, usize) {
        let line = self.starts.partition_point(|&start| start <= offset);
        let start = self.starts[line - 1];
        let column = self.source[start..offset].chars().count() + 1;
        (line, column)
    }
}

/// Tokenizes an entire source text.
///
/// Produces the token sequence in source order, each token carrying the
/// line and column of its first character. Lexing stops at the first
/// error.
///
/// # Errors
/// Returns a [`LexerError`] for unexpected characters, unterminated string
/// literals, unterminated `#*` comments, unknown `@` directives, and
/// oversized integer literals.
///
/// # Example
/// ```
/// use voidlang::interpreter::lexer::{Token, lex};
///
/// let tokens = lex("echo(1);").unwrap();
///
/// assert_eq!(tokens[0].token, Token::Echo);
/// assert_eq!(tokens[2].token, Token::Int(1));
/// assert_eq!(tokens.len(), 5);
/// ```
pub fn lex(source: &str) -> Result<Vec<Spanned>, LexerError> {
    let index = LineIndex::new(source);
    let mut tokens = Vec::new();

    let mut lexer = Token::lexer(source);
    while let Some(item) = lexer.next() {
        let (line, column) = index.position(lexer.span().start);
        match item {
            Ok(token) => tokens.push(Spanned { token, line, column }),
            Err(error) => return Err(error.at(lexer.slice(), line, column)),
        }
    }

    Ok(tokens)
}

/// Parses a floating-point literal from the current token slice.
fn parse_float(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an integer literal from the current token slice.
///
/// Literals that overflow the runtime integer type are rejected.
fn parse_int(lex: &logos::Lexer<Token>) -> Result<i64, LexError> {
    lex.slice().parse().map_err(|_| LexError::IntegerTooLarge)
}

/// Parses a boolean literal from the current token slice.
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Resolves escape sequences in a quoted string slice.
///
/// `\n`, `\t`, and `\r` become the named control characters; for any other
/// `\x` the `x` is kept literally, which also covers `\\`, `\"`, and `\'`.
fn unescape(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    let inner = &slice[1..slice.len() - 1];

    let mut text = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => text.push('\n'),
                Some('t') => text.push('\t'),
                Some('r') => text.push('\r'),
                Some(other) => text.push(other),
                None => {},
            }
        } else {
            text.push(c);
        }
    }
    text
}

/// Skips a `#* … *#` comment, or fails if the closing `*#` never appears.
fn block_comment(lex: &mut logos::Lexer<Token>) -> logos::FilterResult<(), LexError> {
    match lex.remainder().find("*#") {
        Some(end) => {
            lex.bump(end + 2);
            logos::FilterResult::Skip
        },
        None => logos::FilterResult::Error(LexError::UnterminatedComment),
    }
}

/// Rejects any `@` directive that is not `@VoidApp` or `@VoidEnd`.
fn unknown_directive(lex: &logos::Lexer<Token>) -> Result<(), LexError> {
    Err(LexError::UnknownDirective(lex.slice().to_string()))
}

/// Reports a quote with no closing partner on the same line.
fn unterminated_string(_lex: &logos::Lexer<Token>) -> Result<(), LexError> {
    Err(LexError::UnterminatedString)
}
