/// Represents a literal value in the language.
///
/// `LiteralValue` covers the raw constants that can appear directly in
/// source code: integers, floats, strings, and booleans. List and dictionary
/// displays are expression forms, not literals, because their elements are
/// evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Int(i64),
    /// A 64-bit floating-point literal.
    Float(f64),
    /// A quoted string literal, with escape sequences already resolved.
    Str(String),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
}

/// The declared type of a variable binding.
///
/// Written after `create:` in a declaration. Scalar types coerce assigned
/// values; `list` and `dict` demand a matching shape instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarType {
    /// `string`
    String,
    /// `int`
    Int,
    /// `float`
    Float,
    /// `bool`
    Bool,
    /// `list`
    List,
    /// `dict`
    Dict,
}

impl std::fmt::Display for VarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::List => "list",
            Self::Dict => "dict",
        };
        write!(f, "{name}")
    }
}

/// The collection kind named in a method call, e.g. the `list` in
/// `xs.add:list(4)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    /// `list`
    List,
    /// `dict`
    Dict,
}

impl std::fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List => write!(f, "list"),
            Self::Dict => write!(f, "dict"),
        }
    }
}

/// The method named in a collection method call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionMethod {
    /// `add` — append to a list, or insert/replace a dictionary entry.
    Add,
    /// `delete` — remove by index (list) or by key (dict).
    Delete,
    /// `clear` — truncate the collection to empty.
    Clear,
}

impl std::fmt::Display for CollectionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Add => write!(f, "add"),
            Self::Delete => write!(f, "delete"),
            Self::Clear => write!(f, "clear"),
        }
    }
}

/// A complete parsed program.
///
/// The header names the application; the optional style directive selects
/// the banner color; the body holds the top-level forms in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// The application name from the `@VoidApp "Name";` header.
    pub app_name: String,
    /// The style name from `using style "Name";`, if present.
    pub style:    Option<String>,
    /// Top-level forms in source order.
    pub body:     Vec<TopLevel>,
}

/// A top-level form. The only one the language currently has is `main`.
#[derive(Debug, Clone, PartialEq)]
pub enum TopLevel {
    /// The `main() { … }` entry block.
    Main {
        /// The statements of the entry block.
        body: Block,
        /// Line number of the `main` keyword.
        line: usize,
    },
}

/// A brace-delimited statement sequence with its own lexical scope.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// The statements of the block, in source order.
    pub statements: Vec<Stmt>,
}

/// The branch following `else`: either a plain block or a chained `if`.
#[derive(Debug, Clone, PartialEq)]
pub enum ElseArm {
    /// `else { … }`
    Block(Block),
    /// `else if ( … ) { … }` — always a [`Stmt::If`].
    If(Box<Stmt>),
}

/// An abstract syntax tree node representing a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `echo(e1, e2, …);` — print the arguments joined by single spaces.
    Echo {
        /// The argument expressions, at least one.
        args: Vec<Expr>,
        /// Line number in the source code.
        line: usize,
    },
    /// `create:<type> name = expr;` — declare a variable in the current
    /// scope.
    CreateVar {
        /// The declared type of the new binding.
        declared: VarType,
        /// The name of the variable.
        name:     String,
        /// The initializer expression.
        init:     Expr,
        /// Line number in the source code.
        line:     usize,
    },
    /// `name = expr;` — assign to an existing binding.
    AssignVar {
        /// The name of the variable.
        name:  String,
        /// The value being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `name[index] = expr;` — update one element of a list or dictionary.
    IndexAssign {
        /// The name of the collection variable.
        name:  String,
        /// The index or key expression.
        index: Expr,
        /// The value being stored.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `name.method:kind(args);` — a collection method call.
    MethodCall {
        /// The name of the collection variable.
        object: String,
        /// Which method is invoked.
        method: CollectionMethod,
        /// Which collection kind the call names.
        target: CollectionKind,
        /// The argument expressions. For `add:dict` the key and value are
        /// the first two entries.
        args:   Vec<Expr>,
        /// Line number in the source code.
        line:   usize,
    },
    /// `name(args);` — a statement-position call whose value is discarded.
    Call {
        /// The name of the function being called.
        name: String,
        /// The argument expressions.
        args: Vec<Expr>,
        /// Line number in the source code.
        line: usize,
    },
    /// `if (cond) { … } [else …]`
    If {
        /// The condition expression.
        condition:   Expr,
        /// The block executed when the condition is truthy.
        then_branch: Block,
        /// The `else` branch, if present.
        else_branch: Option<ElseArm>,
        /// Line number in the source code.
        line:        usize,
    },
    /// `while (cond) { … }`
    While {
        /// The condition expression, re-evaluated before each iteration.
        condition: Expr,
        /// The loop body.
        body:      Block,
        /// Line number in the source code.
        line:      usize,
    },
    /// `for (init?; cond?; update?) { … }`
    For {
        /// The initializer: a declaration or an assignment, if present.
        init:      Option<Box<Stmt>>,
        /// The condition; an omitted condition means `true`.
        condition: Option<Expr>,
        /// The update assignment run after each iteration, if present.
        update:    Option<Box<Stmt>>,
        /// The loop body.
        body:      Block,
        /// Line number in the source code.
        line:      usize,
    },
}

/// An abstract syntax tree node representing an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value.
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation (negation or logical not).
    Unary {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation.
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A builtin function call, e.g. `length(xs)`.
    Call {
        /// Name of the function being called.
        name: String,
        /// Arguments to the function.
        args: Vec<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// `rand(min, max)` — `rand` is a keyword, so this is its own node.
    Rand {
        /// The inclusive lower bound.
        min:  Box<Self>,
        /// The inclusive upper bound.
        max:  Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// `write(prompt)` — print the prompt and read one input line.
    Write {
        /// The prompt expression.
        prompt: Box<Self>,
        /// Line number in the source code.
        line:   usize,
    },
    /// A list display, e.g. `[1, 2, 3]`.
    ListLiteral {
        /// The element expressions.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// A dictionary display, e.g. `{"a": 1, "b": 2}`.
    DictLiteral {
        /// The key/value expression pairs, in source order.
        entries: Vec<(Self, Self)>,
        /// Line number in the source code.
        line:    usize,
    },
    /// An indexing expression, e.g. `xs[0]` or `d["key"]`.
    Index {
        /// The collection (or string) being indexed.
        object: Box<Self>,
        /// The index or key expression.
        index:  Box<Self>,
        /// Line number in the source code.
        line:   usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use voidlang::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::Unary { line, .. }
            | Self::Binary { line, .. }
            | Self::Call { line, .. }
            | Self::Rand { line, .. }
            | Self::Write { line, .. }
            | Self::ListLiteral { line, .. }
            | Self::DictLiteral { line, .. }
            | Self::Index { line, .. } => *line,
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`**`)
    Pow,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Logical and (`&&`); both operands are always evaluated.
    And,
    /// Logical or (`||`); both operands are always evaluated.
    Or,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "**",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::And => "&&",
            Self::Or => "||",
        };
        write!(f, "{operator}")
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
}
