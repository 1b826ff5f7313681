use std::fmt;

/// The root node of a parsed script: an ordered list of statements.
///
/// Rendering a `Program` with `Display` concatenates the canonical string
/// forms of its statements, which is also the representation the parser
/// tests compare against.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// The top-level statements in source order.
    pub statements: Vec<Statement>,
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

/// A single statement.
///
/// Statements either bind a value (`let`), leave the enclosing function
/// (`return`), or evaluate an expression for its value.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `let <name> = <value>;`
    Let {
        /// The identifier being bound.
        name:  String,
        /// The bound expression.
        value: Expression,
        /// The source line of the `let` keyword.
        line:  usize,
    },
    /// `return <value>;` — the operand may be omitted entirely.
    Return {
        /// The returned expression, if one was written.
        value: Option<Expression>,
        /// The source line of the `return` keyword.
        line:  usize,
    },
    /// A bare expression used as a statement, such as `x + 10;`.
    Expression {
        /// The wrapped expression.
        expression: Expression,
        /// The source line where the expression starts.
        line:       usize,
    },
}

impl Statement {
    /// Returns the source line this statement starts on.
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Let { line, .. } | Self::Return { line, .. } | Self::Expression { line, .. } => {
                *line
            },
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value, .. } => write!(f, "let {name} = {value};"),
            Self::Return { value: Some(value), .. } => write!(f, "return {value};"),
            Self::Return { value: None, .. } => write!(f, "return;"),
            Self::Expression { expression, .. } => write!(f, "{expression}"),
        }
    }
}

/// A brace-delimited sequence of statements, as used by `if` arms and
/// function bodies.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    /// The statements inside the braces.
    pub statements: Vec<Statement>,
    /// The source line of the opening `{`.
    pub line:       usize,
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

/// An expression node.
///
/// Every variant carries the source line of its introducing token, and every
/// variant renders to a fully parenthesized canonical string so that operator
/// precedence and associativity can be checked textually.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A name such as `x` or `add`.
    Identifier {
        /// The identifier text.
        name: String,
        /// The source line of the identifier.
        line: usize,
    },
    /// An integer literal such as `5`.
    IntegerLiteral {
        /// The literal value.
        value: i64,
        /// The source line of the literal.
        line:  usize,
    },
    /// A double-quoted string literal.
    StringLiteral {
        /// The string contents, without the quotes.
        value: String,
        /// The source line of the literal.
        line:  usize,
    },
    /// `true` or `false`.
    Boolean {
        /// The literal value.
        value: bool,
        /// The source line of the literal.
        line:  usize,
    },
    /// A prefix operation such as `!ok` or `-5`.
    Prefix {
        /// The prefix operator.
        operator: PrefixOperator,
        /// The operand.
        right:    Box<Expression>,
        /// The source line of the operator.
        line:     usize,
    },
    /// A binary operation such as `a + b`.
    Infix {
        /// The left operand.
        left:     Box<Expression>,
        /// The binary operator.
        operator: InfixOperator,
        /// The right operand.
        right:    Box<Expression>,
        /// The source line of the operator.
        line:     usize,
    },
    /// `if (<condition>) { ... }` with an optional `else` arm.
    If {
        /// The branch condition.
        condition:   Box<Expression>,
        /// The block run when the condition is truthy.
        consequence: BlockStatement,
        /// The block run otherwise, if present.
        alternative: Option<BlockStatement>,
        /// The source line of the `if` keyword.
        line:        usize,
    },
    /// A function literal such as `fn(x, y) { x + y; }`.
    FunctionLiteral {
        /// The parameter names, in order.
        parameters: Vec<String>,
        /// The function body.
        body:       BlockStatement,
        /// The source line of the `fn` keyword.
        line:       usize,
    },
    /// A call such as `add(1, 2 * 3)`; the callee is an arbitrary expression.
    Call {
        /// The expression being called.
        function:  Box<Expression>,
        /// The argument expressions, in order.
        arguments: Vec<Expression>,
        /// The source line of the opening `(`.
        line:      usize,
    },
    /// An array literal such as `[1, 2 * 2]`.
    ArrayLiteral {
        /// The element expressions, in order.
        elements: Vec<Expression>,
        /// The source line of the opening `[`.
        line:     usize,
    },
    /// An index operation such as `myArray[0]`.
    Index {
        /// The expression being indexed.
        left:  Box<Expression>,
        /// The index expression.
        index: Box<Expression>,
        /// The source line of the opening `[`.
        line:  usize,
    },
    /// A hash literal such as `{"one": 1, "two": 2}`.
    ///
    /// Pairs are kept in literal order here; the evaluator's hash table does
    /// not preserve that order.
    HashLiteral {
        /// The key/value expression pairs, in literal order.
        pairs: Vec<(Expression, Expression)>,
        /// The source line of the opening `{`.
        line:  usize,
    },
}

impl Expression {
    /// Returns the source line this expression starts on.
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Identifier { line, .. }
            | Self::IntegerLiteral { line, .. }
            | Self::StringLiteral { line, .. }
            | Self::Boolean { line, .. }
            | Self::Prefix { line, .. }
            | Self::Infix { line, .. }
            | Self::If { line, .. }
            | Self::FunctionLiteral { line, .. }
            | Self::Call { line, .. }
            | Self::ArrayLiteral { line, .. }
            | Self::Index { line, .. }
            | Self::HashLiteral { line, .. } => *line,
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier { name, .. } => write!(f, "{name}"),
            Self::IntegerLiteral { value, .. } => write!(f, "{value}"),
            Self::StringLiteral { value, .. } => write!(f, "{value}"),
            Self::Boolean { value, .. } => write!(f, "{value}"),
            Self::Prefix { operator, right, .. } => write!(f, "({operator}{right})"),
            Self::Infix { left, operator, right, .. } => {
                write!(f, "({left} {operator} {right})")
            },
            Self::If { condition, consequence, alternative, .. } => {
                write!(f, "if{condition} {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, "else {alternative}")?;
                }
                Ok(())
            },
            Self::FunctionLiteral { parameters, body, .. } => {
                write!(f, "fn({}) {body}", parameters.join(", "))
            },
            Self::Call { function, arguments, .. } => {
                write!(f, "{function}({})", join_expressions(arguments))
            },
            Self::ArrayLiteral { elements, .. } => {
                write!(f, "[{}]", join_expressions(elements))
            },
            Self::Index { left, index, .. } => write!(f, "({left}[{index}])"),
            Self::HashLiteral { pairs, .. } => {
                let pairs: Vec<String> =
                    pairs.iter().map(|(key, value)| format!("{key}: {value}")).collect();
                write!(f, "{{{}}}", pairs.join(", "))
            },
        }
    }
}

fn join_expressions(expressions: &[Expression]) -> String {
    expressions.iter()
               .map(ToString::to_string)
               .collect::<Vec<_>>()
               .join(", ")
}

/// Operators that appear before their single operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Logical negation, `!`.
    Bang,
    /// Arithmetic negation, `-`.
    Minus,
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bang => write!(f, "!"),
            Self::Minus => write!(f, "-"),
        }
    }
}

/// Operators that appear between two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixOperator {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `<`
    LessThan,
    /// `>`
    GreaterThan,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Asterisk => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::LessThan => write!(f, "<"),
            Self::GreaterThan => write!(f, ">"),
            Self::Equal => write!(f, "=="),
            Self::NotEqual => write!(f, "!="),
        }
    }
}
