#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token stream.
///
/// The `Display` output of each variant is a fixed message that test suites
/// match verbatim; the line number is carried separately so hosts can prefix
/// it when reporting.
pub enum ParseError {
    /// The parser required a specific token and found something else.
    UnexpectedToken {
        /// The display name of the token that was required.
        expected: &'static str,
        /// The display name of the token that was found.
        got:      String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// No parse rule starts with the token in expression position.
    NoPrefixParseFunction {
        /// The display name of the offending token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An integer literal did not fit into a 64-bit signed integer.
    InvalidIntegerLiteral {
        /// The literal text as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl ParseError {
    /// Returns the source line this error was recorded on.
    pub const fn line_number(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::NoPrefixParseFunction { line, .. }
            | Self::InvalidIntegerLiteral { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, got, .. } => {
                write!(f, "expected next token to be {expected}, got {got} instead")
            },
            Self::NoPrefixParseFunction { token, .. } => {
                write!(f, "no prefix parse function for {token} found")
            },
            Self::InvalidIntegerLiteral { literal, .. } => {
                write!(f, "could not parse {literal:?} as integer")
            },
        }
    }
}

impl std::error::Error for ParseError {}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Every error the parser recorded for one source text.
///
/// The parser does not stop at the first problem; it records the error and
/// resynchronizes at the next statement, so a single run can report several
/// independent mistakes.
pub struct ParseFailure {
    /// The recorded errors, in source order.
    pub errors: Vec<ParseError>,
}

impl std::fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "parser has {} error(s)", self.errors.len())?;
        for error in &self.errors {
            writeln!(f, "line {}: {error}", error.line_number())?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseFailure {}
