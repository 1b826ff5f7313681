use std::mem;

use crate::{
    ast::{Expression, Program},
    error::{ParseError, ParseFailure},
    interpreter::lexer::Token,
};

/// Binding power of the operator positions, from weakest to strongest.
///
/// The derived ordering is what drives the expression loop: an infix token
/// is only consumed while its precedence is strictly higher than the level
/// the caller is currently parsing at, which makes every binary operator
/// left-associative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// The starting level; no operator binds this weakly.
    Lowest,
    /// `==` and `!=`
    Equals,
    /// `<` and `>`
    LessGreater,
    /// `+` and binary `-`
    Sum,
    /// `*` and `/`
    Product,
    /// Prefix `-x` and `!x`
    Prefix,
    /// Call argument lists, `f(x)`
    Call,
    /// Index access, `a[i]`
    Index,
}

impl Precedence {
    /// Returns the binding power `token` has in infix position.
    /// Tokens that cannot appear there bind at [`Self::Lowest`].
    pub const fn of_token(token: &Token) -> Self {
        match token {
            Token::Equal | Token::NotEqual => Self::Equals,
            Token::LessThan | Token::GreaterThan => Self::LessGreater,
            Token::Plus | Token::Minus => Self::Sum,
            Token::Slash | Token::Asterisk => Self::Product,
            Token::LParen => Self::Call,
            Token::LBracket => Self::Index,
            _ => Self::Lowest,
        }
    }
}

/// Parses a token stream into a [`Program`].
///
/// The parser does not stop at the first syntax error: it records the error,
/// resynchronizes at the next statement, and keeps going, so the returned
/// [`ParseFailure`] lists every problem in the source.
///
/// # Parameters
/// - `tokens`: The `(token, line)` pairs produced by
///   [`tokenize`](crate::interpreter::lexer::tokenize).
///
/// # Errors
/// Returns a [`ParseFailure`] carrying every recorded [`ParseError`] if the
/// source contains at least one syntax error.
pub fn parse(tokens: &[(Token, usize)]) -> Result<Program, ParseFailure> {
    let mut parser = Parser::new(tokens);
    let program = parser.parse_program();

    if parser.errors.is_empty() {
        Ok(program)
    } else {
        Err(ParseFailure { errors: parser.errors })
    }
}

/// A Pratt parser over a materialized token stream.
///
/// The parser keeps one token of lookahead: most parse functions inspect the
/// token at `position` ("current") and the one after it ("peek"), and every
/// parse function leaves `position` on the last token of what it parsed.
pub struct Parser<'a> {
    pub(in crate::interpreter::parser) tokens:   &'a [(Token, usize)],
    pub(in crate::interpreter::parser) position: usize,
    pub(in crate::interpreter::parser) errors:   Vec<ParseError>,
}

impl<'a> Parser<'a> {
    /// Creates a parser positioned at the first token of `tokens`.
    pub const fn new(tokens: &'a [(Token, usize)]) -> Self {
        Self { tokens,
               position: 0,
               errors: Vec::new() }
    }

    /// Parses statements until the token stream is exhausted.
    ///
    /// Statements that fail to parse are skipped; the corresponding errors
    /// accumulate in the parser and are surfaced by [`parse`].
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while self.current().is_some() {
            if let Some(statement) = self.parse_statement() {
                program.statements.push(statement);
            }
            self.next_token();
        }

        program
    }

    /// Parses one expression at the given binding power.
    ///
    /// This is the Pratt core loop: parse a prefix form for the current
    /// token, then keep folding infix operators into the left-hand side
    /// while the peek token binds more strongly than `precedence`.
    pub(in crate::interpreter::parser) fn parse_expression(&mut self,
                                                           precedence: Precedence)
                                                           -> Option<Expression> {
        let mut left = self.parse_prefix()?;

        while !self.peek_is(&Token::Semicolon) && precedence < self.peek_precedence() {
            self.next_token();
            left = self.parse_infix(left)?;
        }

        Some(left)
    }

    pub(in crate::interpreter::parser) fn current(&self) -> Option<&Token> {
        self.tokens.get(self.position).map(|(token, _)| token)
    }

    pub(in crate::interpreter::parser) fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position + 1).map(|(token, _)| token)
    }

    pub(in crate::interpreter::parser) fn next_token(&mut self) {
        self.position += 1;
    }

    /// The line of the current token, falling back to the last line of the
    /// stream once the parser has run past the end.
    pub(in crate::interpreter::parser) fn current_line(&self) -> usize {
        self.tokens.get(self.position)
                   .or_else(|| self.tokens.last())
                   .map_or(1, |(_, line)| *line)
    }

    pub(in crate::interpreter::parser) fn peek_line(&self) -> usize {
        self.tokens.get(self.position + 1)
                   .or_else(|| self.tokens.last())
                   .map_or(1, |(_, line)| *line)
    }

    /// Whether the current token has the same kind as `kind`, ignoring any
    /// payload such as an identifier's name.
    pub(in crate::interpreter::parser) fn current_is(&self, kind: &Token) -> bool {
        self.current().is_some_and(|token| mem::discriminant(token) == mem::discriminant(kind))
    }

    pub(in crate::interpreter::parser) fn peek_is(&self, kind: &Token) -> bool {
        self.peek().is_some_and(|token| mem::discriminant(token) == mem::discriminant(kind))
    }

    pub(in crate::interpreter::parser) fn current_precedence(&self) -> Precedence {
        self.current().map_or(Precedence::Lowest, Precedence::of_token)
    }

    pub(in crate::interpreter::parser) fn peek_precedence(&self) -> Precedence {
        self.peek().map_or(Precedence::Lowest, Precedence::of_token)
    }

    /// The display name of the current token, or `EOF` past the end.
    pub(in crate::interpreter::parser) fn current_name(&self) -> String {
        self.current().map_or_else(|| "EOF".to_string(), |token| token.type_name().to_string())
    }

    pub(in crate::interpreter::parser) fn peek_name(&self) -> String {
        self.peek().map_or_else(|| "EOF".to_string(), |token| token.type_name().to_string())
    }

    /// Advances past the peek token if it has the expected kind; otherwise
    /// records an `expected next token to be ...` error and stays put.
    pub(in crate::interpreter::parser) fn expect_peek(&mut self, expected: &Token) -> bool {
        if self.peek_is(expected) {
            self.next_token();
            true
        } else {
            self.errors.push(ParseError::UnexpectedToken { expected: expected.type_name(),
                                                           got:      self.peek_name(),
                                                           line:     self.peek_line(), });
            false
        }
    }

    /// Returns the current token's identifier name, or records an error if
    /// the current token is not an identifier.
    pub(in crate::interpreter::parser) fn current_identifier(&mut self) -> Option<String> {
        if let Some(Token::Ident(name)) = self.current() {
            return Some(name.clone());
        }
        self.errors.push(ParseError::UnexpectedToken { expected: "IDENT",
                                                       got:      self.current_name(),
                                                       line:     self.current_line(), });
        None
    }
}
