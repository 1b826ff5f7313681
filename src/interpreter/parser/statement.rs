use crate::{
    ast::{BlockStatement, Statement},
    interpreter::{
        lexer::Token,
        parser::core::{Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses one statement starting at the current token.
    ///
    /// Anything that is not a `let` or `return` statement is parsed as an
    /// expression statement, which is what makes bare expressions such as
    /// `x + 10;` legal at the top level.
    pub(in crate::interpreter::parser) fn parse_statement(&mut self) -> Option<Statement> {
        match self.current().cloned() {
            Some(Token::Let) => self.parse_let_statement(),
            Some(Token::Return) => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses a `let` statement.
    ///
    /// Grammar: `let <identifier> = <expression> ";"?`
    fn parse_let_statement(&mut self) -> Option<Statement> {
        let line = self.current_line();

        if !self.expect_peek(&Token::Ident(String::new())) {
            return None;
        }
        let name = self.current_identifier()?;

        if !self.expect_peek(&Token::Assign) {
            return None;
        }
        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is(&Token::Semicolon) {
            self.next_token();
        }

        Some(Statement::Let { name, value, line })
    }

    /// Parses a `return` statement.
    ///
    /// The operand is optional: a bare `return` (followed by `;`, `}`, or the
    /// end of input) returns `null`.
    ///
    /// Grammar: `return <expression>? ";"?`
    fn parse_return_statement(&mut self) -> Option<Statement> {
        let line = self.current_line();

        let value = if matches!(self.peek(), None | Some(Token::Semicolon | Token::RBrace)) {
            None
        } else {
            self.next_token();
            Some(self.parse_expression(Precedence::Lowest)?)
        };

        if self.peek_is(&Token::Semicolon) {
            self.next_token();
        }

        Some(Statement::Return { value, line })
    }

    /// Parses a bare expression used as a statement. The trailing semicolon
    /// is optional so that expressions typed into the REPL need none.
    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let line = self.current_line();
        let expression = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is(&Token::Semicolon) {
            self.next_token();
        }

        Some(Statement::Expression { expression, line })
    }

    /// Parses a brace-delimited block. The current token must be `{`; on
    /// return the current token is the closing `}` (or the end of input if
    /// the block was never closed).
    pub(in crate::interpreter::parser) fn parse_block(&mut self) -> BlockStatement {
        let line = self.current_line();
        let mut statements = Vec::new();

        self.next_token();
        while !self.current_is(&Token::RBrace) && self.current().is_some() {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.next_token();
        }

        BlockStatement { statements, line }
    }
}
