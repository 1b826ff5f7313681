use crate::{
    ast::{BlockStatement, Expression, PrefixOperator, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses the prefix form that starts at the current token: a literal,
    /// an identifier, a prefix operator, a grouped expression, an `if`
    /// expression, a function literal, or an array/hash literal.
    ///
    /// A token with no prefix rule records a
    /// `no prefix parse function for <T> found` error.
    pub(in crate::interpreter::parser) fn parse_prefix(&mut self) -> Option<Expression> {
        match self.current().cloned() {
            Some(Token::Ident(name)) => Some(Expression::Identifier { name,
                                                                      line: self.current_line() }),
            Some(Token::Int(literal)) => self.parse_integer_literal(&literal),
            Some(Token::Str(value)) => Some(Expression::StringLiteral { value,
                                                                        line:
                                                                            self.current_line() }),
            Some(Token::True) => Some(Expression::Boolean { value: true,
                                                            line:  self.current_line(), }),
            Some(Token::False) => Some(Expression::Boolean { value: false,
                                                             line:  self.current_line(), }),
            Some(Token::Bang) => self.parse_prefix_expression(PrefixOperator::Bang),
            Some(Token::Minus) => self.parse_prefix_expression(PrefixOperator::Minus),
            Some(Token::LParen) => self.parse_grouped_expression(),
            Some(Token::If) => self.parse_if_expression(),
            Some(Token::Function) => self.parse_function_literal(),
            Some(Token::LBracket) => self.parse_array_literal(),
            Some(Token::LBrace) => self.parse_hash_literal(),
            _ => {
                self.errors.push(ParseError::NoPrefixParseFunction { token: self.current_name(),
                                                                     line:  self.current_line(), });
                None
            },
        }
    }

    fn parse_integer_literal(&mut self, literal: &str) -> Option<Expression> {
        let line = self.current_line();
        match literal.parse::<i64>() {
            Ok(value) => Some(Expression::IntegerLiteral { value, line }),
            Err(_) => {
                self.errors.push(ParseError::InvalidIntegerLiteral { literal:
                                                                         literal.to_string(),
                                                                     line });
                None
            },
        }
    }

    /// Parses `!<operand>` or `-<operand>`. The operand is parsed at
    /// [`Precedence::Prefix`], so prefix operators bind more tightly than
    /// any binary operator.
    fn parse_prefix_expression(&mut self, operator: PrefixOperator) -> Option<Expression> {
        let line = self.current_line();
        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;

        Some(Expression::Prefix { operator,
                                  right: Box::new(right),
                                  line })
    }

    /// Parses `( <expression> )`. Grouping simply restarts the precedence
    /// climb at [`Precedence::Lowest`]; no dedicated AST node is needed.
    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();
        let expression = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(&Token::RParen) {
            return None;
        }

        Some(expression)
    }

    /// Parses an `if` expression.
    ///
    /// Grammar: `if "(" <condition> ")" <block> ("else" (<block> | <if>))?`
    ///
    /// `else if` chains are parsed by nesting: the chained conditional
    /// becomes the single statement of a synthetic alternative block.
    fn parse_if_expression(&mut self) -> Option<Expression> {
        let line = self.current_line();

        if !self.expect_peek(&Token::LParen) {
            return None;
        }
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(&Token::RParen) {
            return None;
        }
        if !self.expect_peek(&Token::LBrace) {
            return None;
        }
        let consequence = self.parse_block();

        let alternative = if self.peek_is(&Token::Else) {
            self.next_token();
            if self.peek_is(&Token::If) {
                self.next_token();
                let nested_line = self.current_line();
                let nested = self.parse_if_expression()?;
                Some(BlockStatement { statements: vec![Statement::Expression { expression: nested,
                                                                               line: nested_line, }],
                                      line:       nested_line, })
            } else {
                if !self.expect_peek(&Token::LBrace) {
                    return None;
                }
                Some(self.parse_block())
            }
        } else {
            None
        };

        Some(Expression::If { condition: Box::new(condition),
                              consequence,
                              alternative,
                              line })
    }

    /// Parses a function literal.
    ///
    /// Grammar: `fn "(" (<identifier> ("," <identifier>)*)? ")" <block>`
    fn parse_function_literal(&mut self) -> Option<Expression> {
        let line = self.current_line();

        if !self.expect_peek(&Token::LParen) {
            return None;
        }
        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(&Token::LBrace) {
            return None;
        }
        let body = self.parse_block();

        Some(Expression::FunctionLiteral { parameters, body, line })
    }

    fn parse_function_parameters(&mut self) -> Option<Vec<String>> {
        let mut parameters = Vec::new();

        if self.peek_is(&Token::RParen) {
            self.next_token();
            return Some(parameters);
        }

        self.next_token();
        parameters.push(self.current_identifier()?);

        while self.peek_is(&Token::Comma) {
            self.next_token();
            self.next_token();
            parameters.push(self.current_identifier()?);
        }

        if !self.expect_peek(&Token::RParen) {
            return None;
        }

        Some(parameters)
    }

    /// Parses an array literal: `"[" (<expression> ("," <expression>)*)? "]"`.
    fn parse_array_literal(&mut self) -> Option<Expression> {
        let line = self.current_line();
        let elements = self.parse_expression_list(&Token::RBracket)?;

        Some(Expression::ArrayLiteral { elements, line })
    }

    /// Parses a hash literal. An empty `{}` is an empty hash; braces only
    /// ever open a block in statement position inside `if` and `fn`.
    ///
    /// Grammar: `"{" (<expression> ":" <expression>)% "}"`
    fn parse_hash_literal(&mut self) -> Option<Expression> {
        let line = self.current_line();
        let mut pairs = Vec::new();

        while !self.peek_is(&Token::RBrace) {
            self.next_token();
            let key = self.parse_expression(Precedence::Lowest)?;

            if !self.expect_peek(&Token::Colon) {
                return None;
            }
            self.next_token();
            let value = self.parse_expression(Precedence::Lowest)?;
            pairs.push((key, value));

            if !self.peek_is(&Token::RBrace) && !self.expect_peek(&Token::Comma) {
                return None;
            }
        }

        if !self.expect_peek(&Token::RBrace) {
            return None;
        }

        Some(Expression::HashLiteral { pairs, line })
    }
}
