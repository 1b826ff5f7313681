use crate::{
    ast::{Expression, InfixOperator},
    interpreter::{
        lexer::Token,
        parser::core::{Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses the infix form whose introducing token is current, folding the
    /// already-parsed `left` operand into it. `(` starts a call, `[` starts
    /// an index access, and everything else is a binary operator.
    pub(in crate::interpreter::parser) fn parse_infix(&mut self,
                                                      left: Expression)
                                                      -> Option<Expression> {
        if self.current_is(&Token::LParen) {
            return self.parse_call_expression(left);
        }
        if self.current_is(&Token::LBracket) {
            return self.parse_index_expression(left);
        }
        self.parse_infix_expression(left)
    }

    /// Parses `<left> <op> <right>`. The right operand is parsed at the
    /// operator's own precedence, which makes every binary operator
    /// left-associative.
    fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let operator = self.current().and_then(infix_operator)?;
        let line = self.current_line();
        let precedence = self.current_precedence();

        self.next_token();
        let right = self.parse_expression(precedence)?;

        Some(Expression::Infix { left: Box::new(left),
                                 operator,
                                 right: Box::new(right),
                                 line })
    }

    /// Parses a call's argument list: `<callee> "(" <arguments>? ")"`.
    fn parse_call_expression(&mut self, function: Expression) -> Option<Expression> {
        let line = self.current_line();
        let arguments = self.parse_expression_list(&Token::RParen)?;

        Some(Expression::Call { function: Box::new(function),
                                arguments,
                                line })
    }

    /// Parses `<left> "[" <index> "]"`.
    fn parse_index_expression(&mut self, left: Expression) -> Option<Expression> {
        let line = self.current_line();

        self.next_token();
        let index = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(&Token::RBracket) {
            return None;
        }

        Some(Expression::Index { left: Box::new(left),
                                 index: Box::new(index),
                                 line })
    }

    /// Parses a comma-separated expression list up to `closing`.
    ///
    /// This is shared by call argument lists and array literals. The peek
    /// token must be the first element or the closing token; an immediately
    /// encountered closing token produces an empty list.
    ///
    /// Grammar (simplified): `list := (expression ("," expression)*)?`
    pub(in crate::interpreter::parser) fn parse_expression_list(&mut self,
                                                                closing: &Token)
                                                                -> Option<Vec<Expression>> {
        let mut items = Vec::new();

        if self.peek_is(closing) {
            self.next_token();
            return Some(items);
        }

        self.next_token();
        items.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_is(&Token::Comma) {
            self.next_token();
            self.next_token();
            items.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(closing) {
            return None;
        }

        Some(items)
    }
}

/// Maps a token to the binary operator it denotes, if any. The expression
/// loop only enters infix position for tokens with a binding power, so a
/// `None` here ends the fold without consuming anything.
const fn infix_operator(token: &Token) -> Option<InfixOperator> {
    match token {
        Token::Plus => Some(InfixOperator::Plus),
        Token::Minus => Some(InfixOperator::Minus),
        Token::Asterisk => Some(InfixOperator::Asterisk),
        Token::Slash => Some(InfixOperator::Slash),
        Token::LessThan => Some(InfixOperator::LessThan),
        Token::GreaterThan => Some(InfixOperator::GreaterThan),
        Token::Equal => Some(InfixOperator::Equal),
        Token::NotEqual => Some(InfixOperator::NotEqual),
        _ => None,
    }
}
