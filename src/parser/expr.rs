use crate::{
    ast::{
        ast::Expression,
        expressions::{IdentifierExpr, IntegerExpr, PrefixExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{infix_handler, prefix_handler, Precedence},
    parser::Parser,
};

pub fn parse_expr(parser: &mut Parser, precedence: Precedence) -> Result<Expression, Error> {
    parser.enter_nesting()?;
    let expr = parse_nested_expr(parser, precedence);
    parser.leave_nesting();

    expr
}

fn parse_nested_expr(parser: &mut Parser, precedence: Precedence) -> Result<Expression, Error> {
    // First the prefix rule for the current token
    let kind = parser.current_token_kind();
    let Some(prefix) = prefix_handler(kind) else {
        return Err(Error::new(ErrorImpl::NoPrefixHandler { kind }, parser.get_position()));
    };

    let mut left = prefix(parser)?;

    // Then keep extending lhs while the next operator binds tighter
    while !parser.peek_is(TokenKind::Semicolon) && precedence < parser.peek_precedence() {
        let Some(infix) = infix_handler(parser.peek_token().kind) else {
            return Ok(left);
        };

        parser.advance();
        left = infix(parser, left)?;
    }

    Ok(left)
}

pub fn parse_identifier_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.current_token().clone();

    Ok(IdentifierExpr {
        value: token.literal.clone(),
        token,
    }
    .into())
}

pub fn parse_integer_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.current_token().clone();

    match token.literal.parse::<i64>() {
        Ok(value) => Ok(IntegerExpr { token, value }.into()),
        Err(_) => Err(Error::new(
            ErrorImpl::IntegerParse {
                literal: token.literal,
            },
            parser.get_position(),
        )),
    }
}

/// `!<expr>` and `-<expr>`; the operand binds at prefix precedence.
pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.advance();
    let operand = parse_expr(parser, Precedence::Prefix)?;

    Ok(PrefixExpr {
        operator: token.literal.clone(),
        token,
        operand: Box::new(operand),
    }
    .into())
}

/// `( <expr> )` yields the inner expression.
pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expression, Error> {
    parser.advance();
    let expr = parse_expr(parser, Precedence::Lowest)?;
    parser.expect_peek(TokenKind::RParen)?;

    Ok(expr)
}
