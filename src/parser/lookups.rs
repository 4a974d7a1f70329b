use crate::{
    ast::ast::{Expression, Statement},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Operator precedence, lowest to highest.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum Precedence {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Statement, Error>;
pub type PrefixHandler = fn(&mut Parser) -> Result<Expression, Error>;
pub type InfixHandler = fn(&mut Parser, Expression) -> Result<Expression, Error>;

/// Statement rule for a leading token. Anything that does not start a
/// dedicated statement is parsed as an expression statement.
pub fn stmt_handler(kind: TokenKind) -> StmtHandler {
    match kind {
        TokenKind::Let => parse_let_stmt,
        TokenKind::Return => parse_return_stmt,
        _ => parse_expression_stmt,
    }
}

pub fn prefix_handler(kind: TokenKind) -> Option<PrefixHandler> {
    let handler: PrefixHandler = match kind {
        TokenKind::Ident => parse_identifier_expr,
        TokenKind::Int => parse_integer_expr,
        TokenKind::Bang | TokenKind::Minus => parse_prefix_expr,
        TokenKind::LParen => parse_grouping_expr,
        _ => return None,
    };

    Some(handler)
}

/// No infix operators are registered yet; operators listed in
/// [`precedence_of`] get their rule here.
pub fn infix_handler(_kind: TokenKind) -> Option<InfixHandler> {
    None
}

pub fn precedence_of(kind: TokenKind) -> Precedence {
    match kind {
        TokenKind::Lt | TokenKind::Gt => Precedence::LessGreater,
        TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
        TokenKind::Asterisk | TokenKind::Slash => Precedence::Product,
        TokenKind::LParen => Precedence::Call,
        _ => Precedence::Lowest,
    }
}
