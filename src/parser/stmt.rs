use crate::{
    ast::{
        ast::Statement,
        expressions::IdentifierExpr,
        statements::{ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    expr::parse_expr,
    lookups::{stmt_handler, Precedence},
    parser::Parser,
};

pub fn parse_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    stmt_handler(parser.current_token_kind())(parser)
}

/// `let <ident> = <expr>;`
pub fn parse_let_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.current_token().clone();

    let name_token = parser.expect_peek(TokenKind::Ident)?;
    let name = IdentifierExpr {
        value: name_token.literal.clone(),
        token: name_token,
    };

    parser.expect_peek(TokenKind::Assign)?;
    parser.advance();

    let value = parse_expr(parser, Precedence::Lowest)?;
    consume_semicolon(parser);

    Ok(Statement::Let(LetStmt {
        token,
        name,
        value: Some(value),
    }))
}

/// `return <expr>;` or a bare `return;`
pub fn parse_return_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.advance();

    let value = if parser
        .current_token()
        .is_one_of_many(&[TokenKind::Semicolon, TokenKind::EOF])
    {
        None
    } else {
        let value = parse_expr(parser, Precedence::Lowest)?;
        consume_semicolon(parser);
        Some(value)
    };

    Ok(Statement::Return(ReturnStmt { token, value }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, Precedence::Lowest)?;
    consume_semicolon(parser);

    Ok(Statement::Expression(ExpressionStmt { token, expression }))
}

// The terminating `;` is optional
fn consume_semicolon(parser: &mut Parser) {
    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
    }
}
