use std::fmt::{Debug, Display};

use super::{
    expressions::{IdentifierExpr, IntegerExpr, PrefixExpr},
    statements::{ExpressionStmt, LetStmt, ReturnStmt},
};

/// Node Trait
///
/// Shared behavior of every node in the tree. `Display` renders the node
/// back into source text that re-parses to an equivalent tree.
pub trait Node: Debug + Display {
    /// Returns the literal of the token that introduced the node.
    fn token_literal(&self) -> &str;
}

/// Statement Types
#[derive(PartialEq, Clone, Debug)]
pub enum Statement {
    Let(LetStmt),
    Return(ReturnStmt),
    Expression(ExpressionStmt),
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        match self {
            Statement::Let(stmt) => stmt.token_literal(),
            Statement::Return(stmt) => stmt.token_literal(),
            Statement::Expression(stmt) => stmt.token_literal(),
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Statement::Let(stmt) => write!(f, "{}", stmt),
            Statement::Return(stmt) => write!(f, "{}", stmt),
            Statement::Expression(stmt) => write!(f, "{}", stmt),
        }
    }
}

/// Expression Types
#[derive(PartialEq, Clone, Debug)]
pub enum Expression {
    Identifier(IdentifierExpr),
    Integer(IntegerExpr),
    Prefix(PrefixExpr),
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(expr) => expr.token_literal(),
            Expression::Integer(expr) => expr.token_literal(),
            Expression::Prefix(expr) => expr.token_literal(),
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Identifier(expr) => write!(f, "{}", expr),
            Expression::Integer(expr) => write!(f, "{}", expr),
            Expression::Prefix(expr) => write!(f, "{}", expr),
        }
    }
}

impl From<IdentifierExpr> for Expression {
    fn from(expr: IdentifierExpr) -> Self {
        Expression::Identifier(expr)
    }
}

impl From<IntegerExpr> for Expression {
    fn from(expr: IntegerExpr) -> Self {
        Expression::Integer(expr)
    }
}

impl From<PrefixExpr> for Expression {
    fn from(expr: PrefixExpr) -> Self {
        Expression::Prefix(expr)
    }
}

/// Root of the tree. Statements are kept in source order and print one
/// per line.
#[derive(PartialEq, Clone, Debug, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Node for Program {
    fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(|stmt| stmt.token_literal())
            .unwrap_or("")
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, stmt) in self.statements.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", stmt)?;

            // Without `;` the next statement would run into this expression
            if matches!(stmt, Statement::Expression(_)) && i + 1 < self.statements.len() {
                write!(f, ";")?;
            }
        }

        Ok(())
    }
}
