//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct. The parser keeps a two-token
//! window (`current` and `peek`) over the lexer and pulls a fresh token each
//! time it advances. Diagnostics are collected rather than returned early, so
//! a single pass reports every malformed statement it meets.

use tracing::debug;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{lookups::{precedence_of, Precedence}, stmt::parse_stmt};

/// Deepest expression nesting accepted before a statement is abandoned.
/// Keeps parsing, printing and dropping the resulting tree within the stack.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Token source, owned exclusively by the parser
    lexer: Lexer,
    /// Token under examination
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Diagnostics in the order they were found
    errors: Vec<Error>,
    /// Number of `parse_expr` calls currently on the stack
    depth: usize,
}

impl Parser {
    /// Creates a new Parser and fills the `current`/`peek` window.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        Parser {
            lexer,
            current,
            peek,
            errors: vec![],
            depth: 0,
        }
    }

    /// Parses statements until `EOF`.
    ///
    /// Always returns a tree. Statements that fail to parse are left out and
    /// their diagnostic is available from [`Parser::errors`].
    pub fn parse(&mut self) -> Program {
        self.errors.clear();
        self.depth = 0;
        let mut program = Program::default();

        while !self.current_is(TokenKind::EOF) {
            match parse_stmt(self) {
                Ok(stmt) => program.statements.push(stmt),
                Err(error) => {
                    debug!(error = %error, offset = error.get_position().0, "abandoned statement");
                    self.errors.push(error);
                    self.skip_past_statement();
                }
            }

            self.advance();
        }

        debug!(
            statements = program.statements.len(),
            errors = self.errors.len(),
            "parsed program"
        );
        program
    }

    /// Diagnostics from the most recent [`Parser::parse`] call.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    pub fn current_token(&self) -> &Token {
        &self.current
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    pub fn current_is(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.is(kind)
    }

    /// Shifts `peek` into `current`, pulls a new `peek` and returns the
    /// previous current token.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        let peek = std::mem::replace(&mut self.peek, next);
        std::mem::replace(&mut self.current, peek)
    }

    /// Advances only if `peek` has the expected kind.
    ///
    /// # Returns
    ///
    /// The token now in `current`, or an `UnexpectedToken` error located at
    /// `peek`.
    pub fn expect_peek(&mut self, expected: TokenKind) -> Result<Token, Error> {
        if self.peek_is(expected) {
            self.advance();
            Ok(self.current.clone())
        } else {
            Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected,
                    got: self.peek.kind,
                },
                self.peek.span.start.clone(),
            ))
        }
    }

    /// Enters one level of expression nesting, failing past
    /// [`MAX_NESTING_DEPTH`]. Every successful call is paired with
    /// [`Parser::leave_nesting`].
    pub fn enter_nesting(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn leave_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn peek_precedence(&self) -> Precedence {
        precedence_of(self.peek.kind)
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }

    // Stops on the `;` closing the statement, or on EOF
    fn skip_past_statement(&mut self) {
        while !self.current.is_one_of_many(&[TokenKind::Semicolon, TokenKind::EOF]) {
            self.advance();
        }
    }
}

/// Parses a whole source string.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance (holding the collected diagnostics)
/// - The parsed Program
pub fn parse(source: String, file: Option<String>) -> (Parser, Program) {
    let mut parser = Parser::new(Lexer::new(source, file));
    let program = parser.parse();

    (parser, program)
}
