use std::rc::Rc;

use tracing::trace;

use crate::{Position, Span, MK_TOKEN};

use super::tokens::{lookup_identifier, Token, TokenKind};

/// On-demand scanner over an in-memory source string.
///
/// Holds only the cursor; every call to [`Lexer::next_token`] produces one
/// token and moves past it. Once the input is exhausted every further call
/// yields `EOF`.
#[derive(Clone)]
pub struct Lexer {
    source: String,
    /// Byte offset of `ch`
    pos: usize,
    /// Byte offset of the character after `ch`
    next: usize,
    ch: Option<char>,
    file: Rc<String>,
    // Iterator state only, `next_token` ignores it
    eof_emitted: bool,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        let mut lexer = Lexer {
            source,
            pos: 0,
            next: 0,
            ch: None,
            file: file_name,
            eof_emitted: false,
        };
        lexer.read();
        lexer
    }

    fn read(&mut self) {
        match self.source[self.next..].chars().next() {
            Some(ch) => {
                self.ch = Some(ch);
                self.pos = self.next;
                self.next += ch.len_utf8();
            }
            None => {
                self.ch = None;
                self.pos = self.source.len();
            }
        }
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.pos;
        let (kind, literal) = match self.ch {
            None => (TokenKind::EOF, String::new()),
            Some(ch) if is_letter(ch) => {
                let literal = self.read_while(is_letter);
                (lookup_identifier(&literal), literal)
            }
            Some(ch) if ch.is_ascii_digit() => (TokenKind::Int, self.read_while(|c| c.is_ascii_digit())),
            Some(ch) => {
                self.read();
                (TokenKind::from_symbol(ch).unwrap_or(TokenKind::Illegal), ch.to_string())
            }
        };

        let token = MK_TOKEN!(kind, literal, self.span_from(start));
        trace!(kind = %token.kind, literal = %token.literal, offset = start, "lexed token");
        token
    }

    pub fn at_eof(&self) -> bool {
        self.ch.is_none()
    }

    fn read_while(&mut self, accept: fn(char) -> bool) -> String {
        let start = self.pos;
        while self.ch.is_some_and(accept) {
            self.read();
        }

        self.source[start..self.pos].to_string()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, Some(' ' | '\t' | '\n' | '\r')) {
            self.read();
        }
    }

    fn span_from(&self, start: usize) -> Span {
        Span {
            start: Position::from_offset(start, Rc::clone(&self.file)),
            end: Position::from_offset(self.pos, Rc::clone(&self.file)),
        }
    }
}

/// Yields every token up to and including the first `EOF`.
impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.eof_emitted {
            return None;
        }

        let token = self.next_token();
        self.eof_emitted = token.is(TokenKind::EOF);
        Some(token)
    }
}

fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

/// Scans the whole source, `EOF` token last.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    Lexer::new(source, file).collect()
}
