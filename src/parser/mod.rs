//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that pulls tokens from the lexer and
//! assembles a [`Program`](crate::ast::ast::Program). It uses a Pratt parser
//! for expressions and handles:
//!
//! - Statement parsing (`let`, `return`, bare expressions)
//! - Expression parsing (identifiers, integers, prefix operators, grouping)
//! - Error recovery and reporting
//!
//! Expression rules are resolved per token kind through static prefix and
//! infix lookups, with precedence gating the infix continuation.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod property_tests;
