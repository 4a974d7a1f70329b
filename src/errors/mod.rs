//! Diagnostic types produced while parsing.
//!
//! This module defines:
//!
//! - Error structures carrying the source position of the offending token
//! - Specific error variants for each syntax failure
//! - Helpful suggestions shown alongside rendered diagnostics

pub mod errors;
