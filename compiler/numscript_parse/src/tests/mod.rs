//! Parser tests.
//!
//! - `parser`: statements, expressions, precedence, ranges
//! - `recovery`: error reporting and resynchronization

mod parser;
mod recovery;
