//! Grammar productions, split by syntactic category.
//!
//! - `stmt`: `vars` blocks, statements, sources, blocks
//! - `expr`: precedence climbing and primary expressions

mod expr;
mod stmt;
