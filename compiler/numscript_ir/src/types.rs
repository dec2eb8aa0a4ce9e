//! Declared variable types.

use std::fmt;

/// The closed set of value types a script can declare.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Type {
    Account,
    Asset,
    Number,
    Monetary,
    Portion,
    String,
    Bool,
}

impl Type {
    /// All types, in declaration-keyword order.
    pub const ALL: [Type; 7] = [
        Type::Account,
        Type::Asset,
        Type::Number,
        Type::Monetary,
        Type::Portion,
        Type::String,
        Type::Bool,
    ];

    /// Resolve a type keyword as written in a `vars` block.
    pub fn from_name(name: &str) -> Option<Type> {
        Type::ALL.into_iter().find(|ty| ty.as_str() == name)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Type::Account => "account",
            Type::Asset => "asset",
            Type::Number => "number",
            Type::Monetary => "monetary",
            Type::Portion => "portion",
            Type::String => "string",
            Type::Bool => "bool",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
