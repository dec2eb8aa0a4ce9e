//! Runtime values.
//!
//! Quantities are arbitrary precision. `Display` produces the canonical
//! string form used when a value is written to metadata.

use std::fmt;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use numscript_ir::Type;

/// An amount of one asset.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Monetary {
    pub asset: String,
    pub amount: BigInt,
}

impl Monetary {
    pub fn new(asset: impl Into<String>, amount: impl Into<BigInt>) -> Self {
        Monetary {
            asset: asset.into(),
            amount: amount.into(),
        }
    }
}

impl fmt::Display for Monetary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.asset, self.amount)
    }
}

/// An exact rational in `[0, 1]`, always reduced, denominator positive.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Portion {
    numerator: BigInt,
    denominator: BigInt,
}

impl Portion {
    /// Build a reduced portion; `None` unless `0 <= numerator <= denominator`
    /// and the denominator is positive.
    pub fn new(numerator: BigInt, denominator: BigInt) -> Option<Self> {
        if !denominator.is_positive() || numerator.is_negative() || numerator > denominator {
            return None;
        }
        let gcd = numerator.gcd(&denominator);
        Some(Portion {
            numerator: numerator / &gcd,
            denominator: denominator / gcd,
        })
    }

    pub fn zero() -> Self {
        Portion {
            numerator: BigInt::zero(),
            denominator: BigInt::one(),
        }
    }

    pub fn one() -> Self {
        Portion {
            numerator: BigInt::one(),
            denominator: BigInt::one(),
        }
    }

    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// `floor(total * self)`.
    pub fn share_of(&self, total: &BigInt) -> BigInt {
        (total * &self.numerator).div_floor(&self.denominator)
    }
}

impl fmt::Display for Portion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// A runtime value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    /// Account name without the leading `@`.
    Account(String),
    Asset(String),
    Number(BigInt),
    Monetary(Monetary),
    Portion(Portion),
    String(String),
    Bool(bool),
}

impl Value {
    pub fn ty(&self) -> Type {
        match self {
            Value::Account(_) => Type::Account,
            Value::Asset(_) => Type::Asset,
            Value::Number(_) => Type::Number,
            Value::Monetary(_) => Type::Monetary,
            Value::Portion(_) => Type::Portion,
            Value::String(_) => Type::String,
            Value::Bool(_) => Type::Bool,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Account(name) => f.write_str(name),
            Value::Asset(asset) => f.write_str(asset),
            Value::Number(n) => write!(f, "{n}"),
            Value::Monetary(m) => write!(f, "{m}"),
            Value::Portion(p) => write!(f, "{p}"),
            Value::String(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}
