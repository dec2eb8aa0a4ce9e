//! Runtime error types.
//!
//! Every failure aborts the whole run: the caller gets either a complete
//! result or exactly one `EvalError`. The error carries the range of the
//! innermost construct that failed, when one is known.

use num_bigint::BigInt;
use numscript_ir::{Range, Type};

/// Result of an evaluation step.
pub type EvalResult<T> = Result<T, EvalError>;

/// A caller-supplied variable could not be bound.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BindingError {
    #[error("no value provided for the variable `${name}`")]
    Missing { name: String },
    #[error("`{value}` is not a valid {ty} for the variable `${name}`")]
    Malformed {
        name: String,
        ty: Type,
        value: String,
    },
    #[error("the variable `${name}` is not declared")]
    Unbound { name: String },
    #[error("the variable `${name}` has unknown type `{type_name}`")]
    UnknownType { name: String, type_name: String },
}

/// An allocation cannot be split.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AllocationError {
    #[error("allocation portions add up to more than 100%")]
    Overflow,
    #[error("allocation portions add up to less than 100% and no branch keeps the remainder")]
    Underflow,
    #[error("an allocation may have at most one `remaining` branch")]
    MultipleRemaining,
    #[error("`{portion}` is not a portion between 0 and 1")]
    InvalidPortion { portion: String },
    #[error("an allocation needs at least one branch")]
    NoBranches,
}

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    #[error(transparent)]
    Binding(#[from] BindingError),
    #[error("type mismatch: expected `{expected}`, got `{got}`")]
    TypeMismatch { expected: Type, got: Type },
    #[error("mismatched assets: `{left}` and `{right}`")]
    MismatchedAssets { left: String, right: String },
    #[error(
        "insufficient funds: `@{account}` needs {needed} {asset} but only {available} is available"
    )]
    InsufficientFunds {
        account: String,
        asset: String,
        needed: BigInt,
        available: BigInt,
    },
    #[error(transparent)]
    Allocation(#[from] AllocationError),
    #[error("amounts must not be negative")]
    NegativeAmount,
    #[error("the {asset} balance of `@{account}` is negative")]
    NegativeBalance { account: String, asset: String },
    #[error("`@{account}` has no metadata `{key}`")]
    MissingMetadata { account: String, key: String },
    #[error("execution was cancelled")]
    Cancelled,
    #[error("step limit of {limit} statements exceeded")]
    StepLimitExceeded { limit: u64 },
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Source range of the innermost failing construct.
    pub range: Option<Range>,
}

impl EvalError {
    pub fn new(kind: impl Into<EvalErrorKind>) -> Self {
        EvalError {
            kind: kind.into(),
            range: None,
        }
    }

    /// Attach `range` unless a more precise one is already set.
    #[must_use]
    pub fn at(mut self, range: Range) -> Self {
        if self.range.is_none() {
            self.range = Some(range);
        }
        self
    }

    #[cold]
    pub fn type_mismatch(expected: Type, got: Type) -> Self {
        EvalError::new(EvalErrorKind::TypeMismatch { expected, got })
    }

    #[cold]
    pub fn mismatched_assets(left: &str, right: &str) -> Self {
        EvalError::new(EvalErrorKind::MismatchedAssets {
            left: left.to_string(),
            right: right.to_string(),
        })
    }

    #[cold]
    pub fn negative_amount() -> Self {
        EvalError::new(EvalErrorKind::NegativeAmount)
    }

    #[cold]
    pub fn unbound(name: &str) -> Self {
        EvalError::new(BindingError::Unbound {
            name: name.to_string(),
        })
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::new(kind)
    }
}

impl From<BindingError> for EvalError {
    fn from(error: BindingError) -> Self {
        EvalError::new(error)
    }
}

impl From<AllocationError> for EvalError {
    fn from(error: AllocationError) -> Self {
        EvalError::new(error)
    }
}
