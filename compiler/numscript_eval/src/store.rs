//! Balance and metadata snapshots supplied by the caller.
//!
//! Ordered maps keep every output deterministic.

use std::collections::BTreeMap;

use num_bigint::BigInt;
use num_traits::Zero;

/// `account -> asset -> amount`
pub type Balances = BTreeMap<String, BTreeMap<String, BigInt>>;

/// `account -> key -> value`
pub type AccountsMetadata = BTreeMap<String, BTreeMap<String, String>>;

/// `name -> raw value`, coerced to the declared types at the start of a run.
pub type Variables = BTreeMap<String, String>;

/// Immutable input snapshot. A run copies it and never writes back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticStore {
    pub balances: Balances,
    pub metadata: AccountsMetadata,
}

impl StaticStore {
    pub fn new(balances: Balances, metadata: AccountsMetadata) -> Self {
        StaticStore { balances, metadata }
    }

    #[must_use]
    pub fn with_balance(
        mut self,
        account: impl Into<String>,
        asset: impl Into<String>,
        amount: impl Into<BigInt>,
    ) -> Self {
        self.balances
            .entry(account.into())
            .or_default()
            .insert(asset.into(), amount.into());
        self
    }

    #[must_use]
    pub fn with_metadata(
        mut self,
        account: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.metadata
            .entry(account.into())
            .or_default()
            .insert(key.into(), value.into());
        self
    }

    /// Balance of `account` in `asset`; a missing entry is zero.
    pub fn balance(&self, account: &str, asset: &str) -> BigInt {
        read_balance(&self.balances, account, asset)
    }

    pub fn metadata(&self, account: &str, key: &str) -> Option<&str> {
        read_metadata(&self.metadata, account, key)
    }
}

pub(crate) fn read_balance(balances: &Balances, account: &str, asset: &str) -> BigInt {
    balances
        .get(account)
        .and_then(|assets| assets.get(asset))
        .cloned()
        .unwrap_or_else(BigInt::zero)
}

pub(crate) fn read_metadata<'a>(
    metadata: &'a AccountsMetadata,
    account: &str,
    key: &str,
) -> Option<&'a str> {
    metadata
        .get(account)
        .and_then(|entries| entries.get(key))
        .map(String::as_str)
}
