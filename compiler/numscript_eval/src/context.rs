//! The private working copy of one run.
//!
//! `ExecutionContext` owns a copy of the input snapshot plus everything the
//! run has produced so far. It is consumed into an `ExecutionResult` only
//! when the whole program succeeds; on failure it is dropped.

use std::collections::BTreeMap;

use num_bigint::BigInt;
use num_traits::Signed;

use crate::result::{ExecutionResult, Posting};
use crate::store::{read_balance, read_metadata, AccountsMetadata, Balances, StaticStore};

#[derive(Clone, Debug)]
pub struct ExecutionContext {
    balances: Balances,
    metadata: AccountsMetadata,
    postings: Vec<Posting>,
    tx_metadata: BTreeMap<String, String>,
    account_metadata: AccountsMetadata,
    steps: u64,
}

impl ExecutionContext {
    pub fn from_store(store: &StaticStore) -> Self {
        ExecutionContext {
            balances: store.balances.clone(),
            metadata: store.metadata.clone(),
            postings: Vec::new(),
            tx_metadata: BTreeMap::new(),
            account_metadata: AccountsMetadata::new(),
            steps: 0,
        }
    }

    /// Current balance, including the effect of earlier statements.
    pub fn balance(&self, account: &str, asset: &str) -> BigInt {
        read_balance(&self.balances, account, asset)
    }

    /// Current account metadata, including the run's own writes.
    pub fn metadata(&self, account: &str, key: &str) -> Option<&str> {
        read_metadata(&self.metadata, account, key)
    }

    /// Move `amount` from `source` to `destination`. Records a posting only
    /// for a positive amount. Funds must already have been checked.
    pub fn transfer(&mut self, source: &str, destination: &str, asset: &str, amount: &BigInt) {
        if !amount.is_positive() {
            return;
        }
        *self.balance_entry(source, asset) -= amount;
        *self.balance_entry(destination, asset) += amount;
        self.postings.push(Posting {
            source: source.to_string(),
            destination: destination.to_string(),
            asset: asset.to_string(),
            amount: amount.clone(),
        });
    }

    fn balance_entry(&mut self, account: &str, asset: &str) -> &mut BigInt {
        self.balances
            .entry(account.to_string())
            .or_default()
            .entry(asset.to_string())
            .or_default()
    }

    pub fn set_tx_metadata(&mut self, key: String, value: String) {
        self.tx_metadata.insert(key, value);
    }

    pub fn set_account_metadata(&mut self, account: &str, key: &str, value: String) {
        self.metadata
            .entry(account.to_string())
            .or_default()
            .insert(key.to_string(), value.clone());
        self.account_metadata
            .entry(account.to_string())
            .or_default()
            .insert(key.to_string(), value);
    }

    /// Count one executed statement and return the new total.
    pub fn count_step(&mut self) -> u64 {
        self.steps = self.steps.saturating_add(1);
        self.steps
    }

    pub fn postings(&self) -> &[Posting] {
        &self.postings
    }

    pub fn into_result(self) -> ExecutionResult {
        ExecutionResult {
            postings: self.postings,
            tx_metadata: self.tx_metadata,
            account_metadata: self.account_metadata,
        }
    }
}

#[cfg(test)]
mod tests;
