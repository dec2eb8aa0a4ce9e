//! Output of a successful run.

use std::collections::BTreeMap;

use num_bigint::BigInt;

use crate::store::AccountsMetadata;

/// One transfer. `amount` is always positive.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Posting {
    pub source: String,
    pub destination: String,
    pub asset: String,
    pub amount: BigInt,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExecutionResult {
    /// In execution order.
    pub postings: Vec<Posting>,
    pub tx_metadata: BTreeMap<String, String>,
    /// Only the keys the script wrote.
    pub account_metadata: AccountsMetadata,
}
