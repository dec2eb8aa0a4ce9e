//! JSON shapes read and written by the commands.
//!
//! Amounts travel as JSON integers of any size. `serde_json` is built with
//! `arbitrary_precision`, so a [`Number`] keeps the exact digits and the
//! conversion to and from `BigInt` goes through its decimal text.

use std::collections::BTreeMap;
use std::str::FromStr;

use num_bigint::BigInt;
use numscript_analysis::CheckResult;
use numscript_eval::{Balances, ExecutionResult, StaticStore, Variables};
use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::CliError;

/// Input of `run`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RunRequest {
    pub script: String,
    #[serde(default)]
    pub variables: Variables,
    #[serde(default)]
    pub metadata: BTreeMap<String, BTreeMap<String, String>>,
    #[serde(default)]
    pub balances: BTreeMap<String, BTreeMap<String, Number>>,
}

impl RunRequest {
    /// The balance and metadata snapshot, with every amount made exact.
    pub fn store(&self) -> Result<StaticStore, CliError> {
        let mut balances = Balances::new();
        for (account, assets) in &self.balances {
            let entry = balances.entry(account.clone()).or_default();
            for (asset, amount) in assets {
                let text = amount.to_string();
                let value = BigInt::from_str(&text).map_err(|_| CliError::InvalidBalance {
                    account: account.clone(),
                    asset: asset.clone(),
                    amount: text,
                })?;
                entry.insert(asset.clone(), value);
            }
        }
        Ok(StaticStore::new(balances, self.metadata.clone()))
    }
}

/// Output of a successful `run`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunResponse {
    pub postings: Vec<PostingJson>,
    pub tx_metadata: BTreeMap<String, String>,
    pub account_metadata: BTreeMap<String, BTreeMap<String, String>>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PostingJson {
    pub source: String,
    pub destination: String,
    pub asset: String,
    pub amount: Number,
}

impl RunResponse {
    pub fn from_result(result: ExecutionResult) -> Result<Self, CliError> {
        let postings = result
            .postings
            .into_iter()
            .map(|posting| {
                Ok(PostingJson {
                    amount: to_json_number(&posting.amount)?,
                    source: posting.source,
                    destination: posting.destination,
                    asset: posting.asset,
                })
            })
            .collect::<Result<Vec<_>, CliError>>()?;
        Ok(RunResponse {
            postings,
            tx_metadata: result.tx_metadata,
            account_metadata: result.account_metadata,
        })
    }
}

fn to_json_number(amount: &BigInt) -> Result<Number, CliError> {
    Number::from_str(&amount.to_string()).map_err(CliError::Output)
}

/// Output of `check`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CheckResponse {
    /// False exactly when some diagnostic is an error.
    pub valid: bool,
    pub errors: Vec<CheckEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CheckEntry {
    pub line: u32,
    pub character: u32,
    pub level: &'static str,
    pub error: String,
}

impl From<&CheckResult> for CheckResponse {
    fn from(result: &CheckResult) -> Self {
        CheckResponse {
            valid: !result.has_errors(),
            errors: result
                .diagnostics
                .iter()
                .map(|diagnostic| CheckEntry {
                    line: diagnostic.range.start.line,
                    character: diagnostic.range.start.character,
                    level: diagnostic.severity().as_str(),
                    error: diagnostic.message(),
                })
                .collect(),
        }
    }
}
