use numscript_eval::EvalError;

/// Everything that makes a command exit with a failure status.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid request: {0}")]
    InvalidRequest(#[source] serde_json::Error),
    #[error("invalid balance for `@{account}` in {asset}: `{amount}` is not an integer")]
    InvalidBalance {
        account: String,
        asset: String,
        amount: String,
    },
    /// Rendered parse error blocks.
    #[error("{0}")]
    Parse(String),
    #[error("runtime error: {0}")]
    Eval(#[from] EvalError),
    #[error("failed to encode output: {0}")]
    Output(#[source] serde_json::Error),
}
