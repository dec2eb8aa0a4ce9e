//! The `run` command: execute a script against a JSON request.

use numscript_eval::{CancellationToken, FeatureFlags, Interpreter};
use numscript_parse::{parse, parse_errors_to_string};
use tracing::debug;

use crate::wire::{RunRequest, RunResponse};
use crate::CliError;

/// Knobs from the command line.
#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    pub feature_flags: Vec<String>,
    pub step_limit: Option<u64>,
    pub cancel: CancellationToken,
}

/// Decode `input`, run its script and encode the result as JSON.
pub fn run(input: &str, options: &RunOptions) -> Result<String, CliError> {
    let request: RunRequest = serde_json::from_str(input).map_err(CliError::InvalidRequest)?;
    let store = request.store()?;

    let parsed = parse(&request.script);
    if parsed.has_errors() {
        debug!(errors = parsed.errors.len(), "script does not parse");
        return Err(CliError::Parse(parse_errors_to_string(
            &parsed.errors,
            &request.script,
        )));
    }

    let mut interpreter = Interpreter::new()
        .with_flags(FeatureFlags::from_names(&options.feature_flags))
        .with_cancellation(options.cancel.clone());
    if let Some(limit) = options.step_limit {
        interpreter = interpreter.with_step_limit(limit);
    }

    let result = interpreter.run(&parsed.program, &request.variables, &store)?;
    let response = RunResponse::from_result(result)?;
    serde_json::to_string(&response).map_err(CliError::Output)
}
