use super::{commands, dispatch};
use crate::telemetry;
use anyhow::Result;
use std::process::ExitCode;

/// Main orchestrator - Pure orchestration with no business logic
///
/// Five-step data flow:
/// 1. Parse: Extract CLI arguments
/// 2. Extract Verbosity: Count `-v` flags
/// 3. Initialize Telemetry: Install the stderr tracing subscriber
/// 4. Dispatch: Convert `ArgMatches` into typed Action enum
/// 5. Execute: Probe once and report
///
/// # Errors
///
/// Returns an error if dispatch fails or the report cannot be written.
/// A failed probe is not an error: it maps to a failure exit code.
pub async fn start() -> Result<ExitCode> {
    // 1. Parse: Extract CLI arguments
    let matches = commands::new().get_matches();

    // 2. Extract Verbosity
    let verbosity = matches.get_count("verbose");

    // 3. Initialize Telemetry
    telemetry::init(verbosity);

    // 4. Dispatch: Convert ArgMatches into typed Action enum
    let action = dispatch::dispatch(&matches)?;

    // 5. Execute: Run the action's business logic
    action.execute().await
}
