use super::{Action, OutputFormat};
use crate::probe::{self, ErrorKind, ProbeResult};
use anyhow::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::{process::ExitCode, time::Instant};

#[derive(Serialize, Debug)]
#[serde(rename_all = "snake_case")]
enum Status {
    Success,
    Failure,
}

#[derive(Serialize, Debug)]
struct Report<'a> {
    status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<ErrorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    runtime_ms: i64,
    time: String,
}

impl<'a> Report<'a> {
    fn new(result: &'a ProbeResult, runtime_ms: i64, time: DateTime<Utc>) -> Self {
        let time = time.to_rfc3339_opts(SecondsFormat::Secs, true);
        match result {
            ProbeResult::Success { version } => Self {
                status: Status::Success,
                version: Some(version.as_str()),
                kind: None,
                message: None,
                runtime_ms,
                time,
            },
            ProbeResult::Failure { kind, message } => Self {
                status: Status::Failure,
                version: None,
                kind: Some(*kind),
                message: Some(message.as_str()),
                runtime_ms,
                time,
            },
        }
    }
}

/// Execute the action's business logic by delegating to the probe
pub async fn execute(action: Action) -> Result<ExitCode> {
    match action {
        Action::Probe { params, format } => {
            let started = Utc::now();
            let timer = Instant::now();
            let result = probe::probe(params).await;
            let runtime_ms = i64::try_from(timer.elapsed().as_millis()).unwrap_or(i64::MAX);

            match format {
                OutputFormat::Text => {
                    if result.is_success() {
                        println!("{result}");
                    } else {
                        eprintln!("{result}");
                    }
                }
                OutputFormat::Json => {
                    let report = Report::new(&result, runtime_ms, started);
                    println!("{}", serde_json::to_string(&report)?);
                }
            }

            Ok(if result.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}
