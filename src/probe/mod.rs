pub mod postgres;

pub use postgres::probe;

use serde::Serialize;
use std::{error::Error as StdError, fmt};
use thiserror::Error;

/// Fixed readiness query, side-effect free
pub const READINESS_QUERY: &str = "SELECT version()";

/// Which step of the probe failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The session could not be established (network, auth, DNS, TLS)
    Connection,
    /// The session was up but the readiness query failed
    Query,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Connection => "connection",
            Self::Query => "query",
        })
    }
}

/// Driver failure tagged with the probe step it happened in
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("connection failed: {0}")]
    Connection(#[source] sqlx::Error),
    #[error("readiness query failed: {0}")]
    Query(#[source] sqlx::Error),
}

impl ProbeError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Connection(_) => ErrorKind::Connection,
            Self::Query(_) => ErrorKind::Query,
        }
    }

    /// Driver diagnostic including nested causes the top level doesn't repeat
    #[must_use]
    pub fn message(&self) -> String {
        let (Self::Connection(err) | Self::Query(err)) = self;
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            let cause_str = cause.to_string();
            if !message.contains(&cause_str) {
                message.push_str(": ");
                message.push_str(&cause_str);
            }
            source = cause.source();
        }
        message
    }
}

/// Outcome of one probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeResult {
    Success { version: String },
    Failure { kind: ErrorKind, message: String },
}

impl ProbeResult {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    #[must_use]
    pub fn version(&self) -> Option<&str> {
        match self {
            Self::Success { version } => Some(version),
            Self::Failure { .. } => None,
        }
    }

    #[must_use]
    pub const fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { kind, .. } => Some(*kind),
        }
    }
}

impl From<ProbeError> for ProbeResult {
    fn from(err: ProbeError) -> Self {
        Self::Failure {
            kind: err.kind(),
            message: err.message(),
        }
    }
}

impl fmt::Display for ProbeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success { version } => {
                writeln!(f, "Connection successful")?;
                write!(f, "PostgreSQL version: {version}")
            }
            Self::Failure { kind, message } => {
                match kind {
                    ErrorKind::Connection => writeln!(f, "Failed to connect to the database")?,
                    ErrorKind::Query => writeln!(f, "Readiness query failed")?,
                }
                write!(f, "Error: {message}")
            }
        }
    }
}
