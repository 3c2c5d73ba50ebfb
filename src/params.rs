use crate::tls::TlsConfig;
use std::fmt;

pub const DEFAULT_PORT: u16 = 5432;

/// Everything needed to open one probe session
///
/// Built by the caller right before probing and moved into the probe, which
/// drops it on return. `Debug` never prints the password.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionParameters {
    pub database: String,
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub tls: TlsConfig,
}

impl ConnectionParameters {
    #[must_use]
    pub fn new(
        database: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
        host: impl Into<String>,
        port: u16,
    ) -> Self {
        Self {
            database: database.into(),
            user: user.into(),
            password: password.into(),
            host: host.into(),
            port,
            tls: TlsConfig::default(),
        }
    }

    #[must_use]
    pub fn with_tls(mut self, tls: TlsConfig) -> Self {
        self.tls = tls;
        self
    }

    /// `host:port`, for log lines and messages
    #[must_use]
    pub fn endpoint(&self) -> String {
        if self.host.contains(':') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

impl fmt::Debug for ConnectionParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let password = if self.password.is_empty() {
            ""
        } else {
            "********"
        };
        f.debug_struct("ConnectionParameters")
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &password)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("tls", &self.tls)
            .finish()
    }
}
