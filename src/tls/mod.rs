//! TLS configuration for the probe session
//!
//! Hosted `PostgreSQL` endpoints usually refuse plain-text sessions, so the
//! probe carries libpq-style `sslmode` settings through to the driver.
//! Negotiation failures surface as connection failures.

pub mod config;

pub use config::{TlsConfig, TlsMode};
