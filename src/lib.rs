//! One-shot connectivity probe for `PostgreSQL`
//!
//! ```rust,ignore
//! use pgprobe::{params::ConnectionParameters, probe};
//!
//! let params = ConnectionParameters::new("testdb", "tester", password, "localhost", 5432);
//! let result = probe::probe(params).await;
//! println!("{result}");
//! ```

pub mod cli;
pub mod params;
pub mod probe;
pub mod telemetry;
pub mod tls;
