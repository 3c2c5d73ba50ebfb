use crate::{
    cli::actions::{Action, OutputFormat},
    params::{ConnectionParameters, DEFAULT_PORT},
    tls::{TlsConfig, TlsMode},
};
use anyhow::{Context, Result, anyhow, bail};
use clap::ArgMatches;
use dsn::DSN;
use std::path::PathBuf;

fn parse_tls_mode(mode: &str) -> Result<TlsMode> {
    mode.parse::<TlsMode>().map_err(|e| anyhow!(e))
}

/// Extract TLS configuration from DSN query parameters
///
/// Uses libpq parameter names:
/// - sslmode: disable|prefer|require|verify-ca|verify-full
/// - sslrootcert: Path to CA certificate
/// - sslcert: Path to client certificate
/// - sslkey: Path to client private key
fn extract_tls_config(dsn: &DSN) -> Result<TlsConfig> {
    let mode = dsn
        .params
        .get("sslmode")
        .map(|m| parse_tls_mode(m))
        .transpose()
        .context("Invalid sslmode in DSN")?
        .unwrap_or_default();

    Ok(TlsConfig {
        mode,
        ca: dsn.params.get("sslrootcert").map(PathBuf::from),
        cert: dsn.params.get("sslcert").map(PathBuf::from),
        key: dsn.params.get("sslkey").map(PathBuf::from),
    })
}

/// Build connection parameters from a parsed DSN
///
/// # Errors
///
/// Returns an error for non-postgres drivers, unix socket DSNs or an
/// invalid `sslmode`
pub fn params_from_dsn(dsn: &DSN) -> Result<ConnectionParameters> {
    if !matches!(dsn.driver.as_str(), "postgres" | "postgresql") {
        bail!("Unsupported driver: {}, expected postgres", dsn.driver);
    }

    let host = dsn
        .host
        .clone()
        .context("DSN must name a TCP host, unix sockets are not supported")?;

    let params = ConnectionParameters::new(
        dsn.database.clone().unwrap_or_else(|| "postgres".to_string()),
        dsn.username.clone().unwrap_or_else(|| "postgres".to_string()),
        dsn.password.clone().unwrap_or_default(),
        host,
        dsn.port.unwrap_or(DEFAULT_PORT),
    );

    Ok(params.with_tls(extract_tls_config(dsn)?))
}

fn params_from_args(matches: &ArgMatches) -> Result<ConnectionParameters> {
    let arg = |name: &str| matches.get_one::<String>(name).cloned();

    Ok(ConnectionParameters::new(
        arg("database").context("database is required")?,
        arg("user").context("user is required")?,
        arg("password").unwrap_or_default(),
        arg("host").context("host is required")?,
        matches
            .get_one::<u16>("port")
            .copied()
            .unwrap_or(DEFAULT_PORT),
    ))
}

/// Explicit `--tls-*` flags win over DSN query parameters
fn apply_tls_flags(mut tls: TlsConfig, matches: &ArgMatches) -> Result<TlsConfig> {
    if let Some(mode) = matches.get_one::<String>("tls-mode") {
        tls.mode = parse_tls_mode(mode)?;
    }

    if let Some(ca) = matches.get_one::<String>("tls-ca") {
        tls.ca = Some(PathBuf::from(ca));
    }

    if let (Some(cert), Some(key)) = (
        matches.get_one::<String>("tls-cert"),
        matches.get_one::<String>("tls-key"),
    ) {
        tls.cert = Some(PathBuf::from(cert));
        tls.key = Some(PathBuf::from(key));
    }

    if tls.cert.is_some() != tls.key.is_some() {
        bail!("Client certificate and key must be given together");
    }

    Ok(tls)
}

/// Convert `ArgMatches` into typed Action enum with validation
///
/// # Errors
///
/// Returns an error if the DSN is invalid or the TLS settings are
/// inconsistent
pub fn dispatch(matches: &ArgMatches) -> Result<Action> {
    let params = match matches.get_one::<String>("dsn") {
        Some(dsn_str) => {
            let dsn = dsn::parse(dsn_str).context("Failed to parse DSN")?;
            params_from_dsn(&dsn)?
        }
        None => params_from_args(matches)?,
    };

    let tls = apply_tls_flags(params.tls.clone(), matches)?;

    let format = matches
        .get_one::<String>("format")
        .map(|f| f.parse::<OutputFormat>().map_err(|e| anyhow!(e)))
        .transpose()?
        .unwrap_or_default();

    Ok(Action::Probe {
        params: params.with_tls(tls),
        format,
    })
}
