use sqlx::{ConnectOptions, Connection, PgConnection, postgres::PgConnectOptions};
use std::time::Instant;
use tracing::{debug, info, warn};

use super::{ProbeError, ProbeResult, READINESS_QUERY};
use crate::params::ConnectionParameters;

/// Reported as `application_name` so server-side views can tell probe
/// sessions apart
pub const APPLICATION_NAME: &str = env!("CARGO_PKG_NAME");

/// Probe a `PostgreSQL` endpoint once
///
/// Opens a session, runs [`READINESS_QUERY`], reads the single row and
/// closes the session. Driver errors never escape: they come back as
/// [`ProbeResult::Failure`] tagged with the step that failed.
pub async fn probe(params: ConnectionParameters) -> ProbeResult {
    let endpoint = params.endpoint();
    let started = Instant::now();

    let outcome = server_version(&params).await;
    drop(params);

    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    match outcome {
        Ok(version) => {
            info!(%endpoint, elapsed_ms, %version, "probe succeeded");
            ProbeResult::Success { version }
        }
        Err(err) => {
            warn!(%endpoint, elapsed_ms, kind = %err.kind(), error = %err, "probe failed");
            err.into()
        }
    }
}

async fn server_version(params: &ConnectionParameters) -> Result<String, ProbeError> {
    debug!(
        host = %params.host,
        port = params.port,
        database = %params.database,
        user = %params.user,
        tls_mode = %params.tls.mode,
        "connecting"
    );

    let mut conn = connect_options(params)
        .connect()
        .await
        .map_err(ProbeError::Connection)?;

    debug!("session established, running readiness query");
    let version = read_version(&mut conn).await;

    // close() consumes the session, so this is its only release point
    if let Err(err) = conn.close().await {
        debug!(error = %err, "session did not close gracefully");
    }

    version
}

async fn read_version(conn: &mut PgConnection) -> Result<String, ProbeError> {
    sqlx::query_scalar::<_, String>(READINESS_QUERY)
        .fetch_one(conn)
        .await
        .map_err(ProbeError::Query)
}

/// Translate probe parameters into driver options
///
/// The password always comes from `params`, even when empty: no `.pgpass`
/// lookup, no `PGPASSWORD`. TLS paths set in `params` override the libpq
/// `PGSSLROOTCERT`/`PGSSLCERT`/`PGSSLKEY` variables, which the driver still
/// reads as defaults.
pub(crate) fn connect_options(params: &ConnectionParameters) -> PgConnectOptions {
    let mut options = PgConnectOptions::new_without_pgpass()
        .host(&params.host)
        .port(params.port)
        .username(&params.user)
        .password(&params.password)
        .database(&params.database)
        .application_name(APPLICATION_NAME)
        .ssl_mode(params.tls.mode.ssl_mode());

    if let Some(ca_path) = &params.tls.ca {
        options = options.ssl_root_cert(ca_path);
    }

    // Apply client certificate only as a pair
    if let (Some(cert_path), Some(key_path)) = (&params.tls.cert, &params.tls.key) {
        options = options.ssl_client_cert(cert_path).ssl_client_key(key_path);
    }

    options
}
