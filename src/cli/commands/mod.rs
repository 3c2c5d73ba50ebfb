use clap::{
    Arg, ArgAction, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

/// Connection flags that `--dsn` replaces
pub const CONNECTION_ARGS: [&str; 5] = ["host", "port", "user", "password", "database"];

/// Pure clap command definitions with zero business logic
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new(env!("CARGO_PKG_NAME"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("dsn")
                .env("PGPROBE_DSN")
                .hide_env_values(true)
                .help("postgres://<username>:<password>@tcp(<host>:<port>)/<database>")
                .long("dsn")
                .short('d')
                .conflicts_with_all(CONNECTION_ARGS),
        )
        .arg(
            Arg::new("host")
                .default_value("localhost")
                .env("PGPROBE_HOST")
                .help("database server host name or IP address")
                .long("host")
                .short('H'),
        )
        .arg(
            Arg::new("port")
                .default_value("5432")
                .env("PGPROBE_PORT")
                .help("database server port")
                .long("port")
                .short('p')
                .value_parser(clap::value_parser!(u16).range(1..)),
        )
        .arg(
            Arg::new("user")
                .default_value("postgres")
                .env("PGPROBE_USER")
                .help("database user name")
                .long("user")
                .short('U'),
        )
        .arg(
            Arg::new("password")
                .env("PGPROBE_PASSWORD")
                .hide_env_values(true)
                .help("database password (prefer the environment variable)")
                .long("password")
                .short('W'),
        )
        .arg(
            Arg::new("database")
                .default_value("postgres")
                .env("PGPROBE_DATABASE")
                .help("database name")
                .long("database")
                .short('D'),
        )
        .arg(
            Arg::new("tls-mode")
                .env("PGPROBE_TLS_MODE")
                .help("TLS/SSL mode: disable, prefer, require, verify-ca, verify-full")
                .long("tls-mode")
                .long_help(
                    "TLS/SSL connection mode, same meaning as libpq's sslmode:\n\n\
                    - disable: No TLS\n\
                    - prefer: Try TLS, fall back to plain text (default)\n\
                    - require: TLS required, no certificate verification\n\
                    - verify-ca: Verify server certificate against CA\n\
                    - verify-full: Verify certificate and hostname\n\n\
                    Overrides an sslmode given in the DSN."
                )
                .value_name("MODE")
                .value_parser(["disable", "prefer", "require", "verify-ca", "verify-full"]),
        )
        .arg(
            Arg::new("tls-ca")
                .env("PGPROBE_TLS_CA")
                .help("Path to CA certificate file for TLS verification")
                .long("tls-ca")
                .long_help(
                    "Path to Certificate Authority (CA) certificate file.\n\
                    Used by the verify-ca and verify-full modes.\n\n\
                    Example: /etc/ssl/certs/ca-certificates.crt"
                )
                .value_name("PATH"),
        )
        .arg(
            Arg::new("tls-cert")
                .env("PGPROBE_TLS_CERT")
                .help("Path to client certificate file for TLS client authentication")
                .long("tls-cert")
                .value_name("PATH")
                .requires("tls-key"),
        )
        .arg(
            Arg::new("tls-key")
                .env("PGPROBE_TLS_KEY")
                .help("Path to client private key file for TLS client authentication")
                .long("tls-key")
                .value_name("PATH")
                .requires("tls-cert"),
        )
        .arg(
            Arg::new("format")
                .default_value("text")
                .env("PGPROBE_FORMAT")
                .help("output format of the probe report")
                .long("format")
                .short('f')
                .value_parser(["text", "json"]),
        )
        .arg(
            Arg::new("verbose")
                .help("increase log verbosity (-v info, -vv debug, -vvv trace)")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count),
        )
}
