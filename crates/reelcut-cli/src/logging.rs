//! Tracing subscriber setup.
//!
//! Human-readable colored output by default; JSON when `LOG_FORMAT=json`
//! or `--json-logs` is given. Logs go to stderr so stdout stays clean for
//! the highlights document.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Whether JSON logs were requested through the environment.
pub fn json_from_env() -> bool {
    std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

/// Install the global subscriber.
pub fn init(use_json: bool) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("reelcut=info,warn"));

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(true)
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(env_filter)
            .init();
    }
}
