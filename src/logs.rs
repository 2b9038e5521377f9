use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::time::UtcTime;

/// Install the global subscriber. Logs go to stderr; reports own stdout.
pub fn init_logs(json: bool) {
    // RUST_LOG overrides, e.g. RUST_LOG=driftwood=debug
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = fmt::Subscriber::builder()
        .with_writer(std::io::stderr)
        .with_timer(UtcTime::rfc_3339())
        .with_env_filter(env_filter);

    let result = if json {
        tracing::subscriber::set_global_default(builder.json().flatten_event(true).finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.expect("setting default subscriber failed");
}
