//! Tracing subscriber setup for the command-line binary.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Maps the `-v` count to a default filter directive.
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "memo=warn",
        1 => "memo=info",
        2 => "memo=debug",
        _ => "memo=trace",
    }
}

/// Installs a stderr subscriber.
///
/// `RUST_LOG` wins over the verbosity flag when set. Calling this twice is
/// harmless; the second call keeps the first subscriber.
pub fn init(verbose: u8) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive(verbose).into());

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
