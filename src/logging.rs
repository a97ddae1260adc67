/// Tracing setup for a short-lived, single-run process.
///
/// One compact stdout layer, filtered via `RUST_LOG` (default: "info").
/// There is no file output: the program's durable artifacts are the two
/// export files, not its logs.
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize the tracing subscriber.
///
/// # Environment Variables
/// * `RUST_LOG` - Controls log level filtering (default: "info")
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .expect("Failed to create EnvFilter");

    let stdout_layer = fmt::layer()
        .with_target(false) // Don't clutter terminal with module paths
        .with_thread_ids(false)
        .with_line_number(false)
        .compact()
        .with_filter(env_filter);

    tracing_subscriber::registry().with(stdout_layer).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_default() {
        // The fallback filter string must stay parseable
        let filter = EnvFilter::try_new("info");
        assert!(filter.is_ok());
    }
}
