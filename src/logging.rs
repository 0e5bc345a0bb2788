//! Structured logging setup

use tracing::debug;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Install the global subscriber writing to stderr.
///
/// `RUST_LOG` overrides `level` when set.
pub fn init(level: &str, quiet: bool) {
    tracing_subscriber::registry()
        .with(stderr_layer(quiet))
        .with(log_filter(level))
        .init();

    debug!("Logging initialized at level: {}", level);
}

fn log_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("casp_dashboard={}", level)))
}

/// Quiet runs use the compact format without uptime stamps.
fn stderr_layer(quiet: bool) -> BoxedLayer {
    let layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr);

    if quiet {
        layer.compact().boxed()
    } else {
        layer.with_timer(fmt::time::uptime()).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stderr_layer_builds_both_formats() {
        let quiet = tracing_subscriber::registry().with(stderr_layer(true));
        let verbose = tracing_subscriber::registry().with(stderr_layer(false));

        tracing::subscriber::with_default(quiet, || tracing::error!("quiet layer"));
        tracing::subscriber::with_default(verbose, || tracing::info!("verbose layer"));
    }
}
