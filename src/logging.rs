//! Sets up `tracing` output for the command line tool.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;


/// Installs a global subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence over `directives` when set. `pretty` picks the
/// multi-line format over the compact one.
pub fn setup_logging(directives: &str, pretty: bool) {

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives));

    let registry = tracing_subscriber::registry().with(filter);

    match pretty {
        true => registry
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init(),
        false => registry
            .with(tracing_subscriber::fmt::layer().compact().with_target(false).with_writer(std::io::stderr))
            .init(),
    }
}
