use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "vector_gen=debug,info"
    } else {
        "vector_gen=info"
    }
}

/// `RUST_LOG` wins over the verbosity flag when it is set.
fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

/// Logs go to stderr so stdout only carries the completion message.
pub fn init_cli_logger(verbose: bool) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
}

/// Machine-readable variant for runs whose stderr is collected by a log shipper.
pub fn init_json_logger(verbose: bool) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_enables_crate_debug() {
        assert_eq!(default_directives(true), "vector_gen=debug,info");
        assert_eq!(default_directives(false), "vector_gen=info");
    }
}
