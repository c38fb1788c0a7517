pub mod local_storage;

#[cfg(feature = "cli")]
pub use cli_config::CliConfig;

#[cfg(feature = "cli")]
mod cli_config {
    use crate::core::{ConfigProvider, ValueRange, DEFAULT_ARITY, DEFAULT_OUTPUT_FILE};
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_path, Validate};
    use clap::Parser;
    use std::num::NonZeroUsize;

    /// Range, arity and output file are fixed; the flags only affect diagnostics.
    #[derive(Debug, Clone, Default, Parser)]
    #[command(name = "vector-gen")]
    #[command(about = "Writes every 4-tuple over -9..=9 to vectors.txt")]
    pub struct CliConfig {
        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Log process CPU and memory usage")]
        pub monitor: bool,

        #[arg(long, help = "Emit logs as JSON")]
        pub json_logs: bool,
    }

    impl ConfigProvider for CliConfig {
        fn value_range(&self) -> ValueRange {
            ValueRange::default_range()
        }

        fn arity(&self) -> NonZeroUsize {
            DEFAULT_ARITY
        }

        fn output_file(&self) -> &str {
            DEFAULT_OUTPUT_FILE
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_path("output_file", self.output_file())
        }
    }

}
