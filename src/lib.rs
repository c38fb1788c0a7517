pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::local_storage::LocalStorage;
pub use core::{engine::GeneratorEngine, pipeline::VectorPipeline};
pub use utils::error::{GenError, Result};
