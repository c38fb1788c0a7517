pub mod engine;
pub mod format;
pub mod generator;
pub mod pipeline;

pub use crate::domain::model::{
    GenerationReport, ValueRange, Vector, DEFAULT_ARITY, DEFAULT_OUTPUT_FILE,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
