use crate::domain::model::{GenerationReport, ValueRange, Vector};
use crate::utils::error::Result;
use std::io::Write;
use std::num::NonZeroUsize;

/// Destination for generated output. `create` truncates whatever was there before.
pub trait Storage {
    type Writer: Write;

    fn create(&self, path: &str) -> Result<Self::Writer>;

    /// Human-readable location of `path`, used in reports.
    fn locate(&self, path: &str) -> String;
}

pub trait ConfigProvider {
    fn value_range(&self) -> ValueRange;
    fn arity(&self) -> NonZeroUsize;
    fn output_file(&self) -> &str;
}

pub trait Pipeline {
    fn output_file(&self) -> &str;
    fn generate(&self) -> Box<dyn Iterator<Item = Vector> + '_>;
    fn format(&self, vector: &Vector) -> String;
    fn write_all<I>(&self, lines: I, destination: &str) -> Result<GenerationReport>
    where
        I: IntoIterator<Item = String>;
}
