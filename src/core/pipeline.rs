use crate::core::format::format_vector;
use crate::core::generator::{expected_count, generate};
use crate::core::{ConfigProvider, GenerationReport, Pipeline, Storage, Vector};
use crate::utils::error::Result;
use std::io::Write;

pub struct VectorPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> VectorPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for VectorPipeline<S, C> {
    fn output_file(&self) -> &str {
        self.config.output_file()
    }

    fn generate(&self) -> Box<dyn Iterator<Item = Vector> + '_> {
        let range = self.config.value_range();
        let arity = self.config.arity();
        match expected_count(range, arity) {
            Some(count) => tracing::debug!("Generating {} {}-tuples over {}", count, arity, range),
            None => tracing::warn!("{}-tuples over {} overflow a u64 count", arity, range),
        }
        Box::new(generate(range, arity))
    }

    fn format(&self, vector: &Vector) -> String {
        format_vector(vector)
    }

    fn write_all<I>(&self, lines: I, destination: &str) -> Result<GenerationReport>
    where
        I: IntoIterator<Item = String>,
    {
        let output_path = self.storage.locate(destination);
        tracing::debug!("Opening {} for writing", output_path);

        // The writer is dropped on every return path, releasing the handle.
        let mut writer = self.storage.create(destination)?;
        let mut vectors_written = 0u64;
        for line in lines {
            writer.write_all(line.as_bytes())?;
            vectors_written += 1;
        }
        writer.flush()?;

        tracing::debug!("Wrote {} lines to {}", vectors_written, output_path);
        Ok(GenerationReport {
            output_path,
            vectors_written,
        })
    }
}
