use crate::core::{GenerationReport, Pipeline};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct GeneratorEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> GeneratorEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// Runs generate → format → write once. Generation is lazy, so vectors are
    /// formatted and written one at a time.
    pub fn run(&self) -> Result<GenerationReport> {
        tracing::info!("Starting vector generation");
        self.monitor.log_stats("Start");

        let destination = self.pipeline.output_file();
        let lines = self
            .pipeline
            .generate()
            .map(|vector| self.pipeline.format(&vector));

        tracing::info!("Writing vectors to {}", destination);
        let report = self.pipeline.write_all(lines, destination)?;
        tracing::info!(
            "Wrote {} vectors to {}",
            report.vectors_written,
            report.output_path
        );

        self.monitor.log_stats("Write");
        self.monitor.log_final_stats();

        Ok(report)
    }
}
