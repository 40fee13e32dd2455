use crate::core::report;
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

/// Drives one pipeline run end to end: extract, transform, load, report.
/// Reporting runs only after the write has succeeded, so a reporting
/// problem can never cost the page.
///
/// Runs are expected to be invoked standalone as a build step; concurrent
/// invocations against the same page would race on its read-modify-write.
pub struct SchemaEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> SchemaEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<String> {
        tracing::info!("Reading source data");
        let raw = self.pipeline.extract()?;

        tracing::info!("Building JSON-LD nodes");
        let result = self.pipeline.transform(raw)?;
        tracing::info!("Built {} nodes", result.node_count);

        tracing::info!("Updating target page");
        let output_path = self.pipeline.load(&result)?;

        report::print_summary(&result, &output_path);

        Ok(output_path)
    }
}
