use crate::core::injector::{replace_or_insert_block, BlockMarker};
use crate::domain::model::{DistributorsFile, GroupCount, TransformResult};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::domain::schema::{GraphEnvelope, LocalBusiness};
use crate::utils::error::{Result, SchemaError};
use crate::utils::format::pretty_json;

/// Id of the managed script element in the distributors page.
const BLOCK_ID: &str = "distributors-jsonld";

const INDENT: &str = "    ";

/// Emits one `LocalBusiness` node per distributor, grouped per state, and
/// maintains the id-tagged block in `distributors.html`.
pub struct DistributorsPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    marker: BlockMarker,
}

impl<S: Storage, C: ConfigProvider> DistributorsPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            marker: BlockMarker::script_id(BLOCK_ID),
        }
    }

    fn read_text(&self, path: &str) -> Result<String> {
        let bytes = self
            .storage
            .read_file(path)
            .map_err(|e| SchemaError::DataLoadError {
                path: path.to_string(),
                reason: e.to_string(),
            })?;
        String::from_utf8(bytes).map_err(|e| SchemaError::DataLoadError {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for DistributorsPipeline<S, C> {
    type Raw = DistributorsFile;

    fn extract(&self) -> Result<DistributorsFile> {
        let path = self.config.data_path();
        tracing::debug!("reading distributor data from {}", path);

        let text = self.read_text(path)?;
        serde_json::from_str(&text).map_err(|e| SchemaError::DataLoadError {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }

    fn transform(&self, data: DistributorsFile) -> Result<TransformResult> {
        let mut graph = Vec::new();
        let mut group_counts = Vec::new();

        for state in &data.states {
            group_counts.push(GroupCount {
                name: state.name.clone(),
                count: state.distributors.len(),
            });

            for distributor in &state.distributors {
                graph.push(LocalBusiness::new(distributor, &state.name));
            }
        }

        tracing::debug!(
            "built {} LocalBusiness nodes across {} states",
            graph.len(),
            group_counts.len()
        );

        let preview = graph
            .first()
            .map(|node| pretty_json(node, INDENT))
            .transpose()?;

        let envelope = GraphEnvelope::new(graph);
        let jsonld = pretty_json(&envelope, INDENT)?;

        Ok(TransformResult {
            block: self.marker.wrap(&jsonld),
            node_count: envelope.graph.len(),
            group_counts,
            skipped: 0,
            preview,
        })
    }

    fn load(&self, result: &TransformResult) -> Result<String> {
        let path = self.config.html_path();
        let html = self.read_text(path)?;

        let (updated, outcome) = replace_or_insert_block(&html, &self.marker, &result.block)?;
        tracing::debug!("injection outcome: {:?}", outcome);

        self.storage.write_file(path, updated.as_bytes())?;
        Ok(path.to_string())
    }
}
