use serde::{Deserialize, Serialize};

/// Root of `data/distributors.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributorsFile {
    #[serde(default)]
    pub states: Vec<StateRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateRecord {
    #[serde(default = "unknown_state")]
    pub name: String,
    #[serde(default)]
    pub distributors: Vec<DistributorRecord>,
}

fn unknown_state() -> String {
    "Unknown".to_string()
}

/// One distributor entry. Every field is optional; absent fields are carried
/// through as `null` in the emitted node.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DistributorRecord {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
}

/// One entry of `data/products.json`. Only `title` is required; records
/// without one are skipped during transform, not rejected at parse time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductRecord {
    pub title: Option<String>,
    pub image: Option<String>,
    pub alt: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
}

/// What a pipeline's transform step hands to the load and report steps.
#[derive(Debug, Clone)]
pub struct TransformResult {
    /// Fully assembled marked block, ready to splice into the page.
    pub block: String,
    pub node_count: usize,
    /// Per-state node counts; empty for pipelines without grouping.
    pub group_counts: Vec<GroupCount>,
    /// Records dropped by validation.
    pub skipped: usize,
    /// Pretty-printed first node for the console preview.
    pub preview: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GroupCount {
    pub name: String,
    pub count: usize,
}
