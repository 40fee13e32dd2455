use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Pattern error: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Failed to load {path}: {reason}")]
    DataLoadError { path: String, reason: String },

    #[error("Invalid record: {message}")]
    ValidationError { message: String },

    #[error("No valid records left in {path}")]
    NoValidRecordsError { path: String },

    #[error("No existing JSON-LD block and no {anchor} anchor in target HTML")]
    AnchorNotFoundError { anchor: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl SchemaError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            SchemaError::DataLoadError { path, reason } => {
                format!("Could not read {}: {}", path, reason)
            }
            SchemaError::NoValidRecordsError { path } => {
                format!("{} contains no records with a usable title", path)
            }
            SchemaError::AnchorNotFoundError { anchor } => format!(
                "The target page has no managed JSON-LD block and no {} tag to insert one before",
                anchor
            ),
            SchemaError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field {} is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SchemaError::DataLoadError { .. } => {
                "Check that the data file exists and contains valid JSON"
            }
            SchemaError::NoValidRecordsError { .. } => {
                "Add a 'title' to at least one record in the data file"
            }
            SchemaError::AnchorNotFoundError { .. } => {
                "Make sure the target page has a </head> tag"
            }
            SchemaError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and run again"
            }
            _ => "Re-run with RUST_LOG=site_jsonld=debug for more detail",
        }
    }
}

pub type Result<T> = std::result::Result<T, SchemaError>;
