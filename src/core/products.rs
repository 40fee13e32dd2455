use crate::core::injector::{replace_or_insert_block, BlockMarker};
use crate::domain::model::{ProductRecord, TransformResult};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::domain::schema::{Brand, ItemListEnvelope, ListItem, Product, PropertyValue};
use crate::utils::error::{Result, SchemaError};
use crate::utils::format::pretty_json;

const BLOCK_START: &str = "<!-- PRODUCT-SCHEMA-START -->";
const BLOCK_END: &str = "<!-- PRODUCT-SCHEMA-END -->";

const BRAND_NAME: &str = "RudraXcell Lifecare Pvt. Ltd.";
const LIST_NAME: &str = "RudraXcell Lifecare Product Range";

const INDENT: &str = "  ";

/// Emits an `ItemList` of `Product` nodes and maintains the comment-pair
/// delimited block in `products.html`. Records without a usable title are
/// skipped with a warning; a run where nothing survives is a failure.
pub struct ProductsPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    marker: BlockMarker,
}

impl<S: Storage, C: ConfigProvider> ProductsPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            marker: BlockMarker::comment_pair(BLOCK_START, BLOCK_END),
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

    /// Build one list entry, positioned after the already-emitted items.
    /// A title that is absent, null, or empty fails record validation.
    fn list_item(&self, record: &ProductRecord, position: usize) -> Result<ListItem> {
        let title = match record.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => {
                return Err(SchemaError::ValidationError {
                    message: "missing 'title'".to_string(),
                })
            }
        };

        let base = self.config.site_base_url();
        let image = record
            .image
            .as_deref()
            .filter(|image| !image.is_empty())
            .map(|image| format!("{}{}", base, image));
        let link = record.link.as_deref().unwrap_or("#");

        Ok(ListItem::new(
            position,
            Product {
                node_type: "Product",
                name: title.to_string(),
                image,
                description: record.description.clone().unwrap_or_default(),
                url: format!("{}{}", base, link),
                brand: Brand::new(BRAND_NAME),
                additional_property: vec![PropertyValue::alt_text(
                    record.alt.as_deref().unwrap_or(""),
                )],
            },
        ))
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for ProductsPipeline<S, C> {
    type Raw = Vec<ProductRecord>;

    fn extract(&self) -> Result<Vec<ProductRecord>> {
        let path = self.config.data_path();
        tracing::debug!("reading product data from {}", path);

        let text = self.read_text(path)?;
        serde_json::from_str(&text).map_err(|e| SchemaError::DataLoadError {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }

    fn transform(&self, data: Vec<ProductRecord>) -> Result<TransformResult> {
        let mut items: Vec<ListItem> = Vec::new();
        let mut skipped = 0;

        for (index, record) in data.iter().enumerate() {
            match self.list_item(record, items.len() + 1) {
                Ok(item) => items.push(item),
                Err(SchemaError::ValidationError { message }) => {
                    tracing::warn!("⚠️  Product #{} is {}, skipping", index + 1, message);
                    skipped += 1;
                }
                Err(other) => return Err(other),
            }
        }

        if items.is_empty() {
            return Err(SchemaError::NoValidRecordsError {
                path: self.config.data_path().to_string(),
            });
        }

        let preview = pretty_json(&items[0], INDENT)?;

        let envelope = ItemListEnvelope::new(
            LIST_NAME.to_string(),
            format!(
                "{}/{}",
                self.config.site_base_url(),
                self.config.html_path()
            ),
            items,
        );
        let jsonld = pretty_json(&envelope, INDENT)?;

        Ok(TransformResult {
            block: self.marker.wrap(&jsonld),
            node_count: envelope.item_list_element.len(),
            group_counts: Vec::new(),
            skipped,
            preview: Some(preview),
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
