use crate::domain::model::TransformResult;
use crate::utils::error::Result;

/// Byte-level access to the site tree. Reads and writes are whole-file;
/// there is no streaming surface.
pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn data_path(&self) -> &str;
    fn html_path(&self) -> &str;
    fn site_base_url(&self) -> &str;
}

/// One run of a schema pipeline: read the data file, build the JSON-LD
/// block, splice it into the target page. Strictly sequential; `load` must
/// not run unless `transform` succeeded.
pub trait Pipeline {
    type Raw;

    fn extract(&self) -> Result<Self::Raw>;
    fn transform(&self, data: Self::Raw) -> Result<TransformResult>;
    fn load(&self, result: &TransformResult) -> Result<String>;
}
