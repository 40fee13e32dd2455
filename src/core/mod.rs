pub mod distributors;
pub mod engine;
pub mod injector;
pub mod products;
pub mod report;

pub use crate::domain::model::{GroupCount, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
