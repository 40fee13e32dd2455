//! Build-time utilities that keep the JSON-LD blocks of the RudraXcell
//! site pages in sync with the JSON data files.
//!
//! Two binaries share one pipeline shape (extract, transform, load): the
//! distributor run maintains an id-tagged `<script>` block in
//! `distributors.html`, the product run a comment-pair delimited block in
//! `products.html`. Everything is synchronous and whole-file; concurrent
//! runs against the same page are not supported.

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{local::LocalStorage, PipelineConfig};
pub use core::distributors::DistributorsPipeline;
pub use core::engine::SchemaEngine;
pub use core::products::ProductsPipeline;
pub use utils::error::{Result, SchemaError};
