//! Model catalog: cached fetching, schema annotation, and capability
//! detection.

pub mod cache;
pub mod fetch;
mod info;

pub use fetch::{CatalogError, requesty_models};
pub use info::{ModelList, ModelRecord, supports_images};
