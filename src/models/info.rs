//! Shared model record type and capability detection.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Catalog response envelope: `{"data": [...]}`.
#[derive(Debug, Deserialize)]
pub struct ModelList {
    #[serde(default)]
    pub data: Vec<ModelRecord>,
}

/// One catalog entry as returned by the router, plus the derived
/// `supports_schema` flag. Fields the router adds later pass through `extra`
/// untouched, so `models --json` shows the full upstream record.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ModelRecord {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_window: Option<u64>,
    /// Declared vision flag. Kept as raw JSON: anything but `true` counts as
    /// undeclared rather than failing the whole catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_vision: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_price: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_price: Option<Value>,
    /// Derived: id present in the structured-outputs subset.
    #[serde(default)]
    pub supports_schema: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ModelRecord {
    /// Display name: the upstream description when present, the id otherwise.
    pub fn display_name(&self) -> &str {
        self.description.as_deref().unwrap_or(&self.id)
    }
}

const VISION_KEYWORDS: [&str; 4] = ["vision", "visual", "multimodal", "vlm"];

/// Whether a model accepts image input.
///
/// The declared flag wins when it is literally `true`; otherwise the id is
/// scanned for vision-ish keywords. A missing or malformed flag is a negative
/// signal, never an error.
pub fn supports_images(record: &ModelRecord) -> bool {
    if record
        .supports_vision
        .as_ref()
        .and_then(Value::as_bool)
        .unwrap_or(false)
    {
        return true;
    }
    let id = record.id.to_lowercase();
    VISION_KEYWORDS.iter().any(|keyword| id.contains(keyword))
}
