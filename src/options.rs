//! Per-request options and request-argument assembly.
//!
//! The host assembles the outgoing completion arguments from the option set;
//! this module's only provider-specific move is translating the `cache`
//! switch into the router's extension field.

use serde::Serialize;
use serde_json::{Map, Value, json};

/// Options accepted by every registered model: the host's chat option set
/// plus the provider-specific `cache` switch.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ChatOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    /// Ask the router to cache this prompt automatically.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache: Option<bool>,
}

/// Outgoing request arguments for one prompt: the host-side assembly, then
/// the cache translation.
pub fn build_kwargs(model_name: &str, stream: bool, options: &ChatOptions) -> Map<String, Value> {
    let mut kwargs = base_kwargs(model_name, stream, options);
    apply_cache_option(&mut kwargs);
    kwargs
}

/// The host's own assembly step: model, stream flag, and every set option,
/// verbatim — including `cache`, which the router does not accept directly.
fn base_kwargs(model_name: &str, stream: bool, options: &ChatOptions) -> Map<String, Value> {
    let mut kwargs = Map::new();
    kwargs.insert("model".to_string(), Value::String(model_name.to_string()));
    kwargs.insert("stream".to_string(), Value::Bool(stream));
    if let Ok(Value::Object(fields)) = serde_json::to_value(options) {
        kwargs.extend(fields);
    }
    kwargs
}

/// Move the `cache` switch out of the forwarded arguments. When it was true,
/// signal automatic caching through the provider extension area; otherwise
/// leave no trace.
fn apply_cache_option(kwargs: &mut Map<String, Value>) {
    let cache = kwargs.remove("cache");
    if matches!(cache, Some(Value::Bool(true))) {
        kwargs.insert(
            "extra_body".to_string(),
            json!({ "requesty": { "auto_cache": true } }),
        );
    }
}
