//! Model registration: one sync/async chat pair per catalog entry, handed to
//! the host's registration callback.

use std::fmt;

use serde_json::{Map, Value};

use crate::keys;
use crate::models::fetch::{API_BASE, ROUTING_HEADERS};
use crate::models::{self, CatalogError, ModelRecord};
use crate::options::{ChatOptions, build_kwargs};

/// Attachment MIME types set on vision-capable models.
pub const IMAGE_ATTACHMENT_TYPES: [&str; 4] =
    ["image/png", "image/jpeg", "image/gif", "image/webp"];

/// Routing configuration shared by the sync/async variants of one registered
/// model.
#[derive(Clone, Debug)]
pub struct ModelConfig {
    /// Namespaced id, `requesty/<remote-id>`.
    pub model_id: String,
    /// The remote id, used as the display name and the routed model field.
    pub model_name: String,
    pub vision: bool,
    pub supports_schema: bool,
    pub api_base: &'static str,
    pub headers: &'static [(&'static str, &'static str)],
    /// Accepted attachment MIME types; empty for non-vision models.
    pub attachment_types: Vec<&'static str>,
}

/// Synchronous chat model handle the host invokes for blocking completions.
#[derive(Clone, Debug)]
pub struct RequestyChat {
    pub config: ModelConfig,
}

/// Asynchronous counterpart; identical configuration, execution driven by the
/// host's async completion path.
#[derive(Clone, Debug)]
pub struct RequestyAsyncChat {
    pub config: ModelConfig,
}

impl RequestyChat {
    /// Request arguments for one prompt, with host options translated to
    /// provider fields.
    pub fn build_kwargs(&self, stream: bool, options: &ChatOptions) -> Map<String, Value> {
        build_kwargs(&self.config.model_name, stream, options)
    }
}

impl RequestyAsyncChat {
    pub fn build_kwargs(&self, stream: bool, options: &ChatOptions) -> Map<String, Value> {
        build_kwargs(&self.config.model_name, stream, options)
    }
}

impl fmt::Display for RequestyChat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "requesty: {}", self.config.model_id)
    }
}

impl fmt::Display for RequestyAsyncChat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "requesty: {}", self.config.model_id)
    }
}

/// Startup hook: register every catalog model through `register`, one
/// sync/async pair per record.
///
/// Without a resolvable key this is a silent no-op (zero registrations, Ok).
/// Catalog retrieval errors propagate to the host.
pub fn register_models<F>(mut register: F) -> Result<(), CatalogError>
where
    F: FnMut(RequestyChat, RequestyAsyncChat),
{
    if keys::get_key().is_none() {
        log::debug!("no requesty key, skipping model registration");
        return Ok(());
    }
    for record in models::requesty_models()? {
        let (chat, async_chat) = instances_for(&record);
        register(chat, async_chat);
    }
    Ok(())
}

fn instances_for(record: &ModelRecord) -> (RequestyChat, RequestyAsyncChat) {
    let vision = models::supports_images(record);
    let config = ModelConfig {
        model_id: format!("requesty/{}", record.id),
        model_name: record.id.clone(),
        vision,
        supports_schema: record.supports_schema,
        api_base: API_BASE,
        headers: ROUTING_HEADERS,
        attachment_types: if vision {
            IMAGE_ATTACHMENT_TYPES.to_vec()
        } else {
            Vec::new()
        },
    };
    (
        RequestyChat {
            config: config.clone(),
        },
        RequestyAsyncChat { config },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> ModelRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn ids_are_namespaced_and_displayed() {
        let (chat, async_chat) = instances_for(&record(json!({"id": "google/gemini-2.5-pro"})));

        assert_eq!(chat.config.model_id, "requesty/google/gemini-2.5-pro");
        assert_eq!(chat.config.model_name, "google/gemini-2.5-pro");
        assert_eq!(chat.to_string(), "requesty: requesty/google/gemini-2.5-pro");
        assert_eq!(
            async_chat.to_string(),
            "requesty: requesty/google/gemini-2.5-pro"
        );
    }

    #[test]
    fn vision_models_accept_image_attachments_on_both_variants() {
        let (chat, async_chat) =
            instances_for(&record(json!({"id": "acme/alpha", "supports_vision": true})));

        assert!(chat.config.vision);
        assert_eq!(chat.config.attachment_types, IMAGE_ATTACHMENT_TYPES);
        assert_eq!(async_chat.config.attachment_types, IMAGE_ATTACHMENT_TYPES);
    }

    #[test]
    fn non_vision_models_accept_no_attachments() {
        let (chat, async_chat) = instances_for(&record(json!({"id": "acme/alpha"})));

        assert!(!chat.config.vision);
        assert!(chat.config.attachment_types.is_empty());
        assert!(async_chat.config.attachment_types.is_empty());
    }

    #[test]
    fn schema_flag_carries_over() {
        let mut rec = record(json!({"id": "acme/alpha"}));
        rec.supports_schema = true;
        let (chat, _) = instances_for(&rec);
        assert!(chat.config.supports_schema);
    }

    #[test]
    fn routing_configuration_is_fixed() {
        let (chat, _) = instances_for(&record(json!({"id": "acme/alpha"})));
        assert_eq!(chat.config.api_base, "https://router.requesty.ai/v1");
        assert!(
            chat.config
                .headers
                .iter()
                .any(|(name, _)| *name == "HTTP-Referer")
        );
    }
}
