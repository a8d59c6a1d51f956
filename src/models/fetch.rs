//! Catalog retrieval: cached fetches of the router catalogs and schema-support
//! annotation.

use std::collections::HashSet;
use std::time::Duration;

use serde_json::Value;

use super::cache::{self, CacheError, FetchFailure};
use super::info::{ModelList, ModelRecord};
use crate::paths;

/// Requesty router API base, carried by every registered model.
pub const API_BASE: &str = "https://router.requesty.ai/v1";

/// Full catalog endpoint.
pub const MODELS_URL: &str = "https://router.requesty.ai/v1/models";

/// Catalog restricted to models accepting structured outputs.
pub const STRUCTURED_MODELS_URL: &str =
    "https://router.requesty.ai/v1/models?supported_parameters=structured_outputs";

/// Fixed headers identifying the referring application to the router.
pub const ROUTING_HEADERS: &[(&str, &str)] = &[
    ("HTTP-Referer", "https://llm.datasette.io/"),
    ("X-Title", "LLM"),
];

/// Freshness window for both catalog cache files.
pub const CACHE_TIMEOUT: Duration = Duration::from_secs(60 * 60);

/// Errors from catalog retrieval.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("no user data directory available")]
    NoUserDir,
    #[error(transparent)]
    Cache(#[from] CacheError),
    #[error("unexpected catalog shape: {0}")]
    Shape(#[source] serde_json::Error),
}

/// The full model catalog with `supports_schema` set on every record.
///
/// Two independent cached fetches (full catalog, structured-outputs subset),
/// each against its own cache file with a one-hour window. A record supports
/// schemas when its id appears in the subset; full-catalog order is kept.
pub fn requesty_models() -> Result<Vec<ModelRecord>, CatalogError> {
    let models_path = paths::models_cache_path().ok_or(CatalogError::NoUserDir)?;
    let schema_path = paths::schema_models_cache_path().ok_or(CatalogError::NoUserDir)?;
    let client = reqwest::blocking::Client::new();

    let full = cache::fetch_cached_json(MODELS_URL, &models_path, CACHE_TIMEOUT, |url| {
        http_get_json(&client, url)
    })?;
    let subset = cache::fetch_cached_json(STRUCTURED_MODELS_URL, &schema_path, CACHE_TIMEOUT, |url| {
        http_get_json(&client, url)
    })?;

    build_catalog(full, subset)
}

/// Blocking GET with the routing headers. Redirects are followed; non-2xx
/// statuses are errors.
pub fn http_get_json(client: &reqwest::blocking::Client, url: &str) -> Result<Value, FetchFailure> {
    let mut request = client.get(url);
    for (name, value) in ROUTING_HEADERS {
        request = request.header(*name, *value);
    }
    let response = request.send()?.error_for_status()?;
    Ok(response.json()?)
}

fn build_catalog(full: Value, subset: Value) -> Result<Vec<ModelRecord>, CatalogError> {
    let full: ModelList = serde_json::from_value(full).map_err(CatalogError::Shape)?;
    let subset: ModelList = serde_json::from_value(subset).map_err(CatalogError::Shape)?;

    let schema_ids: HashSet<String> = subset.data.into_iter().map(|m| m.id).collect();
    let mut models = full.data;
    for model in &mut models {
        model.supports_schema = schema_ids.contains(&model.id);
    }
    Ok(models)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn subset_membership_sets_schema_flag() {
        let full = json!({"data": [
            {"id": "acme/alpha"},
            {"id": "acme/beta"},
            {"id": "acme/gamma"},
        ]});
        let subset = json!({"data": [{"id": "acme/beta"}]});

        let models = build_catalog(full, subset).unwrap();
        let flags: Vec<(String, bool)> = models
            .into_iter()
            .map(|m| (m.id, m.supports_schema))
            .collect();
        assert_eq!(
            flags,
            vec![
                ("acme/alpha".to_string(), false),
                ("acme/beta".to_string(), true),
                ("acme/gamma".to_string(), false),
            ]
        );
    }

    #[test]
    fn full_catalog_order_is_preserved() {
        let full = json!({"data": [
            {"id": "z/last"},
            {"id": "a/first"},
            {"id": "m/middle"},
        ]});
        let subset = json!({"data": []});

        let ids: Vec<String> = build_catalog(full, subset)
            .unwrap()
            .into_iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec!["z/last", "a/first", "m/middle"]);
    }

    #[test]
    fn missing_data_array_is_an_empty_catalog() {
        let models = build_catalog(json!({}), json!({})).unwrap();
        assert!(models.is_empty());
    }

    #[test]
    fn non_object_catalog_is_a_shape_error() {
        let err = build_catalog(json!([1, 2, 3]), json!({})).unwrap_err();
        assert!(matches!(err, CatalogError::Shape(_)));
    }
}
