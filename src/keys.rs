//! Provider key resolution: environment first, then the host's `keys.json`.
//!
//! Resolution is read-only. Storing and removing keys stays with the host
//! tool's own key management.

use std::env;
use std::fs;

use crate::paths;

/// Environment variable consulted before the key registry.
pub const KEY_ENV_VAR: &str = "REQUESTY_API_KEY";

/// Entry name in the host key registry.
const KEY_NAME: &str = "requesty";

/// Resolve the provider key.
/// Returns `None` when neither the env var nor the registry has a non-empty entry.
pub fn get_key() -> Option<String> {
    if let Ok(key) = env::var(KEY_ENV_VAR) {
        let key = key.trim();
        if !key.is_empty() {
            return Some(key.to_string());
        }
    }
    key_from_registry()
}

fn key_from_registry() -> Option<String> {
    let path = paths::keys_path()?;
    let content = fs::read_to_string(path).ok()?;
    key_from_json(&content)
}

/// Pull the `requesty` entry out of a `keys.json` document.
/// Absent, empty, or malformed entries all resolve to `None`.
fn key_from_json(content: &str) -> Option<String> {
    let keys: serde_json::Value = serde_json::from_str(content).ok()?;
    let key = keys.get(KEY_NAME)?.as_str()?.trim();
    if key.is_empty() { None } else { Some(key.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::key_from_json;

    #[test]
    fn reads_requesty_entry() {
        let json = r#"{"openai": "sk-other", "requesty": "rk-test-123"}"#;
        assert_eq!(key_from_json(json).as_deref(), Some("rk-test-123"));
    }

    #[test]
    fn missing_entry_is_none() {
        assert_eq!(key_from_json(r#"{"openai": "sk-other"}"#), None);
    }

    #[test]
    fn empty_entry_is_none() {
        assert_eq!(key_from_json(r#"{"requesty": "   "}"#), None);
    }

    #[test]
    fn non_string_entry_is_none() {
        assert_eq!(key_from_json(r#"{"requesty": 42}"#), None);
    }

    #[test]
    fn malformed_registry_is_none() {
        assert_eq!(key_from_json("not json"), None);
    }
}
