//! Path helpers for the host user-data directory and the provider cache files.

use std::env;
use std::path::PathBuf;

/// The host tool's user data directory.
///
/// `LLM_USER_PATH` overrides when set (the host's own convention, and the
/// hook tests use to point at a temp dir); otherwise the platform data
/// directory for `io.datasette.llm`.
pub fn user_dir() -> Option<PathBuf> {
    if let Ok(dir) = env::var("LLM_USER_PATH")
        && !dir.is_empty()
    {
        return Some(PathBuf::from(dir));
    }
    directories::ProjectDirs::from("io", "datasette", "llm").map(|d| d.data_dir().to_path_buf())
}

/// Cache file for the full model catalog.
pub fn models_cache_path() -> Option<PathBuf> {
    user_dir().map(|d| d.join("requesty_models.json"))
}

/// Cache file for the structured-outputs-capable subset.
pub fn schema_models_cache_path() -> Option<PathBuf> {
    user_dir().map(|d| d.join("requesty_models_structured_outputs.json"))
}

/// The host key registry file (`keys.json` in the user dir).
pub fn keys_path() -> Option<PathBuf> {
    user_dir().map(|d| d.join("keys.json"))
}
