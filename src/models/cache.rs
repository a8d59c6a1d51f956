//! Disk-backed JSON cache with time-based expiry and stale-on-error fallback.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use serde_json::Value;

/// Failure of the live-fetch step, opaque to the cache layer.
pub type FetchFailure = Box<dyn std::error::Error + Send + Sync>;

/// Errors from cached retrieval.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// Live fetch failed and no cached copy exists to fall back on.
    #[error("failed to download data and no cache is available at {path}")]
    Download {
        path: PathBuf,
        #[source]
        source: FetchFailure,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Retrieve JSON from `url`, caching the payload at `path`.
///
/// A cache file younger than `cache_timeout` is served without calling
/// `fetch`. Otherwise `fetch` runs; on success the payload is written back
/// (parent directories created as needed) and returned. If `fetch` fails, an
/// existing cache file is served regardless of age; with no file the call
/// fails with [`CacheError::Download`] naming the path.
///
/// Only fetch failures take the stale branch: a file that no longer parses
/// propagates its JSON error.
pub fn fetch_cached_json<F>(
    url: &str,
    path: &Path,
    cache_timeout: Duration,
    fetch: F,
) -> Result<Value, CacheError>
where
    F: FnOnce(&str) -> Result<Value, FetchFailure>,
{
    if is_fresh(path, cache_timeout) {
        log::debug!("cache hit for {} at {}", url, path.display());
        return read_json(path);
    }

    match fetch(url) {
        Ok(payload) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, serde_json::to_string(&payload)?)?;
            Ok(payload)
        }
        Err(source) if path.is_file() => {
            log::warn!(
                "fetch of {} failed ({}), serving stale cache at {}",
                url,
                source,
                path.display()
            );
            read_json(path)
        }
        Err(source) => Err(CacheError::Download {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn read_json(path: &Path) -> Result<Value, CacheError> {
    Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
}

fn is_fresh(path: &Path, cache_timeout: Duration) -> bool {
    let Ok(meta) = fs::metadata(path) else {
        return false;
    };
    if !meta.is_file() {
        return false;
    }
    let Ok(modified) = meta.modified() else {
        return false;
    };
    match SystemTime::now().duration_since(modified) {
        Ok(age) => age < cache_timeout,
        // Clock went backwards; a future mtime counts as fresh.
        Err(_) => true,
    }
}
