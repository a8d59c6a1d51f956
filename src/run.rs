//! Subcommand implementations: logger init, catalog refresh, model listing,
//! and the config report.

use std::error::Error;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use clap::CommandFactory;
use clap_complete::Shell;
use serde_json::Value;

use crate::cli::{self, Args};
use crate::models::fetch::{MODELS_URL, STRUCTURED_MODELS_URL, http_get_json};
use crate::models::{self, ModelRecord};
use crate::{app, keys, paths, pricing, util};

/// Initialize env_logger from the -v/-q flags (default: warn).
pub fn init_logger(args: &Args) {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level()),
    )
    .try_init();
}

/// Force a live re-fetch of both catalogs, overwriting the cache files.
///
/// Requires a resolvable key. The two steps run in order and are not atomic:
/// a failure in the second leaves the first file refreshed.
pub fn run_refresh() -> Result<(), Box<dyn Error>> {
    if keys::get_key().is_none() {
        return Err("No key found for Requesty".into());
    }
    let client = reqwest::blocking::Client::new();

    let path = models_path()?;
    let payload = http_get_json(&client, MODELS_URL)
        .map_err(|e| format!("Failed to refresh models cache: {}", e))?;
    write_pretty(&path, &payload)?;
    eprintln!(
        "Refreshed {} models cache at {}",
        data_len(&payload),
        path.display()
    );

    let path = schema_path()?;
    let payload = http_get_json(&client, STRUCTURED_MODELS_URL)
        .map_err(|e| format!("Failed to refresh structured outputs cache: {}", e))?;
    write_pretty(&path, &payload)?;
    eprintln!(
        "Refreshed {} structured outputs models cache at {}",
        data_len(&payload),
        path.display()
    );
    Ok(())
}

/// List the annotated catalog, either as indented JSON or one block per
/// model. Cache rules apply; no key is required.
pub fn run_models(json: bool, query: Option<&str>) -> Result<(), Box<dyn Error>> {
    let all = models::requesty_models()?;
    let selected: Vec<&ModelRecord> = match query {
        Some(q) => util::filter_by_query(&all, q, |m| {
            (m.id.as_str(), m.description.as_deref().unwrap_or(""))
        }),
        None => all.iter().collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&selected)?);
    } else {
        for model in selected {
            println!("{}\n", model_block(model));
        }
    }
    Ok(())
}

/// Report version, resolved paths, cache state, and key status.
pub fn run_config() -> Result<(), Box<dyn Error>> {
    println!("{} v{}", app::NAME, app::VERSION);
    match paths::user_dir() {
        Some(dir) => println!("user dir: {}", dir.display()),
        None => println!("user dir: (unavailable)"),
    }
    let caches = [
        ("models cache", paths::models_cache_path()),
        ("structured outputs cache", paths::schema_models_cache_path()),
    ];
    for (label, path) in caches {
        match path {
            Some(p) if p.is_file() => {
                println!("{}: {} ({})", label, p.display(), cache_age(&p))
            }
            Some(p) => println!("{}: {} (absent)", label, p.display()),
            None => println!("{}: (unavailable)", label),
        }
    }
    let key_status = if keys::get_key().is_some() {
        "set"
    } else {
        "not set"
    };
    println!("api key: {}", key_status);
    Ok(())
}

/// Print a completion script for `shell` to stdout.
pub fn run_completions(shell: Shell) {
    let mut cmd = Args::command();
    let name = cmd.get_name().to_string();
    cli::generate(shell, &mut cmd, name, &mut io::stdout());
}

fn models_path() -> Result<PathBuf, Box<dyn Error>> {
    paths::models_cache_path().ok_or_else(|| "no user data directory available".into())
}

fn schema_path() -> Result<PathBuf, Box<dyn Error>> {
    paths::schema_models_cache_path().ok_or_else(|| "no user data directory available".into())
}

fn write_pretty(path: &Path, payload: &Value) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(payload)?)?;
    Ok(())
}

fn data_len(payload: &Value) -> usize {
    payload
        .get("data")
        .and_then(Value::as_array)
        .map_or(0, Vec::len)
}

/// Human-readable block for one model in the catalog listing.
fn model_block(model: &ModelRecord) -> String {
    let mut bits = Vec::new();
    bits.push(format!("- id: {}", model.id));
    bits.push(format!("  name: {}", model.display_name()));
    match model.context_window {
        Some(n) => bits.push(format!("  context_length: {}", util::group_digits(n))),
        None => bits.push("  context_length: N/A".to_string()),
    }
    bits.push(format!("  supports_schema: {}", model.supports_schema));

    let labeled = [
        ("input", model.input_price.as_ref()),
        ("output", model.output_price.as_ref()),
    ];
    let pricing = pricing::format_pricing(
        labeled
            .iter()
            .filter_map(|(label, price)| price.map(|p| (*label, p))),
    );
    if !pricing.is_empty() {
        bits.push(format!("  pricing: {}", pricing));
    }
    bits.join("\n")
}

fn cache_age(path: &Path) -> String {
    fs::metadata(path)
        .ok()
        .and_then(|m| m.modified().ok())
        .and_then(|t| SystemTime::now().duration_since(t).ok())
        .map(|age| format!("{}m old", age.as_secs() / 60))
        .unwrap_or_else(|| "age unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::{data_len, model_block};
    use crate::models::ModelRecord;
    use serde_json::json;

    fn record(value: serde_json::Value) -> ModelRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn block_shows_all_lines_for_a_full_record() {
        let mut rec = record(json!({
            "id": "acme/alpha",
            "description": "Alpha Model",
            "context_window": 128000,
            "input_price": 0.0000008,
            "output_price": 0.0000032,
        }));
        rec.supports_schema = true;

        assert_eq!(
            model_block(&rec),
            "- id: acme/alpha\n\
             \x20 name: Alpha Model\n\
             \x20 context_length: 128,000\n\
             \x20 supports_schema: true\n\
             \x20 pricing: input $0.8/M, output $3.2/M"
        );
    }

    #[test]
    fn block_falls_back_for_sparse_records() {
        let rec = record(json!({"id": "acme/bare"}));

        assert_eq!(
            model_block(&rec),
            "- id: acme/bare\n\
             \x20 name: acme/bare\n\
             \x20 context_length: N/A\n\
             \x20 supports_schema: false"
        );
    }

    #[test]
    fn block_omits_pricing_when_all_prices_are_zero() {
        let rec = record(json!({
            "id": "acme/free",
            "input_price": 0,
            "output_price": 0,
        }));

        assert!(!model_block(&rec).contains("pricing:"));
    }

    #[test]
    fn data_len_tolerates_missing_array() {
        assert_eq!(data_len(&json!({})), 0);
        assert_eq!(data_len(&json!({"data": [{"id": "a"}, {"id": "b"}]})), 2);
    }
}
