//! package.json rewriting for the freshly extracted template
//!
//! The rewrite is a pure function of the pre-existing metadata, the app name
//! and the resolved author identity; no other pipeline state is consulted.
//! Persisting is atomic: write to a temp sibling, then rename over the
//! original, so a failed write leaves the prior file untouched.

use crate::error::{Error, Result};
use serde_json::{json, Map, Value};
use std::path::Path;
use std::process::Command;
use tokio::fs;

pub const BASELINE_VERSION: &str = "0.1.0";

/// Fields tied to the template's upstream repository, always dropped.
const REMOVED_FIELDS: &[&str] = &["bugs", "homepage", "repository", "keywords"];

/// Rewrite `<directory>/package.json` in place for the new project.
pub async fn configure(directory: &Path, app_name: &str) -> Result<()> {
    configure_with(directory, app_name, resolve_author()).await
}

/// Same as [`configure`] with an explicit author value.
pub async fn configure_with(directory: &Path, app_name: &str, author: Value) -> Result<()> {
    let path = directory.join("package.json");
    let raw = fs::read_to_string(&path).await?;
    let mut pkg: Map<String, Value> = serde_json::from_str(&raw).map_err(|source| {
        Error::Metadata {
            path: path.clone(),
            source,
        }
    })?;

    apply(&mut pkg, app_name, author);

    let mut rendered = serde_json::to_string_pretty(&Value::Object(pkg)).map_err(|source| {
        Error::Metadata {
            path: path.clone(),
            source,
        }
    })?;
    rendered.push('\n');

    let staged = path.with_extension("json.tmp");
    fs::write(&staged, rendered).await?;
    fs::rename(&staged, &path).await?;

    Ok(())
}

/// The metadata rules, applied in order.
fn apply(pkg: &mut Map<String, Value>, app_name: &str, author: Value) {
    pkg.insert("name".to_string(), Value::String(app_name.to_string()));

    for field in REMOVED_FIELDS {
        pkg.remove(*field);
    }

    // An absent version stays absent; a present one resets to the baseline.
    if pkg.contains_key("version") {
        pkg.insert(
            "version".to_string(),
            Value::String(BASELINE_VERSION.to_string()),
        );
    }

    pkg.insert("author".to_string(), author);
}

/// Author identity from the host's git configuration, or an empty value when
/// git is not available.
pub fn resolve_author() -> Value {
    if !crate::runtime::probe::command_exists("git") {
        return Value::String(String::new());
    }
    json!({
        "name": git_config("user.name"),
        "email": git_config("user.email"),
    })
}

fn git_config(key: &str) -> String {
    Command::new("git")
        .args(["config", key])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .unwrap_or_default()
}
