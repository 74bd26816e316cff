//! Base document template plus the optional `swagger.json` info override.

use crate::Result;
use anyhow::Context;
use serde_json::{Value, json};
use std::path::Path;

/// Static scaffold every generated document starts from.
pub fn base_spec() -> Value {
    json!({
        "openapi": "3.0.0",
        "info": {
            "version": "0.0.1",
            "title": "Sample Microservice",
            "description": "API calls generated from the declared events"
        },
        "servers": [
            {
                "url": "http://localhost:3000",
                "description": "Public API server"
            }
        ],
        "paths": {}
    })
}

/// Replace the template's `info` block with the one from
/// `<config_dir>/swagger.json`, when that file exists. Every other field
/// of the override file is ignored; an override without an `info` block
/// yields an empty one.
pub fn apply_info_override(spec: &mut Value, config_dir: &Path) -> Result<()> {
    let path = config_dir.join("swagger.json");
    if !path.exists() {
        return Ok(());
    }

    let text =
        std::fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let custom: Value =
        serde_json::from_str(&text).with_context(|| format!("parse JSON {}", path.display()))?;

    spec["info"] = custom.get("info").cloned().unwrap_or_else(|| json!({}));
    Ok(())
}
