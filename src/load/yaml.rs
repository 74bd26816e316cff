//! Directory-tree YAML loaders.
//!
//! Two shapes are needed:
//! - `load_flat`: merge the top-level keys of every file into one flat map
//!   (how event keys are declared: any file may contribute any key).
//! - `load_nested`: key each file's content by its dotted relative path
//!   (how model definitions are namespaced: `common/user.yaml` lands under
//!   `common.user`).

use crate::Result;
use anyhow::{Context, bail};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collect every `.yaml`/`.yml` file under `dir`, sorted by path so load
/// order (and therefore which file wins on key collisions) is stable.
fn yaml_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry.with_context(|| format!("walk {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        match entry.path().extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => files.push(entry.into_path()),
            _ => {}
        }
    }
    files.sort();
    Ok(files)
}

fn read_value(path: &Path) -> Result<Value> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value: Value =
        serde_yaml::from_str(&text).with_context(|| format!("parse YAML {}", path.display()))?;
    Ok(value)
}

/// Merge the top-level mapping keys of every YAML file under `dir` into a
/// single flat map. Later files overwrite earlier ones on collision; empty
/// files contribute nothing.
pub fn load_flat(dir: &Path) -> Result<Map<String, Value>> {
    let mut merged = Map::new();
    for file in yaml_files(dir)? {
        match read_value(&file)? {
            Value::Null => {}
            Value::Object(map) => merged.extend(map),
            _ => bail!("{}: expected a top-level mapping", file.display()),
        }
    }
    Ok(merged)
}

/// Load model definitions. A single file loads verbatim; a directory loads
/// each file under the dotted path derived from its location, every dot
/// opening one level of nesting.
pub fn load_nested(path: &Path) -> Result<Value> {
    if path.is_file() {
        return read_value(path);
    }

    let mut root = Map::new();
    for file in yaml_files(path)? {
        let value = read_value(&file)?;
        let rel = file.strip_prefix(path).unwrap_or(&file);
        let module = rel
            .with_extension("")
            .to_string_lossy()
            .replace(['/', '\\'], ".");
        set_path(&mut root, &module, value);
    }
    Ok(Value::Object(root))
}

/// Insert `value` at a dotted path, creating (or overwriting non-mapping)
/// intermediate objects along the way.
fn set_path(root: &mut Map<String, Value>, dotted: &str, value: Value) {
    match dotted.split_once('.') {
        None => {
            root.insert(dotted.to_string(), value);
        }
        Some((head, rest)) => {
            let slot = root
                .entry(head.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            if let Value::Object(map) = slot {
                set_path(map, rest, value);
            }
        }
    }
}
