//! Document assembly: events + definitions merged into the base template.

use crate::Result;
use crate::events::{EventDef, EventKey};
use crate::load;
use crate::swagger::{nulls, operation, template};
use anyhow::Context;
use serde_json::{Map, Value};
use std::path::Path;
use tracing::warn;

/// Assemble the full API document.
///
/// Event loading failure is the only fatal outcome and surfaces as `Err`:
/// without events there is nothing to generate. Everything else degrades
/// per item: a bad definitions tree, override file or single event is
/// logged and the rest of the document still assembles.
pub fn generate(events_dir: &Path, definitions_path: &Path, config_dir: &Path) -> Result<Value> {
    let events = load::load_flat(events_dir)
        .with_context(|| format!("load event definitions from {}", events_dir.display()))?;

    let definitions = match load::load_nested(definitions_path) {
        Ok(defs) => defs,
        Err(err) => {
            warn!(
                "failed to load definitions from {}: {:#}",
                definitions_path.display(),
                err
            );
            Value::Object(Map::new())
        }
    };

    let mut spec = template::base_spec();
    if let Err(err) = template::apply_info_override(&mut spec, config_dir) {
        warn!("failed to apply swagger.json override: {:#}", err);
    }

    for (raw_key, raw_def) in events {
        match build_entry(&raw_key, raw_def) {
            Ok((key, op)) => {
                // Last writer wins on a repeated path+method pair.
                spec["paths"][&key.path][&key.method] = op;
            }
            Err(err) => warn!("skipping event {:?}: {:#}", raw_key, err),
        }
    }

    spec["definitions"] = definitions;

    Ok(nulls::strip_nulls(spec))
}

fn build_entry(raw_key: &str, raw_def: Value) -> Result<(EventKey, Value)> {
    let key = EventKey::parse(raw_key)?;
    let def: EventDef =
        serde_json::from_value(raw_def).context("malformed event definition")?;
    Ok((key, operation::build(raw_key, &def)))
}
