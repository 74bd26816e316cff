//! Operation objects: the per-method entry under a path.

use crate::events::EventDef;
use serde_json::{Value, json};
use tracing::debug;

/// Build the operation object for one event. Absent fields materialize as
/// null here; the null-strip pass removes them before the document is
/// serialized.
pub fn build(raw_key: &str, def: &EventDef) -> Value {
    if def.body.is_some() && def.nested_body().is_some() {
        debug!(event = raw_key, "top-level body shadows data.schema.body");
    }
    if (def.parameters.is_some() || def.params.is_some()) && def.nested_params().is_some() {
        debug!(event = raw_key, "top-level parameters shadow data.schema.params");
    }

    json!({
        "summary": def.summary,
        "description": def.description,
        "requestBody": def.request_body(),
        "parameters": def.request_parameters(),
        "responses": def.responses,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn absent_fields_come_out_null() {
        let def: EventDef = serde_json::from_value(json!({"summary": "s"})).unwrap();
        let op = build("svc.get./x", &def);
        assert_eq!(
            op,
            json!({
                "summary": "s",
                "description": null,
                "requestBody": null,
                "parameters": null,
                "responses": null,
            })
        );
    }

    #[test]
    fn carries_all_declared_fields() {
        let def: EventDef = serde_json::from_value(json!({
            "summary": "list users",
            "description": "paginated",
            "params": [{"name": "page", "in": "query"}],
            "responses": {"200": {"description": "ok"}}
        }))
        .unwrap();

        let op = build("svc.get./users", &def);
        assert_eq!(op["summary"], json!("list users"));
        assert_eq!(op["parameters"], json!([{"name": "page", "in": "query"}]));
        assert_eq!(op["responses"]["200"]["description"], json!("ok"));
    }
}
