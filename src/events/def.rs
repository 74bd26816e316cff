//! Raw event-definition shape as it appears in the events YAML.
//!
//! Only the envelope is typed; schema-bearing fields stay free-form
//! values. Two layouts are in circulation: request schemas either at the
//! top level (`body`, `parameters`/`params`) or nested under
//! `data.schema.{body,params}`. Top level wins when both are present.

use serde::Deserialize;
use serde_json::Value;

/// One event definition. Unknown fields are ignored; a null field
/// deserializes the same as an absent one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventDef {
    #[serde(default)]
    pub summary: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub body: Option<Value>,

    #[serde(default)]
    pub parameters: Option<Value>,

    #[serde(default)]
    pub params: Option<Value>,

    #[serde(default)]
    pub responses: Option<Value>,

    #[serde(default)]
    pub data: Option<DataBlock>,
}

/// Carrier for the nested `data.schema.*` layout.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataBlock {
    #[serde(default)]
    pub schema: Option<SchemaBlock>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaBlock {
    #[serde(default)]
    pub body: Option<Value>,

    #[serde(default)]
    pub params: Option<Value>,
}

impl EventDef {
    pub fn nested_body(&self) -> Option<&Value> {
        self.data.as_ref()?.schema.as_ref()?.body.as_ref()
    }

    pub fn nested_params(&self) -> Option<&Value> {
        self.data.as_ref()?.schema.as_ref()?.params.as_ref()
    }

    /// Request body: top-level `body`, else `data.schema.body`.
    pub fn request_body(&self) -> Option<&Value> {
        self.body.as_ref().or_else(|| self.nested_body())
    }

    /// Parameters: `parameters`, else `params`, else `data.schema.params`.
    pub fn request_parameters(&self) -> Option<&Value> {
        self.parameters
            .as_ref()
            .or(self.params.as_ref())
            .or_else(|| self.nested_params())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn def(v: serde_json::Value) -> EventDef {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn top_level_body_wins_over_nested() {
        let d = def(json!({
            "body": {"type": "object"},
            "data": {"schema": {"body": {"type": "string"}}}
        }));
        assert_eq!(d.request_body(), Some(&json!({"type": "object"})));
    }

    #[test]
    fn nested_body_is_the_fallback() {
        let d = def(json!({
            "data": {"schema": {"body": {"type": "string"}}}
        }));
        assert_eq!(d.request_body(), Some(&json!({"type": "string"})));
    }

    #[test]
    fn parameters_precedence_chain() {
        let d = def(json!({
            "parameters": [1],
            "params": [2],
            "data": {"schema": {"params": [3]}}
        }));
        assert_eq!(d.request_parameters(), Some(&json!([1])));

        let d = def(json!({
            "params": [2],
            "data": {"schema": {"params": [3]}}
        }));
        assert_eq!(d.request_parameters(), Some(&json!([2])));

        let d = def(json!({
            "data": {"schema": {"params": [3]}}
        }));
        assert_eq!(d.request_parameters(), Some(&json!([3])));
    }

    #[test]
    fn null_fields_read_as_absent() {
        let d = def(json!({
            "body": null,
            "data": {"schema": {"body": {"type": "string"}}}
        }));
        assert_eq!(d.request_body(), Some(&json!({"type": "string"})));
    }
}
