use cqdoc_core::{SchemaNode, SchemaRegistry, COMPONENTS_REF_PREFIX};
use serde_json::{json, Map, Value};

/// Render a single schema node to JSON.
pub fn render_schema(node: &SchemaNode) -> Value {
    // Schema nodes only contain string-keyed maps, so this cannot fail.
    serde_json::to_value(node).unwrap_or_else(|_| json!({ "type": "object" }))
}

/// Render a registry as an OpenAPI `components` object, schemas sorted by name.
pub fn render_components(registry: &SchemaRegistry) -> Value {
    let mut schemas = Map::new();
    for name in registry.names() {
        if let Some(node) = registry.get(name) {
            schemas.insert(name.to_string(), render_schema(&node));
        }
    }
    json!({ "schemas": schemas })
}

/// `$ref` object pointing at a registered schema.
pub fn schema_ref(name: &str) -> Value {
    json!({ "$ref": format!("{COMPONENTS_REF_PREFIX}{name}") })
}
