use std::collections::HashMap;
use std::sync::Arc;

use crate::example::ExampleValue;
use crate::schema::SchemaNode;

/// Schema nodes keyed by type display name.
///
/// One registry lives for one synthesis session: the synthesizer uses it as
/// its memoization cache while it runs, and the finished registry is what a
/// renderer embeds as the document's reusable schemas. Nodes are shared, so
/// looking up a cached entry hands back the very same node.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: HashMap<String, Arc<SchemaNode>>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node under the given name, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, schema: Arc<SchemaNode>) {
        self.schemas.insert(name.into(), schema);
    }

    pub fn get(&self, name: &str) -> Option<Arc<SchemaNode>> {
        self.schemas.get(name).cloned()
    }

    /// Cached example of a registered node, if it carries one.
    pub fn example(&self, name: &str) -> Option<&ExampleValue> {
        self.schemas.get(name)?.example.as_ref()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.schemas.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<SchemaNode>)> {
        self.schemas.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Consume the registry and return the schemas map for rendering.
    pub fn into_schemas(self) -> HashMap<String, Arc<SchemaNode>> {
        self.schemas
    }
}
