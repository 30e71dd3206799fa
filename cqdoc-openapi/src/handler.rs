use std::sync::Arc;

use cqdoc_core::TypeDescriptor;
use serde::Serialize;
use serde_json::Value;

/// A single metadata item attached to an endpoint or handler, e.g. a rate
/// limit policy name or a required role.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metadata {
    pub key: String,
    pub value: Value,
}

impl Metadata {
    pub fn new(key: &str, value: impl Into<Value>) -> Self {
        Self {
            key: key.to_string(),
            value: value.into(),
        }
    }
}

/// Immutable, shareable set of endpoint metadata.
pub type EndpointMetadata = Arc<[Metadata]>;

/// A handler as resolved by the host framework.
#[derive(Debug, Clone)]
pub struct HandlerInfo {
    pub resource: String,
    /// Handler key within the resource, e.g. `get/key` or `post`.
    pub key: String,
    pub argument_types: Vec<TypeDescriptor>,
    pub return_type: Option<TypeDescriptor>,
    /// Metadata declared on the handler that must stay visible to the
    /// endpoint (rate limiting, authorization, ...).
    pub attributes: Vec<Metadata>,
}

impl HandlerInfo {
    pub fn new(resource: &str, key: &str) -> Self {
        Self {
            resource: resource.to_string(),
            key: key.to_string(),
            argument_types: Vec::new(),
            return_type: None,
            attributes: Vec::new(),
        }
    }

    pub fn with_argument(mut self, ty: TypeDescriptor) -> Self {
        self.argument_types.push(ty);
        self
    }

    pub fn with_return(mut self, ty: TypeDescriptor) -> Self {
        self.return_type = Some(ty);
        self
    }

    pub fn with_attribute(mut self, attribute: Metadata) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Stable identifier of the operation: `resource/key`.
    pub fn operation_id(&self) -> String {
        format!("{}/{}", self.resource, self.key)
    }
}

/// Endpoint metadata followed by the handler's own attributes.
///
/// Neither input is modified; the result is a new set, so readers holding the
/// previous one keep a consistent view.
pub fn merge_metadata(endpoint: &[Metadata], handler: &[Metadata]) -> EndpointMetadata {
    endpoint.iter().chain(handler).cloned().collect()
}
