use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::descriptor::ScalarKind;
use crate::example::ExampleValue;

/// Prefix under which registry entries are referenced from rendered documents.
pub const COMPONENTS_REF_PREFIX: &str = "#/components/schemas/";

/// JSON kind of a schema node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaKind {
    String,
    Number,
    Boolean,
    Object,
    Array,
    Null,
}

impl SchemaKind {
    /// JSON kind for a scalar; `None` when there is no type information.
    pub fn for_scalar(kind: Option<ScalarKind>) -> Option<SchemaKind> {
        match kind? {
            ScalarKind::Int32 | ScalarKind::Int64 | ScalarKind::Integer | ScalarKind::Float => {
                Some(SchemaKind::Number)
            }
            ScalarKind::Boolean => Some(SchemaKind::Boolean),
            ScalarKind::String | ScalarKind::Timestamp | ScalarKind::Uuid => Some(SchemaKind::String),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SchemaKind::String => "string",
            SchemaKind::Number => "number",
            SchemaKind::Boolean => "boolean",
            SchemaKind::Object => "object",
            SchemaKind::Array => "array",
            SchemaKind::Null => "null",
        }
    }
}

/// JSON type name for a scalar, or an empty string (no constraint) when the
/// type information is absent.
pub fn json_type_name(kind: Option<ScalarKind>) -> &'static str {
    SchemaKind::for_scalar(kind).map_or("", SchemaKind::as_str)
}

/// Format hint carried alongside the json kind of a scalar.
pub fn scalar_format(kind: ScalarKind) -> Option<&'static str> {
    match kind {
        ScalarKind::Int32 => Some("int32"),
        ScalarKind::Int64 => Some("int64"),
        ScalarKind::Float => Some("double"),
        ScalarKind::Timestamp => Some("date-time"),
        ScalarKind::Uuid => Some("uuid"),
        ScalarKind::Boolean | ScalarKind::Integer | ScalarKind::String => None,
    }
}

/// Structural description of a value's shape.
///
/// Serializes with the keys a documentation renderer expects: `type`,
/// `format`, `items`, `properties`, `enum`, `example`, `nullable`, and `$ref`
/// for references emitted when a cycle is broken. A nullable reference is
/// wrapped in `allOf`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SchemaNode {
    #[serde(
        rename = "$ref",
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_reference"
    )]
    pub reference: Option<String>,
    #[serde(rename = "allOf", skip_serializing_if = "Option::is_none")]
    pub all_of: Option<Vec<Arc<SchemaNode>>>,
    /// `None` means unconstrained.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<SchemaKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub nullable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Arc<SchemaNode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, Arc<SchemaNode>>>,
    #[serde(rename = "additionalProperties", skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<Arc<SchemaNode>>,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<ExampleValue>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

fn serialize_reference<S: Serializer>(reference: &Option<String>, s: S) -> Result<S::Ok, S::Error> {
    match reference {
        Some(name) => s.serialize_str(&format!("{COMPONENTS_REF_PREFIX}{name}")),
        None => s.serialize_none(),
    }
}

impl SchemaNode {
    pub fn of_kind(kind: SchemaKind) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }

    /// Node with no type constraint at all.
    pub fn unconstrained() -> Self {
        Self::default()
    }

    /// Object node without properties; also the opaque fallback.
    pub fn object() -> Self {
        Self::of_kind(SchemaKind::Object)
    }

    pub fn string() -> Self {
        Self::of_kind(SchemaKind::String)
    }

    pub fn array(items: Arc<SchemaNode>) -> Self {
        Self {
            kind: Some(SchemaKind::Array),
            items: Some(items),
            ..Self::default()
        }
    }

    /// By-name reference to a registry entry.
    pub fn reference(name: impl Into<String>) -> Self {
        Self {
            reference: Some(name.into()),
            ..Self::default()
        }
    }

    /// Node matching every one of `schemas`.
    pub fn all_of(schemas: Vec<Arc<SchemaNode>>) -> Self {
        Self {
            all_of: Some(schemas),
            ..Self::default()
        }
    }

    pub fn with_nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_example(mut self, example: ExampleValue) -> Self {
        self.example = Some(example);
        self
    }

    pub fn with_properties(mut self, properties: BTreeMap<String, Arc<SchemaNode>>) -> Self {
        self.properties = Some(properties);
        self
    }

    pub fn with_additional_properties(mut self, values: Arc<SchemaNode>) -> Self {
        self.additional_properties = Some(values);
        self
    }

    pub fn with_enum_values(mut self, values: Vec<String>) -> Self {
        self.enum_values = Some(values);
        self
    }

    pub fn is_reference(&self) -> bool {
        self.reference.is_some()
    }

    /// Look up a property by its serialized name.
    pub fn property(&self, name: &str) -> Option<&Arc<SchemaNode>> {
        self.properties.as_ref()?.get(name)
    }
}
