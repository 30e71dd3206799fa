use indexmap::IndexMap;
use tracing::{trace, warn};

use super::Synthesizer;
use crate::classify::{classify, Category};
use crate::descriptor::{ScalarKind, TypeDescriptor};
use crate::example::{ExampleValue, FLOAT_EXAMPLE, INT32_EXAMPLE, INT64_EXAMPLE};
use crate::registry::SchemaRegistry;

impl Synthesizer<'_> {
    /// Derive one representative value for `ty`.
    ///
    /// An example already cached in `registry` for the type's display name
    /// wins, then an override's fixed example. Otherwise the value is built
    /// from the type's category. Container types that re-enter themselves
    /// produce `Null` at the point of re-entry.
    pub fn example(&mut self, ty: &TypeDescriptor, registry: &SchemaRegistry) -> ExampleValue {
        let name = ty.display_name();

        if let Some(cached) = registry.example(&name) {
            return cached.clone();
        }
        if let Some(entry) = self.overrides.get_by_name(&name) {
            return entry.example.clone();
        }

        match classify(ty) {
            Category::Nullable => match ty.underlying() {
                Some(underlying) => self.example(&underlying, registry),
                None => ExampleValue::Null,
            },
            Category::Enum => enum_example(ty),
            Category::Scalar => match ty.scalar_kind() {
                Some(kind) => self.scalar_example(kind),
                None => ExampleValue::Null,
            },
            category @ (Category::Sequence | Category::Map | Category::Structured) => {
                self.nested_example(ty, &name, category, registry)
            }
            Category::Opaque => ExampleValue::Null,
        }
    }

    fn scalar_example(&mut self, kind: ScalarKind) -> ExampleValue {
        match kind {
            ScalarKind::String => ExampleValue::from(self.source.word()),
            ScalarKind::Int32 => ExampleValue::Integer(INT32_EXAMPLE),
            ScalarKind::Int64 => ExampleValue::Long(INT64_EXAMPLE),
            ScalarKind::Float => ExampleValue::Double(FLOAT_EXAMPLE),
            ScalarKind::Integer => ExampleValue::Integer(self.source.other_integer()),
            ScalarKind::Boolean => ExampleValue::Boolean(true),
            ScalarKind::Timestamp => ExampleValue::String(self.source.timestamp()),
            ScalarKind::Uuid => ExampleValue::String(self.source.uuid().to_string()),
        }
    }

    fn nested_example(
        &mut self,
        ty: &TypeDescriptor,
        name: &str,
        category: Category,
        registry: &SchemaRegistry,
    ) -> ExampleValue {
        if self.example_stack.contains(name) {
            trace!(type_name = %name, "recursive example, emitting null");
            return ExampleValue::Null;
        }
        if self.example_depth >= self.max_depth {
            warn!(type_name = %name, max_depth = self.max_depth, "example depth limit reached");
            return self.truncated_example(ty, category, registry);
        }

        self.example_stack.insert(name.to_string());
        self.example_depth += 1;
        let value = match category {
            Category::Sequence => self.sequence_example(ty, registry),
            Category::Map => self.map_example(ty, registry),
            _ => self.object_example(ty, registry),
        };
        self.example_depth -= 1;
        self.example_stack.remove(name);
        value
    }

    /// Stand-in for a container reached at the depth limit. Elements and map
    /// values are filled from [`Self::leaf_example`], so sequences keep their
    /// element count without recursing further.
    fn truncated_example(
        &mut self,
        ty: &TypeDescriptor,
        category: Category,
        registry: &SchemaRegistry,
    ) -> ExampleValue {
        match category {
            Category::Sequence => {
                let element = ty.element().unwrap_or_else(TypeDescriptor::unknown);
                let len = self.source.sequence_len();
                let items = (0..len)
                    .map(|_| self.leaf_example(&element, registry))
                    .filter(|item| !item.is_null())
                    .collect();
                ExampleValue::Array(items)
            }
            Category::Map => {
                let value_ty = ty.map_value().unwrap_or_else(TypeDescriptor::unknown);
                let key = self.naming.property_name("key", true);
                let value = self.leaf_example(&value_ty, registry);
                ExampleValue::Object(IndexMap::from([(key, value)]))
            }
            _ => ExampleValue::Object(IndexMap::new()),
        }
    }

    /// Example for `ty` that never descends into its members: containers
    /// collapse to an empty array or object.
    fn leaf_example(&mut self, ty: &TypeDescriptor, registry: &SchemaRegistry) -> ExampleValue {
        let name = ty.display_name();
        if let Some(cached) = registry.example(&name) {
            return cached.clone();
        }
        if let Some(entry) = self.overrides.get_by_name(&name) {
            return entry.example.clone();
        }

        match classify(ty) {
            Category::Nullable => match ty.underlying() {
                Some(underlying) => self.leaf_example(&underlying, registry),
                None => ExampleValue::Null,
            },
            Category::Enum => enum_example(ty),
            Category::Scalar => match ty.scalar_kind() {
                Some(kind) => self.scalar_example(kind),
                None => ExampleValue::Null,
            },
            Category::Sequence => ExampleValue::Array(Vec::new()),
            Category::Map | Category::Structured => ExampleValue::Object(IndexMap::new()),
            Category::Opaque => ExampleValue::Null,
        }
    }

    fn sequence_example(&mut self, ty: &TypeDescriptor, registry: &SchemaRegistry) -> ExampleValue {
        let element = ty.element().unwrap_or_else(TypeDescriptor::unknown);
        let len = self.source.sequence_len();
        let items = (0..len)
            .map(|_| self.example(&element, registry))
            .filter(|item| !item.is_null())
            .collect();
        ExampleValue::Array(items)
    }

    fn map_example(&mut self, ty: &TypeDescriptor, registry: &SchemaRegistry) -> ExampleValue {
        let value_ty = ty.map_value().unwrap_or_else(TypeDescriptor::unknown);
        let key = self.naming.property_name("key", true);
        let value = self.example(&value_ty, registry);
        ExampleValue::Object(IndexMap::from([(key, value)]))
    }

    fn object_example(&mut self, ty: &TypeDescriptor, registry: &SchemaRegistry) -> ExampleValue {
        let mut fields = IndexMap::new();
        for property in ty.properties() {
            if property.is_ignored() {
                continue;
            }
            let value = self.example(&property.descriptor(), registry);
            if value.is_null() {
                continue;
            }
            fields.insert(self.naming.property_name(property.name(), false), value);
        }
        ExampleValue::Object(fields)
    }
}

fn enum_example(ty: &TypeDescriptor) -> ExampleValue {
    ty.enum_members()
        .and_then(|members| members.first())
        .map_or(ExampleValue::Null, |first| ExampleValue::from(first.as_str()))
}
