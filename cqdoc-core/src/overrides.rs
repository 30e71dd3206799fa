use std::collections::BTreeMap;

use crate::describe::Describe;
use crate::descriptor::TypeDescriptor;
use crate::example::ExampleValue;

/// Substitute schema and fixed example for a type.
#[derive(Debug, Clone)]
pub struct OverrideEntry {
    pub substitute: TypeDescriptor,
    pub example: ExampleValue,
}

/// Caller-supplied table of types the synthesizer should not introspect.
///
/// Entries are keyed by the display name of the original type. An entry
/// replaces whatever the synthesizer would otherwise produce for that type:
/// the schema comes from the substitute type and the example is the fixed one.
///
/// ```ignore
/// let mut overrides = OverrideMap::new();
/// // Money is serialized as a decimal string.
/// overrides.insert::<Money>(String::describe(), "12.50".into());
/// ```
#[derive(Debug, Clone, Default)]
pub struct OverrideMap {
    entries: BTreeMap<String, OverrideEntry>,
}

impl OverrideMap {
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Override the type `T`.
    pub fn insert<T: Describe + ?Sized>(&mut self, substitute: TypeDescriptor, example: ExampleValue) {
        self.insert_for(&T::describe(), substitute, example);
    }

    /// Override the type described by `original`.
    pub fn insert_for(
        &mut self,
        original: &TypeDescriptor,
        substitute: TypeDescriptor,
        example: ExampleValue,
    ) {
        self.entries.insert(
            original.display_name(),
            OverrideEntry {
                substitute,
                example,
            },
        );
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with<T: Describe + ?Sized>(mut self, substitute: TypeDescriptor, example: ExampleValue) -> Self {
        self.insert::<T>(substitute, example);
        self
    }

    pub fn contains(&self, ty: &TypeDescriptor) -> bool {
        self.entries.contains_key(&ty.display_name())
    }

    pub fn get(&self, ty: &TypeDescriptor) -> Option<&OverrideEntry> {
        self.get_by_name(&ty.display_name())
    }

    pub fn get_by_name(&self, display_name: &str) -> Option<&OverrideEntry> {
        self.entries.get(display_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
