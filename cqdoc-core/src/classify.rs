use crate::descriptor::TypeDescriptor;

/// Structural category of a type, as seen by the synthesizers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Nullable,
    Enum,
    Scalar,
    Sequence,
    Map,
    Structured,
    Opaque,
}

/// Categorize a type.
///
/// A type may match several predicates at once (a typed array that also
/// exposes properties, for example). The first match in this order wins:
/// nullable, enum, scalar, sequence, map, structured, opaque. Overrides are
/// consulted by the synthesizer before classification.
pub fn classify(ty: &TypeDescriptor) -> Category {
    if ty.is_nullable() {
        Category::Nullable
    } else if ty.is_enum() {
        Category::Enum
    } else if ty.is_scalar() {
        Category::Scalar
    } else if ty.is_sequence() {
        Category::Sequence
    } else if ty.is_map() {
        Category::Map
    } else if ty.is_structured() && !ty.is_numeric() {
        Category::Structured
    } else {
        Category::Opaque
    }
}
