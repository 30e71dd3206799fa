//! Read-only view of a type, as consumed by the synthesizers.
//!
//! A [`TypeDescriptor`] carries independent flags (nullable, enum, scalar,
//! sequence, map, properties) rather than a single shape, because real types
//! can match several at once; [`classify`](crate::classify::classify) decides
//! which one wins. Property, element and underlying types are referenced
//! through [`TypeRef`] thunks so that self-referential types can be described
//! without building an infinite value.

use std::borrow::Cow;

/// Lazily resolved descriptor of a related type.
///
/// Usually a `Describe::describe` function item, e.g. `<Vec<User> as Describe>::describe`.
pub type TypeRef = fn() -> TypeDescriptor;

/// Refinement of a scalar type, used to pick its json kind, format and example.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Boolean,
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// Any other integer width or signedness.
    Integer,
    /// Floating point or decimal.
    Float,
    String,
    /// Point in time, rendered as an ISO-8601 string.
    Timestamp,
    /// 128-bit unique identifier.
    Uuid,
}

impl ScalarKind {
    /// Whether values of this kind are numbers.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            ScalarKind::Int32 | ScalarKind::Int64 | ScalarKind::Integer | ScalarKind::Float
        )
    }
}

/// A single property of a structured type.
#[derive(Debug, Clone)]
pub struct Property {
    name: Cow<'static, str>,
    ty: TypeRef,
    ignored: bool,
}

impl Property {
    pub fn new(name: impl Into<Cow<'static, str>>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            ignored: false,
        }
    }

    /// Mark the property as excluded from schemas and examples.
    pub fn ignored(mut self) -> Self {
        self.ignored = true;
        self
    }

    /// Raw (unconverted) property identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_ignored(&self) -> bool {
        self.ignored
    }

    /// Resolve the declared type of the property.
    pub fn descriptor(&self) -> TypeDescriptor {
        (self.ty)()
    }
}

/// Read-only description of a type.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    name: Cow<'static, str>,
    generic_args: Vec<TypeDescriptor>,
    underlying: Option<TypeRef>,
    enum_members: Option<Vec<String>>,
    scalar: Option<ScalarKind>,
    sequence: bool,
    element: Option<TypeRef>,
    map_value: Option<TypeRef>,
    properties: Vec<Property>,
}

impl TypeDescriptor {
    /// A type with a name and no other information (opaque until more is added).
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            generic_args: Vec::new(),
            underlying: None,
            enum_members: None,
            scalar: None,
            sequence: false,
            element: None,
            map_value: None,
            properties: Vec::new(),
        }
    }

    /// Descriptor used when nothing is known about a type.
    pub fn unknown() -> Self {
        Self::named("Object")
    }

    pub fn scalar(name: impl Into<Cow<'static, str>>, kind: ScalarKind) -> Self {
        Self::named(name).with_scalar(kind)
    }

    /// A nullable wrapper around `underlying`.
    pub fn nullable(name: impl Into<Cow<'static, str>>, underlying: TypeRef) -> Self {
        let mut ty = Self::named(name);
        ty.underlying = Some(underlying);
        ty
    }

    pub fn enumeration<I, S>(name: impl Into<Cow<'static, str>>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ty = Self::named(name);
        ty.enum_members = Some(members.into_iter().map(Into::into).collect());
        ty
    }

    pub fn sequence(name: impl Into<Cow<'static, str>>, element: TypeRef) -> Self {
        Self::named(name).with_element(element)
    }

    /// A sequence whose element type cannot be determined.
    pub fn untyped_sequence(name: impl Into<Cow<'static, str>>) -> Self {
        let mut ty = Self::named(name);
        ty.sequence = true;
        ty
    }

    /// A string-keyed dictionary with values of type `value`.
    pub fn map(name: impl Into<Cow<'static, str>>, value: TypeRef) -> Self {
        let mut ty = Self::named(name);
        ty.map_value = Some(value);
        ty
    }

    pub fn structured(name: impl Into<Cow<'static, str>>, properties: Vec<Property>) -> Self {
        Self::named(name).with_properties(properties)
    }

    // ── Builders ────────────────────────────────────────────────────────────

    pub fn with_generic_args(mut self, args: Vec<TypeDescriptor>) -> Self {
        self.generic_args = args;
        self
    }

    pub fn with_scalar(mut self, kind: ScalarKind) -> Self {
        self.scalar = Some(kind);
        self
    }

    pub fn with_element(mut self, element: TypeRef) -> Self {
        self.sequence = true;
        self.element = Some(element);
        self
    }

    pub fn with_properties(mut self, properties: Vec<Property>) -> Self {
        self.properties = properties;
        self
    }

    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    // ── Accessors ───────────────────────────────────────────────────────────

    /// Base name, without generic arguments.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registry key for this type.
    ///
    /// Non-generic types use their own name. Generic types append `Of` and
    /// their argument names joined by `And`; an argument that is itself generic
    /// is enclosed in underscores, so `Page<Vec<User>>` becomes
    /// `PageOf_VecOfUser_` and never collides with `Page<Vec, User>`.
    pub fn display_name(&self) -> String {
        if self.generic_args.is_empty() {
            return self.name.to_string();
        }
        let args: Vec<String> = self
            .generic_args
            .iter()
            .map(|arg| {
                let name = arg.display_name();
                if arg.generic_args.is_empty() {
                    name
                } else {
                    format!("_{name}_")
                }
            })
            .collect();
        format!("{}Of{}", self.name, args.join("And"))
    }

    pub fn generic_args(&self) -> &[TypeDescriptor] {
        &self.generic_args
    }

    pub fn is_generic(&self) -> bool {
        !self.generic_args.is_empty()
    }

    pub fn is_nullable(&self) -> bool {
        self.underlying.is_some()
    }

    /// The wrapped type of a nullable wrapper.
    pub fn underlying(&self) -> Option<TypeDescriptor> {
        self.underlying.map(|ty| ty())
    }

    pub fn is_enum(&self) -> bool {
        self.enum_members.is_some()
    }

    pub fn enum_members(&self) -> Option<&[String]> {
        self.enum_members.as_deref()
    }

    pub fn is_scalar(&self) -> bool {
        self.scalar.is_some()
    }

    pub fn scalar_kind(&self) -> Option<ScalarKind> {
        self.scalar
    }

    pub fn is_numeric(&self) -> bool {
        self.scalar.is_some_and(ScalarKind::is_numeric)
    }

    pub fn is_sequence(&self) -> bool {
        self.sequence
    }

    /// Element type of a sequence, if it could be determined.
    pub fn element(&self) -> Option<TypeDescriptor> {
        self.element.map(|ty| ty())
    }

    pub fn is_map(&self) -> bool {
        self.map_value.is_some()
    }

    pub fn map_value(&self) -> Option<TypeDescriptor> {
        self.map_value.map(|ty| ty())
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Whether the type exposes at least one property.
    pub fn is_structured(&self) -> bool {
        !self.properties.is_empty()
    }
}
