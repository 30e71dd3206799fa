//! Recursive schema and example synthesis.
//!
//! [`Synthesizer::synthesize`] walks a [`TypeDescriptor`] and writes every
//! node it resolves into a caller-owned [`SchemaRegistry`]. Scalar, sequence
//! and map nodes carry an example produced by [`Synthesizer::example`], which
//! reuses examples already cached in the registry.
//!
//! Termination:
//! - a property typed exactly as its enclosing type is skipped;
//! - re-entering a type that is still being synthesized yields a
//!   [`SchemaNode::reference`] to it instead of recursing;
//! - recursion deeper than [`Synthesizer::with_max_depth`] yields an opaque
//!   object node. Scalars, enums and cached entries resolve at any depth.
//!   Nodes built around such a fallback are returned but never registered.

mod examples;

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::classify::{classify, Category};
use crate::config::SynthesisOptions;
use crate::descriptor::TypeDescriptor;
use crate::example::{ExampleSource, ExampleValue};
use crate::naming::{NamingConvention, NamingStrategy};
use crate::overrides::OverrideMap;
use crate::registry::SchemaRegistry;
use crate::schema::{scalar_format, SchemaKind, SchemaNode};

/// Default bound on recursion depth.
pub const DEFAULT_MAX_DEPTH: usize = 64;

static NO_OVERRIDES: OverrideMap = OverrideMap::new();

/// Stateful walker producing schema nodes and examples for types.
///
/// A synthesizer is cheap to build and borrows its override map and naming
/// strategy; the registry is passed to each call so the caller decides how
/// long a session lasts.
///
/// ```ignore
/// let mut registry = SchemaRegistry::new();
/// let mut synth = Synthesizer::new().with_naming(&NamingConvention::CamelCase);
/// let user = synth.synthesize(&User::describe(), &mut registry);
/// ```
pub struct Synthesizer<'a> {
    overrides: &'a OverrideMap,
    naming: &'a dyn NamingStrategy,
    defaults: HashMap<String, Arc<SchemaNode>>,
    source: ExampleSource,
    max_depth: usize,
    depth: usize,
    example_depth: usize,
    truncations: usize,
    in_flight: HashSet<String>,
    example_stack: HashSet<String>,
}

impl<'a> Synthesizer<'a> {
    pub fn new() -> Self {
        Self {
            overrides: &NO_OVERRIDES,
            naming: &NamingConvention::Identity,
            defaults: HashMap::new(),
            source: ExampleSource::from_entropy(),
            max_depth: DEFAULT_MAX_DEPTH,
            depth: 0,
            example_depth: 0,
            truncations: 0,
            in_flight: HashSet::new(),
            example_stack: HashSet::new(),
        }
    }

    /// Build a synthesizer from loaded configuration.
    pub fn from_options(options: &'a SynthesisOptions) -> Self {
        let source = match options.seed {
            Some(seed) => ExampleSource::seeded(seed),
            None => ExampleSource::from_entropy(),
        };
        Self::new()
            .with_naming(&options.naming)
            .with_max_depth(options.max_depth)
            .with_source(source)
    }

    pub fn with_overrides(mut self, overrides: &'a OverrideMap) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn with_naming(mut self, naming: &'a dyn NamingStrategy) -> Self {
        self.naming = naming;
        self
    }

    /// Use `schema` verbatim for `ty`.
    ///
    /// Only schemas with a non-empty title are honored; overrides and cached
    /// entries still take precedence.
    pub fn with_default_schema(mut self, ty: &TypeDescriptor, schema: SchemaNode) -> Self {
        self.defaults.insert(ty.display_name(), Arc::new(schema));
        self
    }

    pub fn with_source(mut self, source: ExampleSource) -> Self {
        self.source = source;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.max(1);
        self
    }

    pub fn overrides(&self) -> &OverrideMap {
        self.overrides
    }

    /// Produce the schema node for `ty`, registering it and everything it
    /// references in `registry`.
    pub fn synthesize(&mut self, ty: &TypeDescriptor, registry: &mut SchemaRegistry) -> Arc<SchemaNode> {
        let name = ty.display_name();
        self.resolve(ty, &name, registry, true)
    }

    fn resolve(
        &mut self,
        ty: &TypeDescriptor,
        name: &str,
        registry: &mut SchemaRegistry,
        allow_override: bool,
    ) -> Arc<SchemaNode> {
        if allow_override {
            if let Some(entry) = self.overrides.get_by_name(name) {
                debug!(type_name = %name, substitute = %entry.substitute.name(), "applying schema override");
                let example = entry.example.clone();
                let substitute = entry.substitute.clone();
                let truncations = self.truncations;
                let base = if substitute.display_name() == name {
                    self.resolve(&substitute, name, registry, false)
                } else {
                    self.synthesize(&substitute, registry)
                };
                let node = Arc::new(SchemaNode {
                    example: Some(example),
                    ..(*base).clone()
                });
                if self.truncations == truncations {
                    registry.register(name, Arc::clone(&node));
                }
                return node;
            }
        }

        if let Some(cached) = registry.get(name) {
            trace!(type_name = %name, "schema cache hit");
            return cached;
        }

        if let Some(default) = self.default_schema(name) {
            registry.register(name, Arc::clone(&default));
            return default;
        }

        let category = classify(ty);
        if matches!(category, Category::Scalar | Category::Enum) && !ty.is_generic() {
            let node = Arc::new(self.build(ty, name, category, registry));
            registry.register(name, Arc::clone(&node));
            return node;
        }

        if self.in_flight.contains(name) {
            debug!(type_name = %name, "cycle detected, emitting reference");
            return Arc::new(SchemaNode::reference(name));
        }

        if self.depth >= self.max_depth {
            warn!(type_name = %name, max_depth = self.max_depth, "schema depth limit reached");
            self.truncations += 1;
            return Arc::new(SchemaNode::object());
        }

        let truncations = self.truncations;
        self.in_flight.insert(name.to_string());
        self.depth += 1;

        // Generic arguments are registered first; their nodes are not used here.
        for arg in ty.generic_args() {
            self.synthesize(arg, registry);
        }
        let node = Arc::new(self.build(ty, name, category, registry));

        self.depth -= 1;
        self.in_flight.remove(name);

        if self.truncations == truncations {
            registry.register(name, Arc::clone(&node));
        } else {
            debug!(type_name = %name, "not caching schema truncated by the depth limit");
        }
        node
    }

    fn default_schema(&self, name: &str) -> Option<Arc<SchemaNode>> {
        self.defaults
            .get(name)
            .filter(|schema| schema.title.as_deref().is_some_and(|t| !t.is_empty()))
            .cloned()
    }

    fn build(
        &mut self,
        ty: &TypeDescriptor,
        name: &str,
        category: Category,
        registry: &mut SchemaRegistry,
    ) -> SchemaNode {
        match category {
            Category::Nullable => {
                let underlying = ty.underlying().unwrap_or_else(TypeDescriptor::unknown);
                let inner = self.synthesize(&underlying, registry);
                if inner.is_reference() {
                    // Keywords next to `$ref` are ignored by OpenAPI 3.0.
                    SchemaNode::all_of(vec![inner]).with_nullable()
                } else {
                    SchemaNode {
                        nullable: true,
                        ..(*inner).clone()
                    }
                }
            }
            Category::Enum => {
                let members = ty.enum_members().unwrap_or_default().to_vec();
                SchemaNode::string().with_enum_values(members)
            }
            Category::Scalar => {
                let kind = ty.scalar_kind();
                let mut node = SchemaNode {
                    kind: SchemaKind::for_scalar(kind),
                    format: kind.and_then(scalar_format).map(str::to_string),
                    ..SchemaNode::default()
                };
                node.example = Some(self.example(ty, registry));
                node
            }
            Category::Sequence => {
                let items = match ty.element() {
                    Some(element) => self.synthesize(&element, registry),
                    None => Arc::new(SchemaNode::unconstrained()),
                };
                SchemaNode::array(items).with_example(self.example(ty, registry))
            }
            Category::Map => {
                let value = ty.map_value().unwrap_or_else(TypeDescriptor::unknown);
                let values = self.synthesize(&value, registry);
                SchemaNode::object()
                    .with_additional_properties(values)
                    .with_example(self.example(ty, registry))
            }
            Category::Structured => {
                let mut properties = BTreeMap::new();
                for property in ty.properties() {
                    if property.is_ignored() {
                        continue;
                    }
                    let property_ty = property.descriptor();
                    if property_ty.display_name() == name {
                        trace!(type_name = %name, property = property.name(), "skipping self-referencing property");
                        continue;
                    }
                    let key = self.naming.property_name(property.name(), false);
                    properties.insert(key, self.synthesize(&property_ty, registry));
                }
                SchemaNode::object().with_properties(properties)
            }
            Category::Opaque => SchemaNode::object(),
        }
    }
}

impl Default for Synthesizer<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Synthesize the schema for `ty` in a one-off session.
pub fn synthesize(
    ty: &TypeDescriptor,
    registry: &mut SchemaRegistry,
    overrides: &OverrideMap,
    naming: &dyn NamingStrategy,
) -> Arc<SchemaNode> {
    Synthesizer::new()
        .with_overrides(overrides)
        .with_naming(naming)
        .synthesize(ty, registry)
}

/// Derive an example for `ty`, reusing examples cached in `registry`.
pub fn example(ty: &TypeDescriptor, registry: &SchemaRegistry, overrides: &OverrideMap) -> ExampleValue {
    Synthesizer::new().with_overrides(overrides).example(ty, registry)
}
