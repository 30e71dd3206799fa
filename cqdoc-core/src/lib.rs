//! Type descriptors and the recursive schema/example synthesizer.
//!
//! Describe a type (usually with `#[derive(Describe)]`), hand it to a
//! [`Synthesizer`] together with a [`SchemaRegistry`], and read back the
//! registered schema nodes with their examples.

extern crate self as cqdoc_core;

pub mod classify;
pub mod config;
pub mod describe;
pub mod descriptor;
pub mod example;
pub mod logging;
pub mod naming;
pub mod overrides;
pub mod registry;
pub mod schema;
pub mod synth;

pub use classify::{classify, Category};
pub use config::{ConfigError, ConfigValue, DocConfig, FromConfigValue, SynthesisOptions};
pub use describe::Describe;
pub use descriptor::{Property, ScalarKind, TypeDescriptor, TypeRef};
pub use example::{ExampleSource, ExampleValue};
pub use logging::init_tracing;
pub use naming::{NamingConvention, NamingStrategy};
pub use overrides::{OverrideEntry, OverrideMap};
pub use registry::SchemaRegistry;
pub use schema::{json_type_name, scalar_format, SchemaKind, SchemaNode, COMPONENTS_REF_PREFIX};
pub use synth::{example, synthesize, Synthesizer, DEFAULT_MAX_DEPTH};

/// Derive [`Describe`] for a struct or unit enum.
pub use cqdoc_macros::Describe;

pub mod prelude {
    pub use crate::{
        Describe, ExampleValue, NamingConvention, OverrideMap, SchemaNode, SchemaRegistry,
        Synthesizer, TypeDescriptor,
    };
}
