//! cqdoc: schema and example synthesis for API documentation.
//!
//! This facade crate re-exports the cqdoc sub-crates through a single
//! dependency with feature flags:
//!
//! ```ignore
//! use cqdoc::prelude::*;
//!
//! #[derive(Describe)]
//! struct User { name: String, age: i32, tags: Vec<String> }
//!
//! let mut registry = SchemaRegistry::new();
//! let user = Synthesizer::new().synthesize(&User::describe(), &mut registry);
//! ```
//!
//! # Feature flags
//!
//! | Feature   | Default | Crate           |
//! |-----------|---------|-----------------|
//! | `openapi` | **yes** | `cqdoc-openapi` |

// The derive emits `::cqdoc::...` paths when the facade is a dependency,
// including inside this crate's own tests.
extern crate self as cqdoc;

pub extern crate cqdoc_core;
pub extern crate cqdoc_macros;

// Re-export everything from cqdoc-core at the top level for convenience.
pub use cqdoc_core::*;

#[cfg(feature = "openapi")]
pub use cqdoc_openapi;
