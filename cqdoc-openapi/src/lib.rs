mod components;
mod document;
mod handler;
mod published;

pub use components::{render_components, render_schema, schema_ref};
pub use document::{ApiDocument, DocumentBuilder, DocumentConfig, OperationDoc, OPENAPI_VERSION};
pub use handler::{merge_metadata, EndpointMetadata, HandlerInfo, Metadata};
pub use published::PublishedDocs;
