use cqdoc_core::{
    ConfigError, DocConfig, ExampleValue, OverrideMap, SchemaRegistry, SynthesisOptions,
    Synthesizer, TypeDescriptor,
};
use serde_json::{json, Map, Value};
use tracing::info;

use crate::components::render_components;
use crate::handler::{EndpointMetadata, HandlerInfo};

/// OpenAPI version written into rendered documents.
pub const OPENAPI_VERSION: &str = "3.0.3";

/// Document-level information.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentConfig {
    pub title: String,
    pub version: String,
    pub description: Option<String>,
}

impl DocumentConfig {
    pub fn new(title: &str, version: &str) -> Self {
        Self {
            title: title.to_string(),
            version: version.to_string(),
            description: None,
        }
    }

    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Read `cqdoc.document.*`, defaulting to `API` version `0.1.0`.
    pub fn from_config(config: &DocConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            title: config.get_opt("cqdoc.document.title")?.unwrap_or_else(|| "API".to_string()),
            version: config
                .get_opt("cqdoc.document.version")?
                .unwrap_or_else(|| "0.1.0".to_string()),
            description: config.get_opt("cqdoc.document.description")?,
        })
    }
}

/// Documentation of one handler: the registry names and examples of its
/// argument and return types.
#[derive(Debug, Clone)]
pub struct OperationDoc {
    pub operation_id: String,
    pub resource: String,
    pub key: String,
    pub arguments: Vec<String>,
    pub argument_examples: Vec<ExampleValue>,
    pub response: Option<String>,
    pub response_example: Option<ExampleValue>,
    pub metadata: EndpointMetadata,
}

/// A fully built documentation snapshot.
#[derive(Debug, Clone)]
pub struct ApiDocument {
    pub config: DocumentConfig,
    pub registry: SchemaRegistry,
    pub operations: Vec<OperationDoc>,
}

impl ApiDocument {
    pub fn operation(&self, operation_id: &str) -> Option<&OperationDoc> {
        self.operations.iter().find(|op| op.operation_id == operation_id)
    }

    /// Render the document info and reusable schemas as OpenAPI JSON.
    pub fn to_json(&self) -> Value {
        let mut info = Map::new();
        info.insert("title".into(), json!(self.config.title));
        info.insert("version".into(), json!(self.config.version));
        if let Some(ref description) = self.config.description {
            info.insert("description".into(), json!(description));
        }

        json!({
            "openapi": OPENAPI_VERSION,
            "info": info,
            "components": render_components(&self.registry),
        })
    }
}

/// Collects handlers and builds an [`ApiDocument`] from them.
///
/// Every build synthesizes into a fresh registry, so building never disturbs
/// a document that is already published.
///
/// ```ignore
/// let builder = DocumentBuilder::new(DocumentConfig::new("Orders", "1.0.0"))
///     .handler(HandlerInfo::new("orders", "post").with_argument(CreateOrder::describe()));
/// let doc = builder.build();
/// ```
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    config: DocumentConfig,
    options: SynthesisOptions,
    overrides: OverrideMap,
    handlers: Vec<HandlerInfo>,
}

impl DocumentBuilder {
    pub fn new(config: DocumentConfig) -> Self {
        Self {
            config,
            options: SynthesisOptions::default(),
            overrides: OverrideMap::new(),
            handlers: Vec::new(),
        }
    }

    /// Build from `cqdoc.document.*` and `cqdoc.synthesis.*` settings.
    pub fn from_config(config: &DocConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(DocumentConfig::from_config(config)?).with_options(config.synthesis()?))
    }

    pub fn with_options(mut self, options: SynthesisOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_overrides(mut self, overrides: OverrideMap) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn handler(mut self, handler: HandlerInfo) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn handlers(&self) -> &[HandlerInfo] {
        &self.handlers
    }

    pub fn build(&self) -> ApiDocument {
        let mut registry = SchemaRegistry::new();
        let mut synth = Synthesizer::from_options(&self.options).with_overrides(&self.overrides);

        let operations = self
            .handlers
            .iter()
            .map(|handler| document_handler(&mut synth, &mut registry, handler))
            .collect();

        info!(
            handlers = self.handlers.len(),
            schemas = registry.len(),
            "built API documentation"
        );

        ApiDocument {
            config: self.config.clone(),
            registry,
            operations,
        }
    }
}

fn document_handler(
    synth: &mut Synthesizer<'_>,
    registry: &mut SchemaRegistry,
    handler: &HandlerInfo,
) -> OperationDoc {
    let mut arguments = Vec::with_capacity(handler.argument_types.len());
    let mut argument_examples = Vec::with_capacity(handler.argument_types.len());
    for ty in &handler.argument_types {
        let (name, example) = document_type(synth, registry, ty);
        arguments.push(name);
        argument_examples.push(example);
    }

    let (response, response_example) = match handler.return_type {
        Some(ref ty) => {
            let (name, example) = document_type(synth, registry, ty);
            (Some(name), Some(example))
        }
        None => (None, None),
    };

    OperationDoc {
        operation_id: handler.operation_id(),
        resource: handler.resource.clone(),
        key: handler.key.clone(),
        arguments,
        argument_examples,
        response,
        response_example,
        metadata: handler.attributes.iter().cloned().collect(),
    }
}

fn document_type(
    synth: &mut Synthesizer<'_>,
    registry: &mut SchemaRegistry,
    ty: &TypeDescriptor,
) -> (String, ExampleValue) {
    synth.synthesize(ty, registry);
    let example = synth.example(ty, registry);
    (ty.display_name(), example)
}
