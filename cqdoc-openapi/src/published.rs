use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use crate::document::{ApiDocument, DocumentBuilder};

/// Shared handle to the currently served documentation.
///
/// Readers get an `Arc` snapshot that stays valid for as long as they hold
/// it. A rebuild produces a complete new document first and only then swaps
/// it in, so readers never observe a half-built registry.
#[derive(Debug, Clone)]
pub struct PublishedDocs {
    current: Arc<RwLock<Arc<ApiDocument>>>,
}

impl PublishedDocs {
    pub fn new(document: ApiDocument) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(document))),
        }
    }

    /// Build `builder` and publish the result.
    pub fn build(builder: &DocumentBuilder) -> Self {
        Self::new(builder.build())
    }

    /// Snapshot of the published document.
    pub fn current(&self) -> Arc<ApiDocument> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Replace the published document, returning the previous one.
    pub fn publish(&self, document: ApiDocument) -> Arc<ApiDocument> {
        let next = Arc::new(document);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, next)
    }

    /// Rebuild from `builder` outside the lock, then swap the result in.
    pub fn rebuild(&self, builder: &DocumentBuilder) -> Arc<ApiDocument> {
        let document = builder.build();
        debug!(schemas = document.registry.len(), "publishing rebuilt documentation");
        self.publish(document);
        self.current()
    }
}
