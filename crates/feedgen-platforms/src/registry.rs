//! Platform code → schema registry.

use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use feedgen_model::{FeedError, PlatformSchema, Result};

/// Registry of destination schemas, keyed by platform code.
///
/// Schemas are registered once and shared read-only; an unknown code on
/// lookup is a configuration error.
#[derive(Debug, Default)]
pub struct PlatformRegistry {
    platforms: BTreeMap<String, Arc<PlatformSchema>>,
}

impl PlatformRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with every built-in destination.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(crate::google::schema());
        registry.register(crate::facebook::schema());
        registry.register(crate::bing::schema());
        registry.register(crate::pinterest::schema());
        registry.register(crate::idealo::schema());
        registry.register(crate::trovaprezzi::schema());
        registry.register(crate::openai::schema());
        registry.register(crate::google_local::schema());
        registry.register(crate::custom::schema());
        registry
    }

    /// Registers a schema under its code, replacing any previous entry.
    pub fn register(&mut self, schema: PlatformSchema) {
        self.platforms.insert(schema.code.clone(), Arc::new(schema));
    }

    pub fn get(&self, code: &str) -> Result<Arc<PlatformSchema>> {
        self.platforms
            .get(code)
            .cloned()
            .ok_or_else(|| FeedError::UnknownPlatform {
                code: code.to_string(),
            })
    }

    /// Registered platform codes, sorted.
    #[must_use]
    pub fn codes(&self) -> Vec<&str> {
        self.platforms.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<PlatformSchema>> {
        self.platforms.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }
}

static DEFAULT_REGISTRY: OnceLock<PlatformRegistry> = OnceLock::new();

/// Process-wide registry holding the built-in destinations.
#[must_use]
pub fn default_registry() -> &'static PlatformRegistry {
    DEFAULT_REGISTRY.get_or_init(PlatformRegistry::with_defaults)
}
