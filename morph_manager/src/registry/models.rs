//! Render model table. Render-side only.

use std::collections::HashMap;

/// Assets the host renderer needs to draw a morph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelInfo {
    pub model: String,
    pub texture: Option<String>,
}

impl ModelInfo {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            texture: None,
        }
    }

    pub fn with_texture(mut self, texture: impl Into<String>) -> Self {
        self.texture = Some(texture.into());
        self
    }
}

/// Morph name to model lookup, filled by factories during client registration.
#[derive(Debug, Clone, Default)]
pub struct ModelManager {
    models: HashMap<String, ModelInfo>,
}

impl ModelManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a model; a later registration for the same morph replaces it.
    pub fn register(&mut self, morph_name: impl Into<String>, info: ModelInfo) {
        self.models.insert(morph_name.into(), info);
    }

    pub fn model(&self, morph_name: &str) -> Option<&ModelInfo> {
        self.models.get(morph_name)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
