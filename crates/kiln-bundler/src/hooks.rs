//! Output artifacts and the hook interface the engine calls once a
//! descriptor's artifact set is materialized.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// Generated code
    Chunk,
    /// Emitted file such as a stylesheet or source map
    Asset,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactContent {
    Text(String),
    Binary(Vec<u8>),
}

impl ArtifactContent {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ArtifactContent::Text(text) => Some(text),
            ArtifactContent::Binary(_) => None,
        }
    }
}

/// A generated file as seen by output hooks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputArtifact {
    pub file_name: String,
    pub kind: ArtifactKind,
    pub content: ArtifactContent,
}

impl OutputArtifact {
    pub fn chunk(file_name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            kind: ArtifactKind::Chunk,
            content: ArtifactContent::Text(code.into()),
        }
    }

    pub fn text_asset(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            kind: ArtifactKind::Asset,
            content: ArtifactContent::Text(source.into()),
        }
    }

    pub fn binary_asset(file_name: impl Into<String>, source: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            kind: ArtifactKind::Asset,
            content: ArtifactContent::Binary(source),
        }
    }
}

/// Post-generation hook over the full artifact set of one descriptor.
pub trait OutputHook: Send + Sync {
    fn name(&self) -> &'static str;

    fn generate_bundle(&self, artifacts: &mut [OutputArtifact]);
}
