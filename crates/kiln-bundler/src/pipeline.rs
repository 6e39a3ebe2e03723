//! Typed transform pipeline.
//!
//! Every stage is a capability request with explicit parameters. The engine
//! maps each capability to its own implementation; the core only decides
//! which stages run and in what order. Line-ending normalization is the one
//! stage whose hook lives in this crate, see [`TransformStep::output_hook`].

use serde::{Deserialize, Serialize};

use crate::eol::EolNormalizer;
use crate::hooks::OutputHook;

static EOL_NORMALIZER: EolNormalizer = EolNormalizer;

/// Capability identifier of a pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    ResolveModules,
    TransformStylesheet,
    Minify,
    InjectLicenseBanner,
    NormalizeEol,
}

/// Parameters of the stylesheet transformer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StylesheetOptions {
    /// Scope class names (CSS modules)
    pub modules: bool,
    /// Emit a standalone stylesheet instead of injecting it
    pub extract: bool,
    pub minimize: bool,
    pub source_map: bool,
    /// Post-processors run by the transformer after compilation
    #[serde(default)]
    pub postprocessors: Vec<String>,
}

impl StylesheetOptions {
    pub fn extracted(minimize: bool) -> Self {
        Self {
            modules: false,
            extract: true,
            minimize,
            source_map: true,
            postprocessors: vec!["postcss-prettify".to_string()],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentStyle {
    /// Banner content is emitted verbatim
    #[default]
    None,
    Regular,
    Ignored,
}

/// Parameters of the license-banner renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannerOptions {
    pub comment_style: CommentStyle,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "capability", rename_all = "kebab-case")]
pub enum TransformStep {
    ResolveModules,
    TransformStylesheet(StylesheetOptions),
    Minify,
    InjectLicenseBanner(BannerOptions),
    NormalizeEol,
}

impl TransformStep {
    pub fn capability(&self) -> Capability {
        match self {
            TransformStep::ResolveModules => Capability::ResolveModules,
            TransformStep::TransformStylesheet(_) => Capability::TransformStylesheet,
            TransformStep::Minify => Capability::Minify,
            TransformStep::InjectLicenseBanner(_) => Capability::InjectLicenseBanner,
            TransformStep::NormalizeEol => Capability::NormalizeEol,
        }
    }

    /// Output hook implemented in-core for this stage, if any.
    pub fn output_hook(&self) -> Option<&'static dyn OutputHook> {
        match self {
            TransformStep::NormalizeEol => Some(&EOL_NORMALIZER),
            _ => None,
        }
    }
}

/// Ordered stage list under construction.
///
/// Stages are appended explicitly; optional stages are simply not appended.
/// [`Pipeline::finish`] always terminates the list with line-ending
/// normalization.
#[derive(Debug, Default)]
pub(crate) struct Pipeline {
    steps: Vec<TransformStep>,
}

impl Pipeline {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn then(mut self, step: TransformStep) -> Self {
        debug_assert_ne!(step, TransformStep::NormalizeEol);
        self.steps.push(step);
        self
    }

    pub(crate) fn then_if(self, condition: bool, step: impl FnOnce() -> TransformStep) -> Self {
        if condition { self.then(step()) } else { self }
    }

    pub(crate) fn finish(mut self) -> Vec<TransformStep> {
        self.steps.push(TransformStep::NormalizeEol);
        self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn finish_appends_terminal_normalizer() {
        let steps = Pipeline::new().then(TransformStep::ResolveModules).finish();
        assert_eq!(
            steps,
            vec![TransformStep::ResolveModules, TransformStep::NormalizeEol]
        );
    }

    #[test]
    fn skipped_conditional_step_leaves_no_placeholder() {
        let steps = Pipeline::new()
            .then(TransformStep::ResolveModules)
            .then_if(false, || TransformStep::Minify)
            .finish();
        assert_eq!(steps.len(), 2);
        assert!(!steps.contains(&TransformStep::Minify));
    }

    #[test]
    fn steps_serialize_with_capability_tag() {
        let value = serde_json::to_value(TransformStep::TransformStylesheet(
            StylesheetOptions::extracted(true),
        ))
        .unwrap();
        assert_eq!(value["capability"], json!("transform-stylesheet"));
        assert_eq!(value["minimize"], json!(true));
        assert_eq!(value["modules"], json!(false));
        assert_eq!(value["postprocessors"], json!(["postcss-prettify"]));

        let value = serde_json::to_value(TransformStep::NormalizeEol).unwrap();
        assert_eq!(value, json!({ "capability": "normalize-eol" }));
    }

    #[test]
    fn only_normalizer_exposes_a_hook() {
        assert!(TransformStep::NormalizeEol.output_hook().is_some());
        assert!(TransformStep::Minify.output_hook().is_none());
        assert!(TransformStep::ResolveModules.output_hook().is_none());
    }
}
