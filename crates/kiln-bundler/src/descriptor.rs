//! Bundle descriptors handed to the external bundling engine.
//!
//! A descriptor is built once per invocation and never mutated afterwards:
//! its fields are private and only readable through accessors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::pipeline::{Capability, TransformStep};
use crate::warnings::WarningPolicy;

/// Output group a descriptor belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetFamily {
    Stylesheet,
    Esm,
    Umd,
}

impl fmt::Display for TargetFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TargetFamily::Stylesheet => "stylesheet",
            TargetFamily::Esm => "esm",
            TargetFamily::Umd => "umd",
        })
    }
}

/// Artifact format the engine emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Extracted standalone stylesheet
    RawCss,
    /// ECMAScript module
    Esm,
    /// Universal module definition
    Umd,
}

/// Export mode of a script artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportMode {
    Named,
    Default,
    None,
}

/// Entry point(s) of a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Input {
    Single(PathBuf),
    Many(Vec<PathBuf>),
}

impl Input {
    pub fn paths(&self) -> &[PathBuf] {
        match self {
            Input::Single(path) => std::slice::from_ref(path),
            Input::Many(paths) => paths,
        }
    }
}

/// One emitted file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSpec {
    pub file: PathBuf,
    pub format: OutputFormat,
    pub exports: ExportMode,
    /// Global name for universal-module output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Whether the engine marks the output with an `__esModule` flag
    pub es_module: bool,
    pub sourcemap: bool,
}

impl OutputSpec {
    pub fn stylesheet(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            format: OutputFormat::RawCss,
            exports: ExportMode::None,
            name: None,
            es_module: false,
            sourcemap: true,
        }
    }

    pub fn esm(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            format: OutputFormat::Esm,
            exports: ExportMode::Named,
            name: None,
            es_module: false,
            sourcemap: true,
        }
    }

    pub fn umd(file: impl Into<PathBuf>, global: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            format: OutputFormat::Umd,
            exports: ExportMode::Default,
            name: Some(global.into()),
            es_module: false,
            sourcemap: true,
        }
    }

    /// Extension of the emitted file, if any.
    pub fn extension(&self) -> Option<&str> {
        self.file.extension().and_then(|ext| ext.to_str())
    }
}

/// Single output or a set of outputs sharing the same generated content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Outputs {
    Single(OutputSpec),
    Multiple(Vec<OutputSpec>),
}

impl Outputs {
    pub fn as_slice(&self) -> &[OutputSpec] {
        match self {
            Outputs::Single(spec) => std::slice::from_ref(spec),
            Outputs::Multiple(specs) => specs,
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    pub fn files(&self) -> impl Iterator<Item = &Path> {
        self.as_slice().iter().map(|spec| spec.file.as_path())
    }
}

/// Declarative instruction set for one engine run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BundleDescriptor {
    family: TargetFamily,
    minified: bool,
    input: Input,
    plugins: Vec<TransformStep>,
    output: Outputs,
    warning_policy: WarningPolicy,
}

impl BundleDescriptor {
    pub(crate) fn new(
        family: TargetFamily,
        minified: bool,
        input: Input,
        plugins: Vec<TransformStep>,
        output: Outputs,
        warning_policy: WarningPolicy,
    ) -> Self {
        debug_assert_eq!(
            plugins.last(),
            Some(&TransformStep::NormalizeEol),
            "line-ending normalization must be the terminal stage"
        );
        Self {
            family,
            minified,
            input,
            plugins,
            output,
            warning_policy,
        }
    }

    pub fn family(&self) -> TargetFamily {
        self.family
    }

    pub fn is_minified(&self) -> bool {
        self.minified
    }

    pub fn input(&self) -> &Input {
        &self.input
    }

    /// Pipeline stages in execution order.
    pub fn plugins(&self) -> &[TransformStep] {
        &self.plugins
    }

    pub fn capabilities(&self) -> Vec<Capability> {
        self.plugins.iter().map(TransformStep::capability).collect()
    }

    pub fn output(&self) -> &Outputs {
        &self.output
    }

    pub fn warning_policy(&self) -> &WarningPolicy {
        &self.warning_policy
    }
}
