//! Filesystem layout of the library checkout.
//!
//! All paths except `root` are relative to the project root. Descriptors carry
//! the relative forms; only the filesystem helpers join them onto `root`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::helpers::{
    default_builds_dir, default_css_subdir, default_dist_dir, default_esm_entry,
    default_js_subdir, default_root, default_styles_dir, default_stylesheet_extension,
    default_umd_entry, default_wrappers,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutOptions {
    /// Project root every other path is resolved against
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Source tree searched for stylesheet entries
    #[serde(default = "default_styles_dir")]
    pub styles_dir: PathBuf,

    /// Extension of stylesheet sources, without the leading dot
    #[serde(default = "default_stylesheet_extension")]
    pub stylesheet_extension: String,

    /// Directory holding the JS build manifests and wrapper sources
    #[serde(default = "default_builds_dir")]
    pub builds_dir: PathBuf,

    /// ES-module entry file name inside `builds_dir`
    #[serde(default = "default_esm_entry")]
    pub esm_entry: String,

    /// Universal-module entry file name inside `builds_dir`
    #[serde(default = "default_umd_entry")]
    pub umd_entry: String,

    /// Static adapter files copied verbatim from `builds_dir`
    #[serde(default = "default_wrappers")]
    pub wrappers: Vec<String>,

    /// Output root
    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,

    #[serde(default = "default_css_subdir")]
    pub css_subdir: String,

    #[serde(default = "default_js_subdir")]
    pub js_subdir: String,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            root: default_root(),
            styles_dir: default_styles_dir(),
            stylesheet_extension: default_stylesheet_extension(),
            builds_dir: default_builds_dir(),
            esm_entry: default_esm_entry(),
            umd_entry: default_umd_entry(),
            wrappers: default_wrappers(),
            dist_dir: default_dist_dir(),
            css_subdir: default_css_subdir(),
            js_subdir: default_js_subdir(),
        }
    }
}

impl LayoutOptions {
    /// Resolve a root-relative path against the project root.
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    /// Absolute location of the stylesheet source tree.
    pub fn styles_root(&self) -> PathBuf {
        self.resolve(&self.styles_dir)
    }

    /// Absolute location of the output root.
    pub fn dist_root(&self) -> PathBuf {
        self.resolve(&self.dist_dir)
    }

    pub fn esm_input(&self) -> PathBuf {
        self.builds_dir.join(&self.esm_entry)
    }

    pub fn umd_input(&self) -> PathBuf {
        self.builds_dir.join(&self.umd_entry)
    }

    /// Root-relative directory receiving stylesheet artifacts.
    pub fn css_output_dir(&self) -> PathBuf {
        self.dist_dir.join(&self.css_subdir)
    }

    /// Root-relative directory receiving script artifacts.
    pub fn js_output_dir(&self) -> PathBuf {
        self.dist_dir.join(&self.js_subdir)
    }

    /// Absolute source path of a wrapper file.
    pub fn wrapper_source(&self, file: &str) -> PathBuf {
        self.resolve(self.builds_dir.join(file))
    }

    /// Absolute destination path of a wrapper file.
    pub fn wrapper_target(&self, file: &str) -> PathBuf {
        self.resolve(self.js_output_dir().join(file))
    }
}
