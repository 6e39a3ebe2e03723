//! Shared test utilities for kiln-bundler tests

#![allow(dead_code)]

use kiln_bundler::{BuildMode, BundleDescriptor, Orchestrator, TargetFamily};
use kiln_config::KilnConfig;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const VERSION: &str = "6.3.1";

/// Stylesheet entries created by [`library_project`], in discovery order.
pub const STYLESHEETS: [&str; 3] = [
    "src/scss/tabulator.scss",
    "src/scss/themes/tabulator_midnight.scss",
    "src/scss/themes/tabulator_simple.scss",
];

/// Create a scratch checkout with the layout a release build expects.
pub fn library_project() -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    let root = dir.path();

    // Written out of order to make sure discovery sorts.
    write(root, "src/scss/themes/tabulator_simple.scss", ".tabulator{}\n");
    write(root, "src/scss/tabulator.scss", "@import 'variables';\n");
    write(root, "src/scss/themes/tabulator_midnight.scss", ".tabulator{}\n");
    write(root, "src/scss/_variables.scss", "$a: 1;\n");
    write(root, "src/scss/themes/bootstrap/variables.scss", "$b: 2;\n");

    write(root, "src/js/builds/esm.js", "export * from '../core/Tabulator.js';\n");
    write(root, "src/js/builds/usd.js", "export default {};\n");
    write(
        root,
        "src/js/builds/jquery_wrapper.js",
        "(function(){\r\n  'use strict';\r\n})();\r\n",
    );

    dir
}

pub fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().expect("parent")).expect("create dirs");
    fs::write(path, content).expect("write fixture");
}

pub fn orchestrator(root: &Path) -> Orchestrator {
    Orchestrator::new(KilnConfig::rooted(root), VERSION).expect("orchestrator")
}

pub fn generate(root: &Path, env: Option<&str>) -> Vec<BundleDescriptor> {
    orchestrator(root)
        .bundle(BuildMode::from_env(env))
        .expect("descriptors")
}

pub fn families(descriptors: &[BundleDescriptor]) -> Vec<(TargetFamily, bool)> {
    descriptors
        .iter()
        .map(|d| (d.family(), d.is_minified()))
        .collect()
}
