//! Stylesheet target family: one descriptor per discovered entry.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{TargetContext, output_file_name};
use crate::descriptor::{BundleDescriptor, Input, OutputSpec, Outputs, TargetFamily};
use crate::pipeline::{Pipeline, StylesheetOptions, TransformStep};
use crate::{Error, Result};

/// Find stylesheet entries under the styles tree.
///
/// An entry is any file, at any depth, whose name starts with the product
/// prefix and carries the stylesheet extension. Paths are returned relative
/// to the project root, sorted lexicographically.
pub fn discover(ctx: &TargetContext<'_>) -> Result<Vec<PathBuf>> {
    let layout = &ctx.config.layout;
    let prefix = ctx.config.project.file_prefix.as_str();
    let extension = layout.stylesheet_extension.trim_start_matches('.');
    let styles_root = layout.styles_root();

    let mut entries = Vec::new();
    for entry in WalkDir::new(&styles_root).sort_by_file_name() {
        let entry = entry.map_err(|source| Error::Discovery {
            root: styles_root.clone(),
            source,
        })?;
        if !entry.file_type().is_file() || !is_entry(entry.path(), prefix, extension) {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(&layout.root)
            .unwrap_or(entry.path())
            .to_path_buf();
        entries.push(relative);
    }

    entries.sort();
    Ok(entries)
}

fn is_entry(path: &Path, prefix: &str, extension: &str) -> bool {
    let name_matches = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with(prefix));
    let extension_matches = path.extension().is_some_and(|ext| ext == extension);
    name_matches && extension_matches
}

/// Build one descriptor per stylesheet entry.
pub fn build(ctx: &TargetContext<'_>, minify: bool) -> Result<Vec<BundleDescriptor>> {
    let css_dir = ctx.config.layout.css_output_dir();

    let descriptors = discover(ctx)?
        .into_iter()
        .map(|input| {
            let stem = input
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or_default();
            let file = css_dir.join(output_file_name(stem, minify, "css"));

            let plugins = Pipeline::new()
                .then(TransformStep::TransformStylesheet(
                    StylesheetOptions::extracted(minify),
                ))
                .finish();

            BundleDescriptor::new(
                TargetFamily::Stylesheet,
                minify,
                Input::Single(input),
                plugins,
                Outputs::Single(OutputSpec::stylesheet(file)),
                ctx.policy(TargetFamily::Stylesheet),
            )
        })
        .collect::<Vec<_>>();

    tracing::debug!(count = descriptors.len(), minify, "stylesheet descriptors built");
    Ok(descriptors)
}
