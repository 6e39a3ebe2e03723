//! ES-module target family: one descriptor, two extensions.

use super::{TargetContext, output_file_name};
use crate::descriptor::{BundleDescriptor, Input, OutputSpec, Outputs, TargetFamily};
use crate::pipeline::{Pipeline, TransformStep};

/// Extensions emitted for the same generated module.
pub const EXTENSIONS: [&str; 2] = ["js", "mjs"];

pub fn build(ctx: &TargetContext<'_>, minify: bool) -> BundleDescriptor {
    let layout = &ctx.config.layout;
    let base = format!("{}_esm", ctx.config.project.file_prefix);
    let js_dir = layout.js_output_dir();

    let plugins = Pipeline::new()
        .then(TransformStep::ResolveModules)
        .then_if(minify, || TransformStep::Minify)
        .then(TransformStep::InjectLicenseBanner(ctx.banner.options()))
        .finish();

    let outputs = EXTENSIONS
        .iter()
        .map(|ext| OutputSpec::esm(js_dir.join(output_file_name(&base, minify, ext))))
        .collect();

    BundleDescriptor::new(
        TargetFamily::Esm,
        minify,
        Input::Single(layout.esm_input()),
        plugins,
        Outputs::Multiple(outputs),
        ctx.policy(TargetFamily::Esm),
    )
}
