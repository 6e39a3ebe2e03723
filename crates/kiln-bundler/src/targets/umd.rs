//! Universal-module target family.

use super::{TargetContext, output_file_name};
use crate::descriptor::{BundleDescriptor, Input, OutputSpec, Outputs, TargetFamily};
use crate::pipeline::{Pipeline, TransformStep};

pub fn build(ctx: &TargetContext<'_>, minify: bool) -> BundleDescriptor {
    let layout = &ctx.config.layout;
    let project = &ctx.config.project;
    let file = layout
        .js_output_dir()
        .join(output_file_name(&project.file_prefix, minify, "js"));

    let plugins = Pipeline::new()
        .then(TransformStep::ResolveModules)
        .then_if(minify, || TransformStep::Minify)
        .then(TransformStep::InjectLicenseBanner(ctx.banner.options()))
        .finish();

    BundleDescriptor::new(
        TargetFamily::Umd,
        minify,
        Input::Single(layout.umd_input()),
        plugins,
        Outputs::Single(OutputSpec::umd(file, project.name.clone())),
        ctx.policy(TargetFamily::Umd),
    )
}
