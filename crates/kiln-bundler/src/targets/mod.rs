//! Target builders.
//!
//! Each builder is a pure function of the [`TargetContext`] and the minify
//! flag, returning its own descriptors. The dispatcher concatenates them.

pub mod esm;
pub mod stylesheet;
pub mod umd;

use kiln_config::KilnConfig;

use crate::banner::VersionBanner;
use crate::descriptor::TargetFamily;
use crate::warnings::WarningPolicy;

/// Read-only inputs shared by all builders during one invocation.
#[derive(Debug, Clone, Copy)]
pub struct TargetContext<'a> {
    pub config: &'a KilnConfig,
    pub banner: &'a VersionBanner,
}

impl<'a> TargetContext<'a> {
    pub fn new(config: &'a KilnConfig, banner: &'a VersionBanner) -> Self {
        Self { config, banner }
    }

    pub(crate) fn policy(&self, family: TargetFamily) -> WarningPolicy {
        WarningPolicy::for_family(family, &self.config.warnings)
    }
}

/// `<base>[.min].<ext>`
pub(crate) fn output_file_name(base: &str, minify: bool, extension: &str) -> String {
    if minify {
        format!("{base}.min.{extension}")
    } else {
        format!("{base}.{extension}")
    }
}
