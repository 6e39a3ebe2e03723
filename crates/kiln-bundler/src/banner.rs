//! License banner attached to script targets.

use kiln_config::ProjectOptions;
use semver::Version;

use crate::pipeline::{BannerOptions, CommentStyle};
use crate::{Error, Result};

/// Year placeholder expanded by the license-banner renderer at build time.
pub const YEAR_PLACEHOLDER: &str = "<%= moment().format('YYYY') %>";

/// Validated release version plus the banner derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionBanner {
    version: Version,
    content: String,
}

impl VersionBanner {
    /// Parse `version` as a semantic version and render the banner.
    ///
    /// ```
    /// use kiln_bundler::VersionBanner;
    /// use kiln_config::ProjectOptions;
    ///
    /// let banner = VersionBanner::new("6.3.0", &ProjectOptions::default()).unwrap();
    /// assert!(banner.content().starts_with("/* Tabulator v6.3.0 (c) Oliver Folkerd"));
    /// ```
    pub fn new(version: &str, project: &ProjectOptions) -> Result<Self> {
        let version = Version::parse(version.trim()).map_err(|source| Error::InvalidVersion {
            version: version.to_string(),
            source,
        })?;

        let content = format!(
            "/* {} v{} (c) {} {} */",
            project.name, version, project.author, YEAR_PLACEHOLDER
        );

        Ok(Self { version, content })
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub(crate) fn options(&self) -> BannerOptions {
        BannerOptions {
            comment_style: CommentStyle::None,
            content: self.content.clone(),
        }
    }
}
