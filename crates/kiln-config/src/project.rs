use serde::{Deserialize, Serialize};

use crate::helpers::{default_author, default_file_prefix, default_product_name};

/// Identity of the library being packaged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectOptions {
    /// Product name, used as the UMD global and in the license banner
    #[serde(default = "default_product_name")]
    pub name: String,

    /// Copyright holder shown in the license banner
    #[serde(default = "default_author")]
    pub author: String,

    /// Prefix shared by stylesheet entries and JS output file names
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
}

impl Default for ProjectOptions {
    fn default() -> Self {
        Self {
            name: default_product_name(),
            author: default_author(),
            file_prefix: default_file_prefix(),
        }
    }
}
