use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Warning suppression table.
///
/// Only boolean entries are expressible in configuration files; predicate
/// policies are attached programmatically by the bundler crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningOptions {
    /// Exact warning codes mapped to whether they are suppressed
    #[serde(default = "default_ignored_codes")]
    pub ignored_codes: IndexMap<String, bool>,

    /// Importer file-name fragments whose warnings are dropped on JS targets
    #[serde(default = "default_circular_exceptions")]
    pub circular_exceptions: Vec<String>,
}

impl Default for WarningOptions {
    fn default() -> Self {
        Self {
            ignored_codes: default_ignored_codes(),
            circular_exceptions: default_circular_exceptions(),
        }
    }
}

fn default_ignored_codes() -> IndexMap<String, bool> {
    let mut codes = IndexMap::new();
    codes.insert("FILE_NAME_CONFLICT".to_string(), true);
    codes
}

fn default_circular_exceptions() -> Vec<String> {
    vec!["Column.js".to_string(), "Tabulator.js".to_string()]
}
