pub mod config;
pub mod discovery;
pub mod error;
pub mod layout;
pub mod project;
pub mod settings;
pub mod validation;
pub mod warnings;

mod helpers;

// Re-export main types
pub use config::*;
pub use error::*;
pub use layout::LayoutOptions;
pub use project::ProjectOptions;
pub use settings::GlobalSettings;
pub use warnings::WarningOptions;

// Re-export discovery and validation
pub use discovery::{ConfigDiscovery, ConfigSource, discover};
pub use validation::{ConfigValidator, FsValidator, SchemaValidator};
