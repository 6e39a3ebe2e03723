use clap::ValueEnum;
use kiln_bundler::TargetFamily;

/// Target family selectable on the command line
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum Family {
    /// Stylesheets: allowlist only
    #[value(name = "stylesheet", alias = "css")]
    Stylesheet,

    /// ES module: allowlist plus circular-dependency exception
    #[value(name = "esm")]
    Esm,

    /// Universal module: same policy as esm
    #[value(name = "umd")]
    Umd,
}

impl From<Family> for TargetFamily {
    fn from(family: Family) -> Self {
        match family {
            Family::Stylesheet => TargetFamily::Stylesheet,
            Family::Esm => TargetFamily::Esm,
            Family::Umd => TargetFamily::Umd,
        }
    }
}
