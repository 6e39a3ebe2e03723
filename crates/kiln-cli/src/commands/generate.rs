//! `kiln generate`: print the descriptor list as JSON.

use std::fs;
use std::io::Write;

use kiln_bundler::{BuildMode, BundleDescriptor, Orchestrator};
use kiln_config::KilnConfig;

use crate::cli::GenerateArgs;
use crate::error::{Result, ResultExt};

pub fn execute(args: GenerateArgs, config: KilnConfig) -> Result<()> {
    let mode = BuildMode::from_env(args.env.as_deref());
    let descriptors = Orchestrator::new(config, &args.version)?.bundle(mode)?;

    let json = render(&descriptors, args.pretty)?;
    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).with_path(parent)?;
            }
            fs::write(path, json).with_path(path)?;
            tracing::info!(
                count = descriptors.len(),
                path = %path.display(),
                "descriptors written"
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

/// Serialize descriptors with a trailing newline.
pub fn render(descriptors: &[BundleDescriptor], pretty: bool) -> Result<String> {
    let mut json = if pretty {
        serde_json::to_string_pretty(descriptors)?
    } else {
        serde_json::to_string(descriptors)?
    };
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_list() {
        assert_eq!(render(&[], false).unwrap(), "[]\n");
        assert_eq!(render(&[], true).unwrap(), "[]\n");
    }
}
