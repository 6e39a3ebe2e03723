//! Synchronous filesystem chores of a release build.
//!
//! Both operations are fatal on failure; errors carry the offending path.

use std::fs;
use std::path::{Path, PathBuf};

use kiln_config::LayoutOptions;

use crate::eol::normalize_eol;
use crate::{Error, Result};

/// Attach a path to I/O errors.
pub(crate) trait IoResultExt<T> {
    fn with_path(self, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|source| Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        })
    }
}

/// Empty `dir`, creating it first when it does not exist.
///
/// The directory itself is kept; everything inside it is removed. Calling
/// this repeatedly is harmless.
pub fn clear_dist(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_path(dir)?;

    for entry in fs::read_dir(dir).with_path(dir)? {
        let entry = entry.with_path(dir)?;
        let path = entry.path();
        let file_type = entry.file_type().with_path(&path)?;

        if file_type.is_dir() {
            fs::remove_dir_all(&path).with_path(&path)?;
        } else {
            fs::remove_file(&path).with_path(&path)?;
        }
    }

    tracing::debug!(dir = %dir.display(), "output directory cleared");
    Ok(())
}

/// Copy every configured wrapper into the script output directory with
/// line endings normalized. Returns the written paths in list order.
pub fn copy_wrappers(layout: &LayoutOptions) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(layout.wrappers.len());

    for wrapper in &layout.wrappers {
        let source = layout.wrapper_source(wrapper);
        let target = layout.wrapper_target(wrapper);

        let content = fs::read_to_string(&source).with_path(&source)?;
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).with_path(parent)?;
        }
        fs::write(&target, normalize_eol(&content).as_bytes()).with_path(&target)?;

        tracing::debug!(from = %source.display(), to = %target.display(), "wrapper copied");
        written.push(target);
    }

    Ok(written)
}
