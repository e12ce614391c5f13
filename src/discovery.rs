//! Test source discovery.
//!
//! Walks the configured roots and collects the files worth handing to the
//! extraction pipeline. Discovery knows nothing about test frameworks: any file
//! with a matching extension is returned, and the extractor decides whether it
//! contains tests.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::DiscoveryConfig;

/// Collects source files under `paths`.
///
/// Directories are walked recursively, following symlinks and skipping any
/// directory named in `config.exclude_dirs`. A path that is itself a file is
/// kept when its extension matches. The result is sorted and de-duplicated.
///
/// # Errors
///
/// Returns an error if a path does not exist.
///
/// # Example
///
/// ```no_run
/// use testomat_export::config::DiscoveryConfig;
/// use testomat_export::discovery::discover_test_files;
///
/// let config = DiscoveryConfig::default();
/// let files = discover_test_files(&config.paths, &config)?;
/// println!("{} candidate files", files.len());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn discover_test_files(paths: &[PathBuf], config: &DiscoveryConfig) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for root in paths {
        if !root.exists() {
            bail!("Test path does not exist: {}", root.display());
        }

        if root.is_file() {
            if has_extension(root, &config.extensions) {
                files.push(root.clone());
            }
            continue;
        }

        let walker = WalkDir::new(root)
            .follow_links(true)
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_excluded(entry, &config.exclude_dirs));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                    continue;
                }
            };

            if entry.file_type().is_file() && has_extension(entry.path(), &config.extensions) {
                files.push(entry.into_path());
            }
        }
    }

    files.sort();
    files.dedup();
    debug!("Discovered {} candidate files", files.len());
    Ok(files)
}

fn is_excluded(entry: &DirEntry, exclude_dirs: &[String]) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| exclude_dirs.iter().any(|dir| dir == name))
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| extensions.iter().any(|wanted| wanted == ext))
}
