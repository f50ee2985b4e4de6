//! # Building the Full Config
//!
//! Entry point of the library. Every immediate subdirectory of the config
//! root is an organization; each is merged with [`crate::org::merge_org`] and
//! the results are collected into a [`FullConfig`] keyed by directory name.
//!
//! The first organization that fails aborts the build, and nothing is
//! rendered for a failed build.

use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::config::FullConfig;
use crate::error::{Error, Result};
use crate::org;

/// List the organization directories under `root` as `(name, path)`, in name order.
///
/// `root` must be a directory; a missing root or a regular file fails with
/// [`Error::Io`]. Symlinks to directories count as organizations.
pub fn discover_orgs(root: &Path) -> Result<Vec<(String, PathBuf)>> {
    let metadata = std::fs::metadata(root).map_err(|source| Error::Io {
        path: root.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(Error::Io {
            path: root.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotADirectory, "not a directory"),
        });
    }

    let mut orgs = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| {
            // An unreadable root is an I/O problem, not a broken walk.
            if source.depth() == 0 && source.io_error().is_some() {
                Error::Io {
                    path: root.to_path_buf(),
                    source: source
                        .into_io_error()
                        .unwrap_or_else(|| std::io::Error::other("unreadable directory")),
                }
            } else {
                Error::Traversal {
                    path: root.to_path_buf(),
                    source,
                }
            }
        })?;

        if !entry.file_type().is_dir() && !entry.path().is_dir() {
            debug!("Ignoring non-directory {}", entry.path().display());
            continue;
        }

        let name = entry
            .file_name()
            .to_str()
            .ok_or_else(|| Error::Path {
                message: format!("Org name is not valid UTF-8: {}", entry.path().display()),
            })?
            .to_string();
        orgs.push((name, entry.into_path()));
    }

    Ok(orgs)
}

/// Merge every organization under `root`.
pub fn build(root: &Path) -> Result<FullConfig> {
    let mut full = FullConfig::default();

    for (name, path) in discover_orgs(root)? {
        debug!("Merging org {} from {}", name, path.display());
        let merged = org::merge_org(&path).map_err(|err| err.in_org(&name))?;
        full.orgs.insert(name, merged);
    }

    Ok(full)
}

/// Serialize the full config as YAML.
pub fn render(config: &FullConfig) -> Result<String> {
    serde_yaml::to_string(config).map_err(|source| Error::Serialization { source })
}

/// Build and render in one step.
pub fn build_yaml(root: &Path) -> Result<String> {
    render(&build(root)?)
}
