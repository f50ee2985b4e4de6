//! # Error Handling
//!
//! This module defines the centralized error type for `peribolos-builder`.
//! It uses the `thiserror` library to describe every failure mode the
//! builder can hit while turning a directory of fragments into one org
//! config document.
//!
//! Every variant carries the path (or organization) it occurred in, so the
//! message printed by the binary is enough to locate the broken file. The
//! underlying cause is exposed through `source()` rather than repeated in
//! the message. There is no local recovery anywhere: the first error aborts
//! the whole run.
//!
//! - **`Io`**: a file or directory could not be read.
//! - **`Decode`**: a fragment did not parse into the expected shape.
//! - **`Traversal`**: the directory walk failed part-way through.
//! - **`Path`**: a directory name cannot be used as an org or group name.
//! - **`Serialization`**: the final document could not be encoded.
//! - **`Org`**: wraps any of the above with the organization being merged.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for peribolos-builder operations
#[derive(Error, Debug)]
pub enum Error {
    /// A fragment file or config directory could not be read.
    #[error("I/O error reading {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A fragment file was read but its content is not the expected record.
    #[error("Decode error in {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Walking an organization directory failed (e.g. permission denied).
    #[error("Traversal error walking {}", path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// A path could not be turned into an org or group name.
    #[error("Path operation error: {message}")]
    Path { message: String },

    /// The merged document could not be serialized.
    #[error("Serialization error while rendering org config")]
    Serialization {
        #[source]
        source: serde_yaml::Error,
    },

    /// Any failure raised while merging a single organization.
    #[error("Failed to merge org {org}")]
    Org {
        org: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Wrap this error with the organization it occurred in.
    pub fn in_org(self, org: impl Into<String>) -> Self {
        Error::Org {
            org: org.into(),
            source: Box::new(self),
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
