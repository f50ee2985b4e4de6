//! # Configuration Schema and Loading
//!
//! This module defines the records read from and written to disk, and the
//! loader that decodes a single fragment file into one of them.
//!
//! ## Key Components
//!
//! - **`OrgConfig`**: one organization's desired state, read from
//!   `<root>/<org>/org.yaml`. Only `teams` is interpreted; every other key is
//!   kept as opaque metadata and written back unchanged.
//! - **`TeamConfig`**: a team's members and repository grants.
//! - **`GroupFragment`**: a sub-team's `teams.yaml`, listing the repos it owns
//!   and its maintainers and approvers.
//! - **`FullConfig`**: the output document, `orgs` keyed by org name.
//!
//! All maps that reach the output are `BTreeMap`s so that the rendered
//! document does not depend on filesystem enumeration order.

use std::collections::BTreeMap;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::{Mapping, Value};

use crate::error::{Error, Result};

/// Name of the organization fragment directly under an org directory.
pub const ORG_FILE: &str = "org.yaml";

/// Name of a group fragment inside a group directory.
pub const GROUP_FILE: &str = "teams.yaml";

/// Decode a field whose key is present but empty (`approvers:`) as its default.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Permission level granted to a team on a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepoPermissionLevel {
    Read,
    Triage,
    Write,
    Maintain,
    Admin,
}

/// A team's members and repository grants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamConfig {
    /// Everything besides `members` and `repos` (description, privacy,
    /// children, ...), passed through as-is.
    #[serde(flatten)]
    pub metadata: Mapping,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub members: Vec<String>,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub repos: BTreeMap<String, RepoPermissionLevel>,
}

impl TeamConfig {
    /// A team with the given members and `permission` on each of `repos`.
    pub fn granting<'a>(
        members: Vec<String>,
        repos: impl IntoIterator<Item = &'a String>,
        permission: RepoPermissionLevel,
    ) -> Self {
        let mut team = TeamConfig {
            members,
            ..TeamConfig::default()
        };
        team.grant_all(repos, permission);
        team
    }

    /// Grant `permission` on every repo, replacing any existing grant.
    pub fn grant_all<'a>(
        &mut self,
        repos: impl IntoIterator<Item = &'a String>,
        permission: RepoPermissionLevel,
    ) {
        for repo in repos {
            self.repos.insert(repo.clone(), permission);
        }
    }
}

/// One organization's desired state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrgConfig {
    /// Organization settings, members, repos, ... passed through as-is.
    #[serde(flatten)]
    pub metadata: Mapping,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub teams: BTreeMap<String, TeamConfig>,
}

/// A group's `teams.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupFragment {
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub repos: Vec<String>,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub maintainers: Vec<String>,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub approvers: Vec<String>,
}

/// The assembled document for every organization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FullConfig {
    #[serde(default)]
    pub orgs: BTreeMap<String, OrgConfig>,
}

/// Whether a document has no content besides comments and markers.
fn is_blank(yaml_content: &str) -> bool {
    yaml_content.lines().map(str::trim).all(|line| {
        line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
    })
}

/// Parse a fragment from a YAML string.
///
/// A blank, comment-only or null document yields the empty record.
pub fn parse<T>(yaml_content: &str) -> std::result::Result<T, serde_yaml::Error>
where
    T: DeserializeOwned + Default,
{
    if is_blank(yaml_content) {
        return Ok(T::default());
    }
    match serde_yaml::from_str::<Value>(yaml_content)? {
        Value::Null => Ok(T::default()),
        value => serde_yaml::from_value(value),
    }
}

/// Read and decode a fragment file.
pub fn from_file<T, P>(path: P) -> Result<T>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Load an organization fragment (`org.yaml`).
pub fn load_org<P: AsRef<Path>>(path: P) -> Result<OrgConfig> {
    from_file(path)
}

/// Load a group fragment (`teams.yaml`).
pub fn load_group<P: AsRef<Path>>(path: P) -> Result<GroupFragment> {
    from_file(path)
}
