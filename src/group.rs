//! # Group Aggregation
//!
//! Turns one group fragment (`<org>/<group>/teams.yaml`) into the teams it
//! implies:
//!
//! - `<group>-maintainers`: the fragment's maintainers, with `maintain` on
//!   every listed repo.
//! - `<group>-approvers`: the fragment's approvers, with `triage` on every
//!   listed repo.
//!
//! Alongside the teams it reports the set of repos the group touches, which
//! the org merge uses to extend the org-wide teams.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::config::{self, GroupFragment, RepoPermissionLevel, TeamConfig};
use crate::error::{Error, Result};

/// Suffix and name of the maintainer role teams.
pub const MAINTAINERS: &str = "maintainers";

/// Suffix and name of the approver role teams.
pub const APPROVERS: &str = "approvers";

/// Teams and repos derived from one or more group fragments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupTeams {
    pub teams: BTreeMap<String, TeamConfig>,
    pub repos: BTreeSet<String>,
}

impl GroupTeams {
    /// Fold `other` into `self`. Teams with the same name are replaced by
    /// the incoming one.
    pub fn merge(&mut self, other: GroupTeams) {
        self.teams.extend(other.teams);
        self.repos.extend(other.repos);
    }
}

/// Name of the group a fragment belongs to: its parent directory's name.
pub fn group_name(path: &Path) -> Result<&str> {
    path.parent()
        .and_then(Path::file_name)
        .ok_or_else(|| Error::Path {
            message: format!("No group directory for {}", path.display()),
        })?
        .to_str()
        .ok_or_else(|| Error::Path {
            message: format!("Group name is not valid UTF-8: {}", path.display()),
        })
}

/// Derive the two role teams and the touched repos from a decoded fragment.
pub fn aggregate(fragment: &GroupFragment, path: &Path) -> Result<GroupTeams> {
    let group = group_name(path)?;

    let maintainers = TeamConfig::granting(
        fragment.maintainers.clone(),
        &fragment.repos,
        RepoPermissionLevel::Maintain,
    );
    let approvers = TeamConfig::granting(
        fragment.approvers.clone(),
        &fragment.repos,
        RepoPermissionLevel::Triage,
    );

    let mut teams = BTreeMap::new();
    teams.insert(format!("{group}-{MAINTAINERS}"), maintainers);
    teams.insert(format!("{group}-{APPROVERS}"), approvers);

    Ok(GroupTeams {
        teams,
        repos: fragment.repos.iter().cloned().collect(),
    })
}

/// Load a `teams.yaml` and aggregate it.
pub fn load(path: &Path) -> Result<GroupTeams> {
    let fragment = config::load_group(path)?;
    aggregate(&fragment, path)
}
