//! # Organization Merge
//!
//! Builds one organization's final config from its directory:
//!
//! ```text
//! <org>/org.yaml               organization fragment (required)
//! <org>/<group>/teams.yaml     group fragments (zero or more)
//! ```
//!
//! The work is split in three steps that can be tested on their own:
//!
//! 1.  **Discovery (`discover_groups`)**: a lazy, name-ordered walk yielding
//!     the path of every group fragment. Only first-level subdirectories are
//!     looked at; deeper directories and files at the org root are ignored.
//! 2.  **Fold (`collect_groups`)**: reduces the aggregated groups into one set
//!     of teams and the union of every repo they touch.
//! 3.  **Apply (`apply_group_teams`)**: adds the group teams to the org and
//!     extends the org-wide `maintainers` and `approvers` teams with
//!     `maintain` and `triage` on every touched repo.

use std::path::{Path, PathBuf};

use log::{debug, info};
use walkdir::WalkDir;

use crate::config::{self, OrgConfig, RepoPermissionLevel, GROUP_FILE, ORG_FILE};
use crate::error::{Error, Result};
use crate::group::{self, GroupTeams, APPROVERS, MAINTAINERS};

/// Yield the path of every group fragment under `org_dir`, in name order.
pub fn discover_groups(org_dir: &Path) -> impl Iterator<Item = Result<PathBuf>> + '_ {
    WalkDir::new(org_dir)
        .min_depth(1)
        .max_depth(2)
        .sort_by_file_name()
        .into_iter()
        .filter_map(move |entry| match entry {
            Err(source) => Some(Err(Error::Traversal {
                path: source
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| org_dir.to_path_buf()),
                source,
            })),
            // Group directories are descended into; files next to org.yaml are not groups.
            Ok(entry) if entry.depth() == 1 => None,
            Ok(entry) if entry.file_type().is_dir() => {
                info!("Skipping {} and its children", entry.path().display());
                None
            }
            Ok(entry) if entry.file_name() == GROUP_FILE => Some(Ok(entry.into_path())),
            Ok(_) => None,
        })
}

/// Fold aggregated groups into one set of teams and the union of their repos.
///
/// Stops at the first error.
pub fn collect_groups<I>(groups: I) -> Result<GroupTeams>
where
    I: IntoIterator<Item = Result<GroupTeams>>,
{
    groups
        .into_iter()
        .try_fold(GroupTeams::default(), |mut acc, group| {
            acc.merge(group?);
            Ok(acc)
        })
}

/// Add the group teams to `org` and extend the org-wide role teams.
///
/// Existing `maintainers`/`approvers` teams keep their members and other
/// grants; a repo touched by any group is (re)granted `maintain` to
/// `maintainers` and `triage` to `approvers`.
pub fn apply_group_teams(org: &mut OrgConfig, groups: GroupTeams) {
    org.teams.extend(groups.teams);

    org.teams
        .entry(MAINTAINERS.to_string())
        .or_default()
        .grant_all(&groups.repos, RepoPermissionLevel::Maintain);
    org.teams
        .entry(APPROVERS.to_string())
        .or_default()
        .grant_all(&groups.repos, RepoPermissionLevel::Triage);
}

/// Load `org_dir/org.yaml` and merge every group fragment below it.
pub fn merge_org(org_dir: &Path) -> Result<OrgConfig> {
    let mut org = config::load_org(org_dir.join(ORG_FILE))?;

    let groups = collect_groups(discover_groups(org_dir).map(|path| {
        let path = path?;
        debug!("Loading group fragment {}", path.display());
        group::load(&path)
    }))?;

    debug!(
        "{}: {} group teams, {} repos",
        org_dir.display(),
        groups.teams.len(),
        groups.repos.len()
    );
    apply_group_teams(&mut org, groups);
    Ok(org)
}
