//! Property-based tests for group aggregation and the org-wide fold.
//!
//! These tests use proptest to generate random fragments and verify that
//! the aggregation invariants hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use std::collections::BTreeSet;
    use std::path::PathBuf;

    use crate::config::{GroupFragment, OrgConfig, RepoPermissionLevel};
    use crate::group::{aggregate, APPROVERS, MAINTAINERS};
    use crate::org::{apply_group_teams, collect_groups};
    use proptest::prelude::*;

    fn names() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-z][a-z0-9-]{0,8}", 0..8)
    }

    fn fragment() -> impl Strategy<Value = GroupFragment> {
        (names(), names(), names()).prop_map(|(repos, maintainers, approvers)| GroupFragment {
            repos,
            maintainers,
            approvers,
        })
    }

    proptest! {
        /// Property: a group's maintainers team grants maintain on exactly the listed repos
        #[test]
        fn maintainers_team_grants_exactly_listed_repos(fragment in fragment()) {
            let result = aggregate(&fragment, &PathBuf::from("org/core/teams.yaml")).unwrap();
            let expected: BTreeSet<&String> = fragment.repos.iter().collect();

            let team = &result.teams["core-maintainers"];
            let granted: BTreeSet<&String> = team.repos.keys().collect();
            prop_assert_eq!(granted, expected);
            prop_assert!(team.repos.values().all(|p| *p == RepoPermissionLevel::Maintain));
            prop_assert_eq!(&team.members, &fragment.maintainers);
        }

        /// Property: a group's approvers team only ever triages
        #[test]
        fn approvers_team_only_triages(fragment in fragment()) {
            let result = aggregate(&fragment, &PathBuf::from("org/core/teams.yaml")).unwrap();
            let team = &result.teams["core-approvers"];
            prop_assert!(team.repos.values().all(|p| *p == RepoPermissionLevel::Triage));
            prop_assert_eq!(&team.members, &fragment.approvers);
        }

        /// Property: the repo union across groups is the set union of their repo lists
        #[test]
        fn repo_union_is_set_union(fragments in prop::collection::vec(fragment(), 0..6)) {
            let groups = fragments.iter().enumerate().map(|(i, fragment)| {
                aggregate(fragment, &PathBuf::from(format!("org/group{i}/teams.yaml")))
            });
            let folded = collect_groups(groups).unwrap();

            let expected: BTreeSet<String> =
                fragments.iter().flat_map(|f| f.repos.iter().cloned()).collect();
            prop_assert_eq!(&folded.repos, &expected);
            prop_assert_eq!(folded.teams.len(), fragments.len() * 2);

            let mut org = OrgConfig::default();
            apply_group_teams(&mut org, folded);
            let maintained: BTreeSet<String> = org.teams[MAINTAINERS].repos.keys().cloned().collect();
            let triaged: BTreeSet<String> = org.teams[APPROVERS].repos.keys().cloned().collect();
            prop_assert_eq!(&maintained, &expected);
            prop_assert_eq!(&triaged, &expected);
        }
    }
}
