//! # Peribolos Config Builder
//!
//! This library assembles a tree of per-organization and per-group YAML
//! fragments into the single org config document consumed by peribolos,
//! the GitHub organization permissions reconciler.
//!
//! ## Quick Example
//!
//! ```no_run
//! use std::path::Path;
//! use peribolos_builder::builder;
//!
//! let full = builder::build(Path::new("config")).unwrap();
//! println!("{}", builder::render(&full).unwrap());
//! ```
//!
//! ## Input Layout
//!
//! ```text
//! config/
//!   <org>/
//!     org.yaml              organization settings and teams
//!     <group>/
//!       teams.yaml          repos, maintainers and approvers of a group
//! ```
//!
//! ## Core Concepts
//!
//! - **Configuration (`config`)**: the records on disk and in the output, and
//!   the loader that decodes one fragment file.
//! - **Groups (`group`)**: each `teams.yaml` becomes a `<group>-maintainers`
//!   team (`maintain` on the group's repos) and a `<group>-approvers` team
//!   (`triage` on the group's repos).
//! - **Organizations (`org`)**: discovers the groups of one org, folds them
//!   together and extends the org-wide `maintainers` and `approvers` teams
//!   with every repo any group touches.
//! - **Builder (`builder`)**: runs the org merge for every org directory and
//!   renders the combined document.

pub mod builder;
pub mod config;
pub mod error;
pub mod group;
pub mod org;

#[cfg(test)]
mod group_proptest;
