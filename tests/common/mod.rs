//! Shared test utilities for CLI end-to-end tests.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_org("acme", fragments::EMPTY_ORG);
//!     fixture.command().assert().success();
//! }
//! ```

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::fragments;
    pub use super::TestFixture;
}

/// Common fragment snippets for testing.
#[allow(dead_code)]
pub mod fragments {
    /// Organization fragment with no teams.
    pub const EMPTY_ORG: &str = "teams: {}\n";

    /// Organization fragment with metadata and a pre-existing org-wide team.
    pub const ORG_WITH_METADATA: &str = r#"
name: Acme
billing_email: billing@acme.example
admins:
  - root
teams:
  maintainers:
    description: Org-wide maintainers
    members:
      - root
"#;

    /// Group fragment owning one repo.
    pub const CORE_GROUP: &str = r#"
repos: [x]
maintainers: [alice]
approvers: [bob]
"#;

    /// Invalid YAML for error testing.
    pub const INVALID_YAML: &str = "repos: [unclosed";
}

/// A config root in a temporary directory.
pub struct TestFixture {
    pub temp: TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    pub fn new() -> Self {
        Self {
            temp: TempDir::new().unwrap(),
        }
    }

    /// Write `<org>/org.yaml`.
    pub fn with_org(self, org: &str, content: &str) -> Self {
        self.with_file(&format!("{org}/org.yaml"), content)
    }

    /// Write `<org>/<group>/teams.yaml`.
    pub fn with_group(self, org: &str, group: &str, content: &str) -> Self {
        self.with_file(&format!("{org}/{group}/teams.yaml"), content)
    }

    /// Write any file relative to the config root.
    pub fn with_file(self, rel: &str, content: &str) -> Self {
        self.temp.child(rel).write_str(content).unwrap();
        self
    }

    /// The binary pointed at this fixture with a clean environment.
    pub fn command(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("peribolos-builder");
        cmd.env_remove("RUST_LOG")
            .env_remove("PERIBOLOS_CONFIG")
            .arg("--config")
            .arg(self.temp.path());
        cmd
    }
}
