//! core::vars
//!
//! GitLab CI variable names read by the dump commands.
//!
//! Runners before GitLab 9.0 exported the `CI_BUILD_*` family; newer runners
//! export `CI_JOB_*` / `CI_COMMIT_*`. Build fields are looked up as
//! [`FallbackPair`]s so both generations work. Project and server variables
//! kept their names and are read directly.

use super::env::FallbackPair;

/// Job id.
pub const JOB_ID: FallbackPair = FallbackPair::new("CI_JOB_ID", "CI_BUILD_ID");

/// Commit sha the job runs against.
pub const COMMIT_REF: FallbackPair = FallbackPair::new("CI_COMMIT_SHA", "CI_BUILD_REF");

/// Branch or tag name.
pub const REF_NAME: FallbackPair = FallbackPair::new("CI_COMMIT_REF_NAME", "CI_BUILD_REF_NAME");

/// Tag name, only set for tag pipelines.
pub const TAG: FallbackPair = FallbackPair::new("CI_COMMIT_TAG", "CI_BUILD_TAG");

/// Pipeline stage.
pub const STAGE: FallbackPair = FallbackPair::new("CI_JOB_STAGE", "CI_BUILD_STAGE");

/// Job name.
pub const JOB_NAME: FallbackPair = FallbackPair::new("CI_JOB_NAME", "CI_BUILD_NAME");

pub const PROJECT_ID: &str = "CI_PROJECT_ID";
pub const PROJECT_DIR: &str = "CI_PROJECT_DIR";

pub const SERVER_NAME: &str = "CI_SERVER_NAME";
pub const SERVER_REVISION: &str = "CI_SERVER_REVISION";
pub const SERVER_VERSION: &str = "CI_SERVER_VERSION";

/// Explicit config file location.
pub const CONFIG_PATH: &str = "GITLAB_CI_HELPER_CONFIG";

/// XDG config root.
pub const XDG_CONFIG_HOME: &str = "XDG_CONFIG_HOME";
