//! core::metadata
//!
//! The metadata snapshot written by `ci:meta`.
//!
//! # Format
//!
//! ```json
//! {
//!     "build": {
//!         "id": "1234",
//!         "ref": "0f3a...",
//!         "ref_name": "main",
//!         "tag": "",
//!         "stage": "build",
//!         "job_name": "compile"
//!     },
//!     "project": {
//!         "id": "42",
//!         "dir": "/builds/group/project"
//!     },
//!     "server": {
//!         "name": "GitLab",
//!         "revision": "abc",
//!         "version": "16.0.0"
//!     }
//! }
//! ```
//!
//! Every key is always present. Missing variables serialize as `""`, never as
//! `null`. The document is indented with four spaces and has no trailing
//! newline.

use serde::{Deserialize, Serialize};

use super::env::{resolve_traced, var_or_empty, Environment, FallbackPair, Resolved};
use super::vars;

/// Build fields in serialization order, with the variables each is read from.
pub const BUILD_FIELDS: [(&str, FallbackPair); 6] = [
    ("id", vars::JOB_ID),
    ("ref", vars::COMMIT_REF),
    ("ref_name", vars::REF_NAME),
    ("tag", vars::TAG),
    ("stage", vars::STAGE),
    ("job_name", vars::JOB_NAME),
];

/// Job-level information. Each field goes through the fallback chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildInfo {
    pub id: String,
    #[serde(rename = "ref")]
    pub commit_ref: String,
    pub ref_name: String,
    pub tag: String,
    pub stage: String,
    pub job_name: String,
}

impl BuildInfo {
    pub fn collect(env: &dyn Environment) -> Self {
        Self::collect_traced(env).0
    }

    /// Resolve every build field once, returning the record together with
    /// each resolution in [`BUILD_FIELDS`] order.
    pub fn collect_traced(env: &dyn Environment) -> (Self, [Resolved; 6]) {
        let traced = BUILD_FIELDS.map(|(_, pair)| resolve_traced(env, &pair));
        let [id, commit_ref, ref_name, tag, stage, job_name] =
            traced.clone().map(|resolved| resolved.value);

        let build = Self {
            id,
            commit_ref,
            ref_name,
            tag,
            stage,
            job_name,
        };
        (build, traced)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub id: String,
    pub dir: String,
}

impl ProjectInfo {
    pub fn collect(env: &dyn Environment) -> Self {
        Self {
            id: var_or_empty(env, vars::PROJECT_ID),
            dir: var_or_empty(env, vars::PROJECT_DIR),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerInfo {
    pub name: String,
    pub revision: String,
    pub version: String,
}

impl ServerInfo {
    pub fn collect(env: &dyn Environment) -> Self {
        Self {
            name: var_or_empty(env, vars::SERVER_NAME),
            revision: var_or_empty(env, vars::SERVER_REVISION),
            version: var_or_empty(env, vars::SERVER_VERSION),
        }
    }
}

/// Snapshot of the CI job, built once per invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub build: BuildInfo,
    pub project: ProjectInfo,
    pub server: ServerInfo,
}

impl Metadata {
    /// Read every field from `env`.
    pub fn collect(env: &dyn Environment) -> Self {
        Self::collect_traced(env).0
    }

    /// Like [`Metadata::collect`], also returning how each build field was
    /// resolved.
    pub fn collect_traced(env: &dyn Environment) -> (Self, [Resolved; 6]) {
        let (build, traced) = BuildInfo::collect_traced(env);
        let meta = Self {
            build,
            project: ProjectInfo::collect(env),
            server: ServerInfo::collect(env),
        };
        (meta, traced)
    }

    /// Serialize as JSON indented with four spaces.
    pub fn to_pretty_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        Ok(buf)
    }
}
