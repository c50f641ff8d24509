//! core::env
//!
//! Environment lookup and the preferred/legacy fallback chain.
//!
//! # Design
//!
//! Commands never read the process environment directly. They receive an
//! [`Environment`] so tests can inject a fixed snapshot without touching the
//! real process state.
//!
//! Absence is never an error: an unset variable, an empty variable and a
//! variable holding non-unicode data all read as the empty string.
//!
//! # Example
//!
//! ```
//! use gitlab_ci_helper::core::env::{resolve, FallbackPair, MapEnv};
//!
//! let env = MapEnv::new().with("CI_BUILD_REF", "abc123");
//! let pair = FallbackPair::new("CI_COMMIT_SHA", "CI_BUILD_REF");
//!
//! assert_eq!(resolve(&env, &pair), "abc123");
//! ```

use std::collections::HashMap;
use std::path::PathBuf;

/// Read-only key/value view of an environment.
pub trait Environment {
    /// Get the value of a variable, or `None` if it is unset or unreadable.
    fn var(&self, name: &str) -> Option<String>;

    /// Home directory used for config discovery.
    fn home_dir(&self) -> Option<PathBuf> {
        self.var("HOME").filter(|h| !h.is_empty()).map(PathBuf::from)
    }
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.var("HOME")
            .filter(|h| !h.is_empty())
            .map(PathBuf::from)
            .or_else(dirs::home_dir)
    }
}

/// In-memory environment snapshot.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Set a variable, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Remove a variable.
    pub fn remove(&mut self, name: &str) {
        self.vars.remove(name);
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Environment for MapEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// Two naming generations of the same CI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackPair {
    /// Current variable name, consulted first.
    pub preferred: &'static str,
    /// Name used by older runners.
    pub legacy: &'static str,
}

impl FallbackPair {
    /// Create a pair.
    pub const fn new(preferred: &'static str, legacy: &'static str) -> Self {
        Self { preferred, legacy }
    }
}

/// Which variable supplied a resolved value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// The preferred variable was non-empty.
    Preferred,
    /// The preferred variable was empty and the legacy one was non-empty.
    Legacy,
    /// Neither variable held a value.
    Unset,
}

/// A resolved value together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub value: String,
    pub source: Source,
}

impl Resolved {
    /// Name of the variable that supplied the value, if any.
    pub fn source_name(&self, pair: &FallbackPair) -> Option<&'static str> {
        match self.source {
            Source::Preferred => Some(pair.preferred),
            Source::Legacy => Some(pair.legacy),
            Source::Unset => None,
        }
    }
}

/// Read a variable, mapping absence to the empty string.
pub fn var_or_empty(env: &dyn Environment, name: &str) -> String {
    env.var(name).unwrap_or_default()
}

/// Resolve a pair, reporting which variable won.
pub fn resolve_traced(env: &dyn Environment, pair: &FallbackPair) -> Resolved {
    let preferred = var_or_empty(env, pair.preferred);
    if !preferred.is_empty() {
        return Resolved {
            value: preferred,
            source: Source::Preferred,
        };
    }

    let legacy = var_or_empty(env, pair.legacy);
    let source = if legacy.is_empty() {
        Source::Unset
    } else {
        Source::Legacy
    };

    Resolved {
        value: legacy,
        source,
    }
}

/// Resolve a pair: preferred if non-empty, else legacy, else `""`.
pub fn resolve(env: &dyn Environment, pair: &FallbackPair) -> String {
    resolve_traced(env, pair).value
}
