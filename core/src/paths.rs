//! Explicit search-path resolution for the worker's sibling module tree.
//!
//! The worker binary ships next to a module tree rooted one directory level
//! above its own location. A [`SearchPath`] captures, once at startup, the
//! ordered list of roots that tree can be located from, so resolution works
//! the same no matter which directory the process was launched from. The
//! value is immutable after construction and passed explicitly to whoever
//! needs it; nothing here touches process-global state.

use std::env;
use std::path::PathBuf;
use thiserror::Error;

/// Ordered directory roots consulted when locating a module tree by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPath {
    roots: Vec<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("could not determine the running executable's location")]
    ExeLocation(#[source] std::io::Error),
    #[error("module tree `{name}` not found under any of: {}", display_roots(.searched))]
    ModuleNotFound {
        name: String,
        searched: Vec<PathBuf>,
    },
}

fn display_roots(roots: &[PathBuf]) -> String {
    roots
        .iter()
        .map(|root| root.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl SearchPath {
    /// Resolves the search path from the running executable's location.
    ///
    /// The parent of the executable's own directory is seated first, so a
    /// sibling tree next to the install location always wins over anything
    /// relative to the caller's working directory, which is appended as a
    /// fallback when available.
    pub fn from_current_exe() -> Result<Self, ResolveError> {
        let exe = env::current_exe().map_err(ResolveError::ExeLocation)?;

        let mut roots = Vec::new();
        if let Some(exe_dir) = exe.parent()
            && let Some(install_root) = exe_dir.parent()
        {
            roots.push(install_root.to_path_buf());
        }
        if let Ok(cwd) = env::current_dir() {
            roots.push(cwd);
        }

        Ok(Self { roots })
    }

    /// Builds a search path with a single explicit root, bypassing
    /// executable-relative resolution. Used for config overrides and tests.
    #[must_use]
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            roots: vec![root.into()],
        }
    }

    /// Seats `root` at the front of the sequence, ahead of existing roots.
    /// Existing roots stay as fallbacks.
    #[must_use]
    pub fn preferring(mut self, root: impl Into<PathBuf>) -> Self {
        self.roots.insert(0, root.into());
        self
    }

    /// Appends a lower-priority root.
    #[must_use]
    pub fn and_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.roots.push(root.into());
        self
    }

    /// The roots in resolution order.
    #[must_use]
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Locates the module tree `name` under the first root that contains it.
    ///
    /// On a miss, the error carries every root that was consulted, in order.
    /// Callers are not expected to recover; the `stoker` binary lets this
    /// surface to the process boundary.
    pub fn locate(&self, name: &str) -> Result<PathBuf, ResolveError> {
        for root in &self.roots {
            let candidate = root.join(name);
            if candidate.is_dir() {
                return Ok(candidate);
            }
        }
        Err(ResolveError::ModuleNotFound {
            name: name.to_owned(),
            searched: self.roots.clone(),
        })
    }
}
