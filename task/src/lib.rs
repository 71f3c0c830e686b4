//! The worker task wired into the `stoker` binary.
//!
//! The bootstrap in `stoker-core` depends only on the [`WorkerTask`] contract;
//! this crate is the sibling tree that fulfills it. Deployments with a real
//! workload replace the body of [`PerformWorkerTask::perform`] (or this whole
//! crate) without touching the bootstrap.

use anyhow::Result;
use stoker_core::{SearchPath, WorkerTask};
use tracing::info;

/// The concrete task the `stoker` binary runs.
///
/// Constructed with the search path resolved at startup, so the task can
/// locate sibling resources without caring about the process's working
/// directory.
pub struct PerformWorkerTask {
    paths: SearchPath,
}

impl PerformWorkerTask {
    #[must_use]
    pub fn new(paths: SearchPath) -> Self {
        Self { paths }
    }
}

impl WorkerTask for PerformWorkerTask {
    fn perform(&self) -> Result<()> {
        info!(roots = ?self.paths.roots(), "worker task starting");

        // Reference workload: nothing to do yet. Real tasks consume
        // `self.paths` to find their data tree via `SearchPath::locate`.
        info!("worker task finished");
        Ok(())
    }
}
