//! The contract between the bootstrap and the external worker task.
//!
//! The bootstrap knows nothing about what the task does. It consumes exactly
//! one capability: a zero-argument callable that either completes or fails.
//! [`run_worker`] is the single run operation; it performs no retry, no
//! suppression, and no wrapping, so whatever error the task produces reaches
//! the caller unmodified.

use anyhow::Result;

/// A unit of worker behavior invokable with no arguments.
///
/// The return value is not inspected beyond error propagation: `Ok` means the
/// process may exit successfully, `Err` surfaces to the process boundary.
pub trait WorkerTask {
    fn perform(&self) -> Result<()>;
}

/// Closures satisfy the contract directly.
impl<F> WorkerTask for F
where
    F: Fn() -> Result<()>,
{
    fn perform(&self) -> Result<()> {
        self()
    }
}

/// Invokes `task` exactly once and returns its result unmodified.
///
/// This is the whole of the bootstrap's execution policy. Errors are not
/// caught, logged, or retried here; the conventional caller is the `stoker`
/// binary's `main`, which lets them terminate the process with a non-zero
/// status.
pub fn run_worker(task: &impl WorkerTask) -> Result<()> {
    task.perform()
}

#[cfg(test)]
mod tests {
    use super::run_worker;
    use anyhow::{Result, anyhow};
    use std::cell::Cell;

    #[test]
    fn task_runs_exactly_once() {
        let calls = Cell::new(0_u32);
        let task = || -> Result<()> {
            calls.set(calls.get() + 1);
            Ok(())
        };

        run_worker(&task).unwrap();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn failure_is_not_retried() {
        let calls = Cell::new(0_u32);
        let task = || -> Result<()> {
            calls.set(calls.get() + 1);
            Err(anyhow!("task failed"))
        };

        assert!(run_worker(&task).is_err());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn error_kind_survives_propagation() {
        let task = || -> Result<()> {
            Err(std::io::Error::from(std::io::ErrorKind::UnexpectedEof).into())
        };

        let err = run_worker(&task).unwrap_err();
        let io = err
            .downcast_ref::<std::io::Error>()
            .expect("original error kind should be recoverable");
        assert_eq!(io.kind(), std::io::ErrorKind::UnexpectedEof);
    }
}
