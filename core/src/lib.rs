//! Bootstrap primitives for the Stoker worker process.
//!
//! This crate contains everything the `stoker` binary needs to become a
//! runnable entry point for a single worker task, without itself knowing what
//! that task does:
//!
//! - **`paths`**: explicit resolution of the directory roots the worker's
//!   sibling module tree is located from, independent of the caller's working
//!   directory.
//! - **`task`**: the contract consumed from the external task implementation
//!   and the run operation that invokes it exactly once.
//! - **`config`**: optional on-disk configuration, loaded leniently.
//!
//! Loading this crate has no side effects. The task entry point runs only
//! when a caller explicitly invokes [`run_worker`]; the conventional caller is
//! the `stoker` binary's `main`.

pub mod config;
pub mod paths;
pub mod task;

pub use config::{ConfigError, StokerConfig};
pub use paths::{ResolveError, SearchPath};
pub use task::{WorkerTask, run_worker};
