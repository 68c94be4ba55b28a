//! High-level operations that correspond to CLI commands
//!
//! These modules run the extract -> plan -> apply pipeline against an explicit
//! site root, separated from CLI concerns like argument parsing and exit codes.

pub mod plan;
pub mod routes;
pub mod sync;

pub use plan::plan_operation;
pub use routes::routes_operation;
pub use sync::{sync_operation, SyncOptions};
