#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod apply;
pub mod config;
pub mod interrupt;
pub mod operations;
pub mod output;
pub mod planner;
pub mod preview;
pub mod routes;

pub use apply::{apply_renames, confirm, ApplyReport, RenameOutcome};
pub use config::Config;
pub use operations::{plan_operation, routes_operation, sync_operation, SyncOptions};
pub use output::{
    OutputFormat, OutputFormatter, PlanResult, RoutesResult, SyncResult, VersionResult,
};
pub use planner::{numeric_prefix, plan_renames, residual, PlanOptions, RenameOp};
pub use preview::{render_changes, Preview};
pub use routes::{extract_routes, load_routes, normalize_route, RouteError, RouteSet};
