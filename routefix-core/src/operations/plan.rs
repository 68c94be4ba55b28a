use anyhow::{Context, Result};
use std::path::Path;

use crate::output::PlanResult;
use crate::planner::plan_renames;
use crate::routes::load_routes;
use crate::Config;

/// Plan operation - returns the proposed renames without touching the tree
pub fn plan_operation(root: &Path, config: &Config) -> Result<PlanResult> {
    let routes = load_routes(&config.site_config_path(root))?;
    let changes = plan_renames(root, &routes, &config.plan_options())
        .with_context(|| format!("Failed to scan {}", root.display()))?;

    Ok(PlanResult {
        site_config: config.site_config.display().to_string(),
        routes: routes.len(),
        changes,
    })
}
