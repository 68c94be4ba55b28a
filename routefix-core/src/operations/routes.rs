use anyhow::Result;
use std::path::Path;

use crate::output::RoutesResult;
use crate::routes::load_routes;
use crate::Config;

/// Routes operation - list what the site config declares
pub fn routes_operation(root: &Path, config: &Config) -> Result<RoutesResult> {
    let routes = load_routes(&config.site_config_path(root))?;

    Ok(RoutesResult {
        site_config: config.site_config.display().to_string(),
        routes: routes.iter().map(String::from).collect(),
    })
}
