use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::planner::PlanOptions;

/// Directory holding routefix's own settings, relative to the site root.
pub const CONFIG_DIR: &str = ".routefix";
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Site configuration scanned for `link: '...'` routes
    #[serde(default = "default_site_config")]
    pub site_config: PathBuf,

    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub walk: WalkConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsConfig {
    /// Default preview format: "list" or "table"
    #[serde(default = "default_preview")]
    pub preview_format: String,

    /// Whether to use color output by default (None = auto-detect)
    #[serde(default)]
    pub use_color: Option<bool>,
}

/// Walk settings. The markdown extension is fixed at `.md`, matching the
/// extension given to extracted routes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WalkConfig {
    /// File treated as a directory index and never renamed
    #[serde(default = "default_index_file")]
    pub index_file: String,

    /// Dependency cache directory skipped during the walk
    #[serde(default = "default_dependency_dir")]
    pub dependency_dir: String,

    /// Extra glob patterns (relative to the site root) to skip
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_config: default_site_config(),
            defaults: DefaultsConfig::default(),
            walk: WalkConfig::default(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            preview_format: default_preview(),
            use_color: None,
        }
    }
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            index_file: default_index_file(),
            dependency_dir: default_dependency_dir(),
            exclude: Vec::new(),
        }
    }
}

fn default_site_config() -> PathBuf {
    PathBuf::from(".vitepress").join("config.mjs")
}

fn default_preview() -> String {
    "list".to_string()
}

fn default_index_file() -> String {
    "index.md".to_string()
}

fn default_dependency_dir() -> String {
    "node_modules".to_string()
}

impl Config {
    /// Load `.routefix/config.toml` under `root` if it exists
    pub fn load_from_dir(root: &Path) -> Result<Self> {
        let config_path = root.join(CONFIG_DIR).join(CONFIG_FILE);
        if config_path.exists() {
            return Self::load_from_path(&config_path);
        }

        Ok(Self::default())
    }

    /// Load config from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Site config location resolved against the site root
    pub fn site_config_path(&self, root: &Path) -> PathBuf {
        if self.site_config.is_absolute() {
            self.site_config.clone()
        } else {
            root.join(&self.site_config)
        }
    }

    pub fn plan_options(&self) -> PlanOptions {
        PlanOptions {
            index_file: self.walk.index_file.clone(),
            dependency_dir: self.walk.dependency_dir.clone(),
            excludes: self.walk.exclude.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.site_config, Path::new(".vitepress/config.mjs"));
        assert_eq!(config.defaults.preview_format, "list");
        assert_eq!(config.defaults.use_color, None);
        assert_eq!(config.walk.index_file, "index.md");
        assert_eq!(config.walk.dependency_dir, "node_modules");
        assert!(config.walk.exclude.is_empty());
    }

    #[test]
    fn test_config_toml_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.site_config = PathBuf::from("docs/.vitepress/config.ts");
        config.defaults.preview_format = "table".to_string();
        config.walk.exclude = vec!["drafts/**".to_string()];

        fs::write(&config_path, toml::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();
        assert_eq!(loaded.site_config, Path::new("docs/.vitepress/config.ts"));
        assert_eq!(loaded.defaults.preview_format, "table");
        assert_eq!(loaded.walk.exclude, vec!["drafts/**".to_string()]);
    }

    #[test]
    fn test_partial_config() {
        let toml_content = r#"
[walk]
dependency_dir = "vendor"
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.walk.dependency_dir, "vendor");
        // Other fields should have their defaults
        assert_eq!(config.walk.index_file, "index.md");
        assert_eq!(config.defaults.preview_format, "list");
        assert_eq!(config.site_config, Path::new(".vitepress/config.mjs"));
    }

    #[test]
    fn test_load_from_dir_without_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from_dir(temp_dir.path()).unwrap();
        assert_eq!(config.walk.index_file, "index.md");
    }

    #[test]
    fn test_load_from_dir_rejects_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join(CONFIG_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(CONFIG_FILE), "site_config = [").unwrap();

        let err = Config::load_from_dir(temp_dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    #[test]
    fn test_unknown_walk_key_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join(CONFIG_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join(CONFIG_FILE),
            "[walk]\nmarkdown_extension = \".markdown\"\n",
        )
        .unwrap();

        let err = Config::load_from_dir(temp_dir.path()).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("Failed to parse config"));
        assert!(message.contains("markdown_extension"));
    }

    #[test]
    fn test_site_config_path() {
        let config = Config::default();
        let root = Path::new("/site");
        assert_eq!(
            config.site_config_path(root),
            Path::new("/site/.vitepress/config.mjs")
        );
    }
}
