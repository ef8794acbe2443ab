//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Prefix for environment overrides, e.g. `IMAGING_COPILOT_SERVER__PORT=9000`
pub const ENV_PREFIX: &str = "IMAGING_COPILOT_";

const PROJECT_CONFIG_FILES: [&str; 2] = ["imaging-copilot.toml", ".imaging-copilot.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `IMAGING_COPILOT_*` environment variables (`__` separates sections)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./imaging-copilot.toml` or `./.imaging-copilot.toml`
    /// 4. Global: `~/.config/imaging-copilot/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(
            Self::global_config_path().as_deref(),
            Self::project_config_path().as_deref(),
            config_path.map(PathBuf::as_path),
        )
        .extract()
        .map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    fn figment(global: Option<&Path>, project: Option<&Path>, explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(path) = global.filter(|p| p.exists()) {
            figment = figment.merge(Toml::file(path));
        }
        if let Some(path) = project {
            figment = figment.merge(Toml::file(path));
        }
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("imaging-copilot").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Describe the config file locations being used (for `show-config`)
    pub fn describe_sources(explicit: Option<&PathBuf>) -> Vec<String> {
        let mut lines = Vec::new();

        if let Some(path) = explicit {
            let mark = if path.exists() { "FOUND" } else { "     " };
            lines.push(format!("[{}] Explicit: {}", mark, path.display()));
        }

        match Self::project_config_path() {
            Some(path) => lines.push(format!("[FOUND] Project: {}", path.display())),
            None => lines.push(format!("[     ] Project: ./{}", PROJECT_CONFIG_FILES.join(" or ./"))),
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            lines.push(format!("[{}] Global:  {}", mark, path.display()));
        }

        lines.push(format!("[     ] Env:     {}*", ENV_PREFIX));
        lines.push("[     ] Default: built-in defaults".to_string());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn toml_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.workflow.result_limit, 50);
        assert!(config.imaging.url.is_none());
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("imaging-copilot"));
    }

    #[test]
    fn test_explicit_file_overrides_project() {
        let project = toml_file(
            r#"
[imaging]
url = "http://project/mcp/"

[workflow]
result_limit = 10
"#,
        );
        let explicit = toml_file(
            r#"
[imaging]
url = "http://explicit/mcp/"
"#,
        );

        let config: FileConfig = ConfigLoader::figment(None, Some(project.path()), Some(explicit.path()))
            .extract()
            .unwrap();

        assert_eq!(config.imaging.url.as_deref(), Some("http://explicit/mcp/"));
        assert_eq!(config.workflow.result_limit, 10);
        assert_eq!(config.workflow.granularity, "components");
    }

    #[test]
    fn test_missing_global_file_is_ignored() {
        let missing = PathBuf::from("/nonexistent/imaging-copilot/config.toml");
        let config: FileConfig = ConfigLoader::figment(Some(&missing), None, None)
            .extract()
            .unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        let bad = toml_file("[server]\nport = \"not-a-port\"\n");
        let result: Result<FileConfig, _> = ConfigLoader::figment(None, None, Some(bad.path())).extract();
        assert!(result.is_err());
    }

    #[test]
    fn test_describe_sources() {
        let lines = ConfigLoader::describe_sources(None);
        assert!(lines.iter().any(|l| l.contains("Global")));
        assert!(lines.iter().any(|l| l.contains(ENV_PREFIX)));
    }
}
