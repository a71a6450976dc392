//! Importer configuration file parsing.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable holding extra search-path entries, in the
/// platform's path-list syntax (`:`-separated on Unix).
pub const SEARCH_PATH_ENV: &str = "LAZYIMPORT_PATH";

/// File extension of module source files.
pub const DEFAULT_EXTENSION: &str = "lmod";

lazy_static! {
    /// Configuration used by the thread-default importer: built-in
    /// defaults plus `LAZYIMPORT_PATH`, read once per process.
    pub static ref DEFAULT_CONFIG: ImportConfig = ImportConfig::from_env();
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Where and how source modules are looked up.
///
/// Expected format:
/// ```toml
/// search_path = ["./modules", "/usr/share/lazyimport"]
/// extension = "lmod"
/// include_cwd = true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Directories searched in order.
    pub search_path: Vec<PathBuf>,
    /// Extension of module source files, without the dot.
    pub extension: String,
    /// Append the current working directory to the search path.
    pub include_cwd: bool,
}

impl Default for ImportConfig {
    fn default() -> Self {
        ImportConfig {
            search_path: Vec::new(),
            extension: DEFAULT_EXTENSION.to_string(),
            include_cwd: true,
        }
    }
}

impl ImportConfig {
    /// Load configuration from a TOML file.
    ///
    /// Relative search-path entries are taken relative to the file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::parse(&content)?;
        if let Some(base) = path.parent() {
            config.search_path = config
                .search_path
                .into_iter()
                .map(|p| if p.is_relative() { base.join(p) } else { p })
                .collect();
        }
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Defaults plus any `LAZYIMPORT_PATH` entries.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Put `LAZYIMPORT_PATH` entries ahead of the configured search path.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(raw) = env::var_os(SEARCH_PATH_ENV) {
            let mut search_path: Vec<PathBuf> =
                env::split_paths(&raw).filter(|p| !p.as_os_str().is_empty()).collect();
            search_path.append(&mut self.search_path);
            self.search_path = search_path;
        }
        self
    }

    pub fn with_search_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_path.push(dir.into());
        self
    }

    /// The directories actually searched, in order.
    pub fn effective_search_path(&self) -> Vec<PathBuf> {
        let mut dirs = self.search_path.clone();
        if self.include_cwd {
            if let Ok(cwd) = env::current_dir() {
                if !dirs.contains(&cwd) {
                    dirs.push(cwd);
                }
            }
        }
        dirs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config() {
        let config = ImportConfig::parse("").unwrap();
        assert_eq!(config, ImportConfig::default());
        assert_eq!(config.extension, "lmod");
        assert!(config.include_cwd);
    }

    #[test]
    fn test_parse_full_config() {
        let config = ImportConfig::parse(
            r#"
search_path = ["/opt/mods", "rel"]
extension = "mod"
include_cwd = false
"#,
        )
        .unwrap();
        assert_eq!(
            config.search_path,
            vec![PathBuf::from("/opt/mods"), PathBuf::from("rel")]
        );
        assert_eq!(config.extension, "mod");
        assert_eq!(config.effective_search_path().len(), 2);
    }

    #[test]
    fn test_parse_rejects_wrong_types() {
        let err = ImportConfig::parse("include_cwd = \"yes\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_resolves_relative_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lazyimport.toml");
        fs::write(&path, "search_path = [\"modules\"]\ninclude_cwd = false\n").unwrap();

        let config = ImportConfig::load(&path).unwrap();
        assert_eq!(config.search_path, vec![dir.path().join("modules")]);
    }

    #[test]
    fn test_load_missing_file() {
        let err = ImportConfig::load(Path::new("/nonexistent/lazyimport.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
