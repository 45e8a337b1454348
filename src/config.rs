use crate::catalog::SearchField;
use crate::core::{Result, ShelfError};
use crate::export::ExportFormat;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Database file used when neither the config nor the command line name one.
pub const DEFAULT_DB_FILE: &str = "library.db";

/// Top-level configuration structure parsed from a TOML file.
///
/// Every section is optional; missing sections and keys take their defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub library: LibraryConfig,
    pub ui: UIConfig,
    pub export: ExportConfig,
    pub logging: LoggingConfig,
}

/// Catalog storage configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    pub db_path: Option<PathBuf>,
}

/// UI-related configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct UIConfig {
    pub show_status_tips: bool,
    pub default_search_field: Option<String>,
}

impl Default for UIConfig {
    fn default() -> Self {
        UIConfig {
            show_status_tips: true,
            default_search_field: None,
        }
    }
}

/// Library export configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub format: Option<String>,
    pub dir: Option<PathBuf>,
}

/// Log output configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Database path, preferring an explicit override (the command line).
    pub fn db_path(&self, cli_override: Option<&str>) -> PathBuf {
        cli_override
            .map(PathBuf::from)
            .or_else(|| self.library.db_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE))
    }

    /// Search field the Search view starts on.
    pub fn default_search_field(&self) -> Result<SearchField> {
        match &self.ui.default_search_field {
            Some(name) => name
                .parse()
                .map_err(|e: ShelfError| ShelfError::Config(e.to_string())),
            None => Ok(SearchField::default()),
        }
    }

    /// Format used when exporting from the Library view.
    pub fn export_format(&self) -> Result<ExportFormat> {
        match &self.export.format {
            Some(name) => name
                .parse()
                .map_err(|e: ShelfError| ShelfError::Config(e.to_string())),
            None => Ok(ExportFormat::default()),
        }
    }

    /// Directory exports are written to, the working directory by default.
    pub fn export_dir(&self) -> PathBuf {
        self.export.dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Checks the values that can only be validated after parsing.
    pub fn validate(&self) -> Result<()> {
        self.default_search_field()?;
        self.export_format()?;
        Ok(())
    }
}

/// Location of the user's config file, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tuishelf").join("config.toml"))
}

/// Loads configuration from a TOML file at the given path.
///
/// # Arguments
///
/// * `path` - The file path to the TOML configuration file.
///
/// # Example
///
/// ```no_run
/// let config = tuishelf::config::load_config("config.toml").expect("Failed to load config");
/// println!("{:?}", config);
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parses and validates configuration text.
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config =
        toml::from_str(content).map_err(|e| ShelfError::Config(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

/// Loads the user's config file, falling back to defaults when it is absent.
pub fn load_default_config() -> Result<Config> {
    match default_config_path() {
        Some(path) if path.exists() => load_config(path),
        _ => Ok(Config::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CONFIG: &str = r#"
[library]
db_path = "/home/reader/books.db"

[ui]
show_status_tips = false
default_search_field = "author"

[export]
format = "json"
dir = "/tmp/exports"

[logging]
level = "debug"
file = "/tmp/tuishelf.log"
"#;

    #[test]
    fn test_load_config_from_str() {
        let config = parse_config(SAMPLE_CONFIG).expect("Failed to parse sample config");
        assert_eq!(config.db_path(None), PathBuf::from("/home/reader/books.db"));
        assert!(!config.ui.show_status_tips);
        assert_eq!(config.default_search_field().unwrap(), SearchField::Author);
        assert_eq!(config.export_format().unwrap(), ExportFormat::Json);
        assert_eq!(config.export_dir(), PathBuf::from("/tmp/exports"));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/tuishelf.log")));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.db_path(None), PathBuf::from(DEFAULT_DB_FILE));
        assert!(config.ui.show_status_tips);
        assert_eq!(config.default_search_field().unwrap(), SearchField::Title);
        assert_eq!(config.export_format().unwrap(), ExportFormat::Csv);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_cli_path_overrides_config() {
        let config = parse_config(SAMPLE_CONFIG).unwrap();
        assert_eq!(
            config.db_path(Some("other.db")),
            PathBuf::from("other.db")
        );
    }

    #[test]
    fn test_invalid_values_are_config_errors() {
        let bad_field = parse_config("[ui]\ndefault_search_field = \"isbn\"\n");
        assert!(matches!(bad_field, Err(ShelfError::Config(_))));

        let bad_format = parse_config("[export]\nformat = \"xml\"\n");
        assert!(matches!(bad_format, Err(ShelfError::Config(_))));

        let bad_toml = parse_config("[ui\n");
        assert!(matches!(bad_toml, Err(ShelfError::Config(_))));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("/nonexistent/tuishelf/config.toml");
        assert!(matches!(result, Err(ShelfError::Io(_))));
    }
}
