//! Configuration loading and merging logic.
//!
//! Config files are merged as TOML tables before deserialization, so a key
//! absent from the project file never overwrites the user's value with a
//! serde default. Arrays are replaced wholesale, tables are merged key by key.
//!
//! # Configuration Hierarchy
//!
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.reflect/config.toml`
//! 3. **Project config** - `./.reflect/config.toml`
//! 4. **CLI arguments** - Applied by the front end after loading

use crate::config::types::ReflectConfig;
use crate::config::validation::validate_config;
use crate::errors::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};
use toml::Table;

/// Directory name holding config files under home and the project root.
pub const CONFIG_DIR_NAME: &str = ".reflect";

/// Config file name inside [`CONFIG_DIR_NAME`].
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Load configuration from the hierarchy of config files.
///
/// Loads and merges configuration from:
/// 1. Default values
/// 2. User config (`~/.reflect/config.toml`)
/// 3. Project config (`./.reflect/config.toml`)
///
/// # Errors
///
/// Returns an error if a file cannot be parsed or validation fails.
/// Missing config files are not errors.
pub fn load_hierarchy() -> Result<ReflectConfig, Box<dyn std::error::Error>> {
    let user_path = dirs::home_dir().map(|home| config_path_in(&home));
    let project_path = std::env::current_dir()?.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);

    let config = load_from_paths(user_path.as_deref(), Some(&project_path))?;
    Ok(config)
}

/// Load and merge the given config files, lowest priority first.
///
/// Paths that do not exist are skipped.
pub fn load_from_paths(
    user_path: Option<&Path>,
    project_path: Option<&Path>,
) -> Result<ReflectConfig, ConfigError> {
    let mut merged = Table::new();

    for path in [user_path, project_path].into_iter().flatten() {
        if let Some(table) = read_config_table(path)? {
            tracing::debug!(
                event = "core.config.file_loaded",
                path = %path.display()
            );
            merge_tables(&mut merged, table);
        }
    }

    let config = toml::Value::Table(merged)
        .try_into::<ReflectConfig>()
        .map_err(|e| ConfigError::ConfigParseError {
            message: e.to_string(),
        })?;

    validate_config(&config)?;

    Ok(config)
}

/// `<dir>/.reflect/config.toml`
pub fn config_path_in(dir: &Path) -> PathBuf {
    dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)
}

/// Read a config file into a TOML table. Returns `Ok(None)` if the file does not exist.
fn read_config_table(path: &Path) -> Result<Option<Table>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let table: Table = toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        message: format!("'{}': {}", path.display(), e),
    })?;

    Ok(Some(table))
}

/// Merge `override_table` into `base`, with override values taking precedence.
///
/// Nested tables merge recursively; every other value (arrays included) is replaced.
pub fn merge_tables(base: &mut Table, override_table: Table) {
    for (key, value) in override_table {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(base_inner)), toml::Value::Table(override_inner)) => {
                merge_tables(base_inner, override_inner);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}
