//! Configuration loading and parsing

use anyhow::{Context, Result};
use aoc_puzzles::SolverConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main application configuration (loaded from config.toml)
///
/// The `[dial]` and `[ids]` tables map straight onto the library's
/// `SolverConfig`; `[output]` belongs to the CLI.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(flatten)]
    pub solver: SolverConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    config
        .solver
        .dial
        .validate()
        .with_context(|| format!("Invalid [dial] section in {:?}", path))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_puzzles::{CountingMethod, RepeatRule};
    use std::io::Write;

    #[test]
    fn test_config_deserialization() {
        let toml_content = r#"
            [dial]
            start = 10
            method = "end-on-zero"

            [ids]
            rule = "at-least-twice"
            merge_overlaps = true

            [output]
            format = "json"
        "#;

        let config: AppConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.solver.dial.start, 10);
        assert_eq!(config.solver.dial.size, 100);
        assert_eq!(config.solver.dial.method, CountingMethod::EndOnZero);
        assert_eq!(config.solver.ids.rule, RepeatRule::AtLeastTwice);
        assert!(config.solver.ids.merge_overlaps);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.solver, SolverConfig::default());
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_load_config_rejects_bad_dial() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[dial]\nstart = 100\nsize = 100").unwrap();

        let err = load_config(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("outside a dial"));
    }

    #[test]
    fn test_load_config_unknown_method() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[dial]\nmethod = \"sideways\"").unwrap();

        assert!(load_config(file.path()).is_err());
    }
}
