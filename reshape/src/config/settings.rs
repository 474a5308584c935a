// Dashboard settings, loaded from an optional JSON file in the working
// directory with hand-written defaults as the fallback.
use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_SETTINGS_FILE: &str = "dashboard.json";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub costs_path: PathBuf,
    pub revenue_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            host: "127.0.0.1".to_string(),
            port: 3030,
            costs_path: PathBuf::from("costs_2022.csv"),
            revenue_path: PathBuf::from("revenue_2022.csv"),
        }
    }
}

impl Settings {
    /// Reads `dashboard.json` from the working directory; absence is not an
    /// error, only a malformed file is.
    pub fn load() -> anyhow::Result<Settings> {
        Self::load_from(Path::new(DEFAULT_SETTINGS_FILE))
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Settings> {
        if !path.exists() {
            return Ok(Settings::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
        let settings = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse settings file '{}'", path.display()))?;
        Ok(settings)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let settings = Settings::load_from(Path::new("does_not_exist.json")).unwrap();
        assert_eq!(settings.host, "127.0.0.1");
        assert_eq!(settings.port, 3030);
        assert_eq!(settings.costs_path, PathBuf::from("costs_2022.csv"));
        assert_eq!(settings.revenue_path, PathBuf::from("revenue_2022.csv"));
    }

    #[test]
    fn test_partial_file_overrides_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "port": 8050, "costs_path": "data/costs.csv" }}"#).unwrap();
        let settings = Settings::load_from(file.path()).unwrap();
        assert_eq!(settings.port, 8050);
        assert_eq!(settings.costs_path, PathBuf::from("data/costs.csv"));
        assert_eq!(settings.host, "127.0.0.1");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(Settings::load_from(file.path()).is_err());
    }
}
