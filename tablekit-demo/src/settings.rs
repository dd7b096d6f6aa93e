//! Demo settings stored as JSON in the platform config dir.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ariadom::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read or write settings: {0}")]
    Io(#[from] io::Error),
    #[error("malformed settings file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DemoSettings {
    pub caption: String,
    pub page_size: u32,
    pub page_size_options: Vec<u32>,
    /// JSON dataset to load. The built-in sample is used when unset.
    pub dataset: Option<PathBuf>,
    /// Pagination icon fill, `#rrggbb`.
    pub icon_color: Option<String>,
    /// Pagination button background, `#rrggbb` or `transparent`.
    pub button_color: Option<String>,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            caption: "People".to_string(),
            page_size: 5,
            page_size_options: vec![5, 10, 25, 50],
            dataset: None,
            icon_color: None,
            button_color: None,
        }
    }
}

impl DemoSettings {
    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("[settings] {} not found, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(err) => return Err(err.into()),
        };

        let settings: Self = serde_json::from_str(&contents)?;
        settings.validate()?;
        log::info!("[settings] loaded {}", path.display());
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn icon_color(&self) -> Option<Color> {
        self.icon_color.as_deref().and_then(Color::parse)
    }

    pub fn button_color(&self) -> Option<Color> {
        self.button_color.as_deref().and_then(Color::parse)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        for (name, value) in [
            ("iconColor", &self.icon_color),
            ("buttonColor", &self.button_color),
        ] {
            if let Some(value) = value.as_deref().filter(|v| Color::parse(v).is_none()) {
                return Err(SettingsError::Invalid(format!(
                    "{name} `{value}` is not a color"
                )));
            }
        }
        if self.page_size == 0 {
            return Err(SettingsError::Invalid("pageSize must be positive".into()));
        }
        if self.page_size_options.is_empty() {
            return Err(SettingsError::Invalid(
                "pageSizeOptions must not be empty".into(),
            ));
        }
        if self.page_size_options.contains(&0) {
            return Err(SettingsError::Invalid(
                "pageSizeOptions must be positive".into(),
            ));
        }
        let mut seen = self.page_size_options.clone();
        seen.sort_unstable();
        seen.dedup();
        if seen.len() != self.page_size_options.len() {
            return Err(SettingsError::Invalid(
                "pageSizeOptions must be unique".into(),
            ));
        }
        if !self.page_size_options.contains(&self.page_size) {
            log::warn!(
                "[settings] pageSize {} is not one of {:?}",
                self.page_size,
                self.page_size_options
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = DemoSettings::load(&dir.path().join("settings.json")).unwrap();
        assert_eq!(settings, DemoSettings::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = DemoSettings {
            caption: "Staff".to_string(),
            page_size: 10,
            page_size_options: vec![10, 20],
            dataset: Some(PathBuf::from("/tmp/staff.json")),
            icon_color: Some("#336699".to_string()),
            button_color: Some("transparent".to_string()),
        };
        settings.save(&path).unwrap();
        assert_eq!(DemoSettings::load(&path).unwrap(), settings);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"caption": "Staff"}"#).unwrap();

        let settings = DemoSettings::load(&path).unwrap();
        assert_eq!(settings.caption, "Staff");
        assert_eq!(settings.page_size, DemoSettings::default().page_size);
    }

    #[test]
    fn rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        fs::write(&path, r#"{"pageSize": 0}"#).unwrap();
        assert!(matches!(
            DemoSettings::load(&path),
            Err(SettingsError::Invalid(_))
        ));

        fs::write(&path, r#"{"pageSizeOptions": []}"#).unwrap();
        assert!(matches!(
            DemoSettings::load(&path),
            Err(SettingsError::Invalid(_))
        ));

        fs::write(&path, r#"{"pageSizeOptions": [5, 5]}"#).unwrap();
        assert!(matches!(
            DemoSettings::load(&path),
            Err(SettingsError::Invalid(_))
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            DemoSettings::load(&path),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn parses_theme_colors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r##"{"iconColor": "#336699", "buttonColor": "transparent"}"##).unwrap();

        let settings = DemoSettings::load(&path).unwrap();
        assert_eq!(settings.icon_color(), Some(Color::rgb(0x33, 0x66, 0x99)));
        assert_eq!(settings.button_color(), Some(Color::Transparent));
        assert_eq!(DemoSettings::default().icon_color(), None);
    }

    #[test]
    fn rejects_unparsable_colors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"iconColor": "blurple"}"#).unwrap();
        assert!(matches!(
            DemoSettings::load(&path),
            Err(SettingsError::Invalid(_))
        ));
    }
}
