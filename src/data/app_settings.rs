use crate::calc::Lang;
use crate::data::persistence::{get_data_dir, Persistable};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    pub language: Lang,
    /// Template for `HijriDate::format` (tokens YYYY, MM, M, DD, D, MONTH, DAY).
    pub date_format: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            language: Lang::En,
            date_format: "DAY, D MONTH YYYY".to_string(),
        }
    }
}

/// Wrapper that reads the `settings` key from config.yaml.
#[derive(Serialize, Deserialize, Default, Debug)]
pub(crate) struct SettingsWrapper {
    #[serde(default)]
    pub(crate) settings: AppSettings,
}

impl Persistable for SettingsWrapper {
    fn filename() -> &'static str {
        "config.yaml"
    }
}

impl AppSettings {
    /// Loads the settings from config.yaml in the data directory.
    pub fn load() -> Result<Self> {
        Self::load_from(&get_data_dir()?)
    }

    pub fn load_from(dir: &Path) -> Result<Self> {
        Ok(SettingsWrapper::load_from(dir)?.settings)
    }

    pub fn save_to(&self, dir: &Path) -> Result<()> {
        let wrapper = SettingsWrapper {
            settings: self.clone(),
        };
        wrapper.save_to(dir)
    }

    /// Applies a `--lang` override from the command line.
    pub fn with_language(mut self, lang: Option<Lang>) -> Self {
        if let Some(lang) = lang {
            self.language = lang;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_app_settings_default_values() {
        let settings = AppSettings::default();
        assert_eq!(settings.language, Lang::En);
        assert_eq!(settings.date_format, "DAY, D MONTH YYYY");
    }

    #[test]
    fn test_settings_wrapper_yaml_roundtrip() {
        let wrapper = SettingsWrapper {
            settings: AppSettings {
                language: Lang::Ar,
                date_format: "D MONTH".to_string(),
            },
        };
        let yaml = serde_norway::to_string(&wrapper).unwrap();
        let parsed: SettingsWrapper = serde_norway::from_str(&yaml).unwrap();
        assert_eq!(parsed.settings, wrapper.settings);
    }

    #[test]
    fn test_settings_wrapper_missing_key_uses_default() {
        let yaml = "other: 1";
        let wrapper: SettingsWrapper = serde_norway::from_str(yaml).unwrap();
        assert_eq!(wrapper.settings, AppSettings::default());
    }

    #[test]
    fn test_settings_partial_section_fills_defaults() {
        let yaml = "settings:\n  language: ar\n";
        let wrapper: SettingsWrapper = serde_norway::from_str(yaml).unwrap();
        assert_eq!(wrapper.settings.language, Lang::Ar);
        assert_eq!(wrapper.settings.date_format, "DAY, D MONTH YYYY");
    }

    #[test]
    fn test_save_to_and_load_from() {
        let tmp = TempDir::new().unwrap();
        let settings = AppSettings {
            language: Lang::Ar,
            date_format: "YYYY-MM-DD".to_string(),
        };
        settings.save_to(tmp.path()).unwrap();
        assert_eq!(AppSettings::load_from(tmp.path()).unwrap(), settings);
    }

    #[test]
    fn test_load_from_missing_file_is_default() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(AppSettings::load_from(tmp.path()).unwrap(), AppSettings::default());
    }

    #[test]
    fn test_with_language_override() {
        let s = AppSettings::default().with_language(Some(Lang::Ar));
        assert_eq!(s.language, Lang::Ar);
        let s = AppSettings::default().with_language(None);
        assert_eq!(s.language, Lang::En);
    }
}
