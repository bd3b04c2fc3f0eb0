use crate::data::{AppSettings, OccasionData, Persistable};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

pub fn run() -> Result<()> {
    let dir = crate::data::persistence::get_data_dir()?;
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create dir {}", dir.display()))?;
    run_in_dir(&dir)?;
    println!("Data files initialized in {}", dir.display());
    Ok(())
}

/// Writes all default data files into `dir`. Exposed for unit testing.
pub(crate) fn run_in_dir(dir: &Path) -> Result<()> {
    AppSettings::default().save_to(dir)?;
    info!(dir = %dir.display(), "config.yaml written");
    OccasionData::builtin().save_to(dir)?;
    info!(dir = %dir.display(), "occasions.yaml written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::Lang;
    use tempfile::TempDir;

    #[test]
    fn test_run_in_dir_creates_all_files() {
        let tmp = TempDir::new().unwrap();
        run_in_dir(tmp.path()).unwrap();
        assert!(tmp.path().join("config.yaml").exists(), "config.yaml missing");
        assert!(
            tmp.path().join("occasions.yaml").exists(),
            "occasions.yaml missing"
        );
    }

    #[test]
    fn test_config_yaml_contains_settings() {
        let tmp = TempDir::new().unwrap();
        run_in_dir(tmp.path()).unwrap();
        let content = fs::read_to_string(tmp.path().join("config.yaml")).unwrap();
        assert!(content.contains("settings"), "config.yaml missing 'settings' key");
        assert!(content.contains("language: en"));
        assert!(content.contains("date_format"));
    }

    #[test]
    fn test_config_yaml_is_parseable_as_settings() {
        let tmp = TempDir::new().unwrap();
        run_in_dir(tmp.path()).unwrap();
        let settings = AppSettings::load_from(tmp.path()).unwrap();
        assert_eq!(settings.language, Lang::En);
    }

    #[test]
    fn test_occasions_file_has_builtin_list() {
        let tmp = TempDir::new().unwrap();
        run_in_dir(tmp.path()).unwrap();
        let content = fs::read_to_string(tmp.path().join("occasions.yaml")).unwrap();
        let data: OccasionData = serde_norway::from_str(&content).unwrap();
        assert_eq!(data.occasions.len(), 10);
        assert_eq!(data.occasions[0].name, "Islamic New Year");
    }

    #[test]
    fn test_run_in_dir_overwrites_existing_files() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("occasions.yaml"), "occasions: []").unwrap();
        run_in_dir(tmp.path()).unwrap();
        let data = OccasionData::load_from(tmp.path()).unwrap();
        assert_eq!(data.occasions.len(), 10);
    }

    #[test]
    fn test_run_in_dir_replaces_malformed_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.yaml"), "settings: [not a map").unwrap();
        assert!(AppSettings::load_from(tmp.path()).is_err());
        run_in_dir(tmp.path()).unwrap();
        assert_eq!(AppSettings::load_from(tmp.path()).unwrap(), AppSettings::default());
    }
}
