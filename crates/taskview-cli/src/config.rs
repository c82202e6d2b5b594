use anyhow::{Context, Result, anyhow};
use chrono::{FixedOffset, Locale};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use taskview_engine::ViewerContext;

/// Resolve the config file location
///
/// Priority:
/// 1. Explicit path (from --config)
/// 2. TASKVIEW_CONFIG environment variable
/// 3. `<config dir>/taskview/config.toml`
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("TASKVIEW_CONFIG") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("taskview").join("config.toml"));
    }

    Err(anyhow!(
        "Could not determine config path: no --config, TASKVIEW_CONFIG or user config directory"
    ))
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub viewer: ViewerConfig,
}

/// Operator locale and timezone used for every rendered timestamp
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// POSIX locale name, e.g. `en_US` or `de_DE`
    #[serde(default)]
    pub locale: Option<String>,

    /// Offset from UTC in minutes, east positive
    #[serde(default)]
    pub utc_offset_minutes: i32,

    #[serde(default)]
    pub timezone_name: Option<String>,

    #[serde(default)]
    pub timezone_abbreviation: Option<String>,
}

impl Config {
    pub fn load(explicit_path: Option<&str>) -> Result<Self> {
        let path = resolve_config_path(explicit_path)?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file; using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }
}

impl ViewerConfig {
    pub fn to_context(&self) -> Result<ViewerContext> {
        let defaults = ViewerContext::default();

        let locale = match &self.locale {
            Some(name) => Locale::try_from(name.as_str())
                .map_err(|_| anyhow!("Unknown locale '{}'", name))?,
            None => defaults.locale,
        };

        let offset = FixedOffset::east_opt(self.utc_offset_minutes.saturating_mul(60))
            .with_context(|| format!("UTC offset out of range: {} minutes", self.utc_offset_minutes))?;

        // Zone names only default to UTC's when the offset is UTC
        let (zone_name, zone_abbreviation) = if self.utc_offset_minutes == 0 {
            (
                self.timezone_name.clone().unwrap_or(defaults.zone_name),
                self.timezone_abbreviation
                    .clone()
                    .unwrap_or(defaults.zone_abbreviation),
            )
        } else {
            let fallback = offset.to_string();
            (
                self.timezone_name.clone().unwrap_or_else(|| fallback.clone()),
                self.timezone_abbreviation.clone().unwrap_or(fallback),
            )
        };

        Ok(ViewerContext::new(
            locale,
            offset,
            zone_name,
            zone_abbreviation,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskview_engine::TimestampUnit;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() -> Result<()> {
        let temp = TempDir::new()?;
        let config = Config::load_from(&temp.path().join("absent.toml"))?;
        assert_eq!(config.viewer, ViewerConfig::default());

        let viewer = config.viewer.to_context()?;
        assert_eq!(viewer.zone_abbreviation, "UTC");
        Ok(())
    }

    #[test]
    fn test_load_viewer_section() -> Result<()> {
        let temp = TempDir::new()?;
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[viewer]
locale = "de_DE"
utc_offset_minutes = 60
timezone_name = "Mitteleuropäische Normalzeit"
timezone_abbreviation = "MEZ"
"#,
        )?;

        let viewer = Config::load_from(&path)?.viewer.to_context()?;
        assert_eq!(viewer.locale, Locale::de_DE);
        assert_eq!(viewer.offset.local_minus_utc(), 3600);
        assert_eq!(viewer.zone_abbreviation, "MEZ");
        assert_eq!(
            viewer.format_short(Some(1_700_000_000), TimestampUnit::Seconds),
            "Di 14 Nov 2023 23:13:20 MEZ"
        );
        Ok(())
    }

    #[test]
    fn test_offset_without_names_uses_offset() -> Result<()> {
        let viewer = ViewerConfig {
            utc_offset_minutes: -300,
            ..Default::default()
        }
        .to_context()?;
        assert_eq!(viewer.zone_abbreviation, "-05:00");
        Ok(())
    }

    #[test]
    fn test_invalid_values_are_errors() {
        let bad_locale = ViewerConfig {
            locale: Some("xx_XX".to_string()),
            ..Default::default()
        };
        assert!(bad_locale.to_context().is_err());

        let bad_offset = ViewerConfig {
            utc_offset_minutes: 24 * 60,
            ..Default::default()
        };
        assert!(bad_offset.to_context().is_err());
    }

    #[test]
    fn test_malformed_toml_is_an_error() -> Result<()> {
        let temp = TempDir::new()?;
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[viewer\nlocale = ")?;
        assert!(Config::load_from(&path).is_err());
        Ok(())
    }

    #[test]
    fn test_explicit_path_wins() -> Result<()> {
        assert_eq!(
            resolve_config_path(Some("/etc/taskview.toml"))?,
            PathBuf::from("/etc/taskview.toml")
        );
        Ok(())
    }
}
