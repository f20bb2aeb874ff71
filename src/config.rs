use crate::carousel::{WorkItem, default_work_items};
use crate::section::NavThresholds;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub navigation: NavigationConfig,
    pub viewport: ViewportConfig,
    pub practice: PracticeConfig,
    pub works: Vec<WorkItem>,
    pub services: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        let works = default_work_items();
        let services = works.iter().map(|w| w.title.clone()).collect();
        Self {
            navigation: NavigationConfig::default(),
            viewport: ViewportConfig::default(),
            practice: PracticeConfig::default(),
            works,
            services,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub wheel_threshold: f64,
    pub swipe_threshold: f64,
    pub scroll_cooldown_ms: u64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            wheel_threshold: 50.0,
            swipe_threshold: 50.0,
            scroll_cooldown_ms: 800,
        }
    }
}

impl NavigationConfig {
    #[must_use]
    pub const fn thresholds(&self) -> NavThresholds {
        NavThresholds {
            wheel: self.wheel_threshold,
            swipe: self.swipe_threshold,
            cooldown: Duration::from_millis(self.scroll_cooldown_ms),
        }
    }
}

/// Conversion from terminal cells to the pixel units the breakpoints use.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub desktop_breakpoint: u32,
    pub mobile_breakpoint: u32,
    pub cell_width_px: u32,
    pub cell_height_px: u32,
    pub wheel_delta_per_tick: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            desktop_breakpoint: 1024,
            mobile_breakpoint: 768,
            cell_width_px: 8,
            cell_height_px: 16,
            wheel_delta_per_tick: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PracticeConfig {
    pub name: String,
    pub tagline: String,
    pub about: String,
    pub email: String,
    pub phone: String,
    pub area: String,
}

impl Default for PracticeConfig {
    fn default() -> Self {
        Self {
            name: "Pediatric Occupational Therapist".to_string(),
            tagline: "Helping children grow, play and thrive at home.".to_string(),
            about: "I am a licensed pediatric occupational therapist providing in-home \
                    assessments and therapy. Sessions take place where your child feels \
                    most comfortable, building the everyday skills they need for school, \
                    play and family life."
                .to_string(),
            email: "hello@example.com".to_string(),
            phone: "+1 555 0100".to_string(),
            area: "Home visits across the metro area".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration.
    ///
    /// An explicit `path` must exist and parse. Without one, the default
    /// location is tried and any problem there falls back to defaults.
    ///
    /// # Errors
    /// Returns an error if an explicit file cannot be read or parsed, or if
    /// the loaded values are invalid.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::load_default(),
        };
        config.validate()?;
        Ok(config)
    }

    fn load_default() -> Self {
        let path = default_path();
        if !path.exists() {
            return Self::default();
        }
        match Self::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("ignoring config at {}: {e:#}", path.display());
                Self::default()
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    /// # Errors
    /// Returns an error if `content` is not valid TOML for this schema.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// # Errors
    /// Returns the first value that would break navigation or layout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.works.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "works",
                reason: "at least one work item is required".to_string(),
            });
        }
        if self.viewport.cell_width_px == 0 || self.viewport.cell_height_px == 0 {
            return Err(ConfigError::InvalidValue {
                field: "viewport",
                reason: "cell size must be non-zero".to_string(),
            });
        }
        let nav = &self.navigation;
        if !nav.wheel_threshold.is_finite() || !nav.swipe_threshold.is_finite() {
            return Err(ConfigError::InvalidValue {
                field: "navigation",
                reason: "thresholds must be finite numbers".to_string(),
            });
        }
        if nav.wheel_threshold < 0.0 || nav.swipe_threshold < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "navigation",
                reason: "thresholds cannot be negative".to_string(),
            });
        }
        Ok(())
    }
}

#[must_use]
pub fn default_path() -> PathBuf {
    crate::utils::get_config_dir().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_constants() {
        let config = Config::default();
        let nav = config.navigation.thresholds();
        assert_eq!(nav, NavThresholds::default());
        assert_eq!(config.viewport.desktop_breakpoint, 1024);
        assert_eq!(config.viewport.mobile_breakpoint, 768);
        assert_eq!(config.works.len(), 3);
        assert_eq!(config.services.len(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config = Config::from_toml(
            r#"
            [navigation]
            scroll_cooldown_ms = 500

            [practice]
            name = "Little Steps OT"
            "#,
        )
        .expect("valid toml");

        assert_eq!(config.navigation.scroll_cooldown_ms, 500);
        assert_eq!(config.navigation.wheel_threshold, 50.0);
        assert_eq!(config.practice.name, "Little Steps OT");
        assert_eq!(config.practice.email, PracticeConfig::default().email);
        assert_eq!(config.works, default_work_items());
    }

    #[test]
    fn works_can_be_replaced() {
        let config = Config::from_toml(
            r#"
            services = ["Handwriting"]

            [[works]]
            image = "a.jpg"
            title = "Handwriting"
            description = "Fine motor work."
            "#,
        )
        .expect("valid toml");

        assert_eq!(config.works.len(), 1);
        assert_eq!(config.services, ["Handwriting"]);
    }

    #[test]
    fn empty_works_is_invalid() {
        let config = Config::from_toml("works = []").expect("valid toml");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field: "works", .. })
        ));
    }

    #[test]
    fn zero_cell_size_is_invalid() {
        let config = Config::from_toml("[viewport]\ncell_width_px = 0").expect("valid toml");
        assert!(config.validate().is_err());
    }

    #[test]
    fn non_finite_thresholds_are_invalid() {
        for toml in [
            "[navigation]\nwheel_threshold = nan",
            "[navigation]\nswipe_threshold = inf",
        ] {
            let config = Config::from_toml(toml).expect("valid toml");
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidValue { field: "navigation", .. })
            ));
        }
    }

    #[test]
    fn negative_threshold_is_invalid() {
        let config =
            Config::from_toml("[navigation]\nwheel_threshold = -1.0").expect("valid toml");
        assert!(config.validate().is_err());
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(Config::from_toml("[navigation\n").is_err());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let missing = Path::new("/nonexistent/pedsite/config.toml");
        assert!(Config::load(Some(missing)).is_err());
    }
}
