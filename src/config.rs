//! Runtime configuration.
//!
//! Every table and field is optional in the TOML file; missing values fall back to the
//! defaults in [`crate::constants`]. Command line flags are applied on top by `main`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::constants::*;
use crate::error::{Error, Result};

/// Behavior of the previous/next controls at the ends of the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Wrap {
    /// Controls stay enabled and navigation wraps around.
    #[default]
    Circular,
    /// The previous control is disabled on the first card, the next control on the last one.
    Clamped,
}

/// Reading direction, which decides how arrow keys and swipes map to next/previous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// ArrowRight and a leftward drag advance.
    #[default]
    Ltr,
    /// ArrowLeft and a rightward drag advance.
    Rtl,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselConfig {
    pub interval_ms: u64,
    pub wrap: Wrap,
    pub direction: Direction,
    pub swipe_threshold: f32,
    pub card_width: f32,
    pub card_gap: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: (AUTOPLAY_INTERVAL * 1000.0) as u64,
            wrap: Wrap::default(),
            direction: Direction::default(),
            swipe_threshold: SWIPE_THRESHOLD,
            card_width: CARD_WIDTH,
            card_gap: CARD_GAP,
        }
    }
}

impl CarouselConfig {
    pub fn interval_secs(&self) -> f32 {
        self.interval_ms as f32 / 1000.0
    }

    /// Horizontal distance between two neighbouring cards.
    pub fn stride(&self) -> f32 {
        self.card_width + self.card_gap
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TypewriterConfig {
    pub texts: Vec<String>,
    pub type_ms: u64,
    pub delete_ms: u64,
    pub pause_ms: u64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            texts: vec![
                "Flutter Developer".to_string(),
                "Mobile App Developer".to_string(),
                "UI/UX Designer".to_string(),
                "Full Stack Developer".to_string(),
            ],
            type_ms: (TYPE_SPEED * 1000.0) as u64,
            delete_ms: (DELETE_SPEED * 1000.0) as u64,
            pause_ms: (TYPE_PAUSE * 1000.0) as u64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: RENDER_WIDTH / 2,
            height: RENDER_HEIGHT / 2,
            title: "Portfolio".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub carousel: CarouselConfig,
    pub typewriter: TypewriterConfig,
    pub window: WindowConfig,
}

impl Config {
    /// Reads and validates a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&text).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.carousel.interval_ms == 0 {
            return Err(Error::InvalidConfig("carousel.interval_ms must be positive".into()));
        }
        if !(self.carousel.swipe_threshold >= 0.0) {
            return Err(Error::InvalidConfig("carousel.swipe_threshold must not be negative".into()));
        }
        if !(self.carousel.card_width > 0.0) || self.carousel.card_gap < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "carousel card geometry {}+{} is not usable",
                self.carousel.card_width, self.carousel.card_gap
            )));
        }
        let t = &self.typewriter;
        if t.type_ms == 0 || t.delete_ms == 0 {
            return Err(Error::InvalidConfig("typewriter speeds must be positive".into()));
        }
        if self.window.width <= 0 || self.window.height <= 0 {
            return Err(Error::InvalidConfig(format!(
                "window size {}x{} is not usable",
                self.window.width, self.window.height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.carousel.interval_ms, 5000);
        assert_eq!(config.carousel.stride(), 382.0);
    }

    #[test]
    fn partial_tables_keep_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            [carousel]
            interval_ms = 3000
            wrap = "clamped"
            direction = "rtl"
            "#,
        )
        .unwrap();
        assert_eq!(config.carousel.interval_secs(), 3.0);
        assert_eq!(config.carousel.wrap, Wrap::Clamped);
        assert_eq!(config.carousel.direction, Direction::Rtl);
        assert_eq!(config.carousel.swipe_threshold, SWIPE_THRESHOLD);
        assert_eq!(config.typewriter, TypewriterConfig::default());
    }

    #[test]
    fn load_rejects_zero_interval() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[carousel]\ninterval_ms = 0").unwrap();
        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn load_reports_unknown_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[carousel]\nspeed = 2").unwrap();
        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
