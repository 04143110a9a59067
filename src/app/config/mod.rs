// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Transition timings and auto-advance
//! - `[content]` - Where the catalog comes from
//! - `[images]` - Requested image sizes and the decoded image cache
//! - `[site]` - Artist name, biography and contact links
//!
//! Every field is optional; a missing field takes its default and out-of-range
//! numbers are clamped through the newtypes in [`values`].
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` on the command line
//! 3. Set `ICED_FOLIO_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_folio::app::config;
//!
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("settings.toml ignored: {key}");
//! }
//! println!("crossfade: {:?}", config.timing().crossfade);
//! ```

pub mod defaults;
pub mod values;

pub use defaults::*;

use crate::app::paths;
use crate::content::image_url::{ImageFormat, ImageParams};
use crate::content::{RemoteSource, Source, SourceKind};
use crate::error::{Error, Result};
use crate::gallery::Timing;
use crate::media::CacheConfig;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use values::{
    AutoAdvanceSecs, CacheImages, CacheMegabytes, CrossfadeMs, DisplayWidth, FadeInMs,
    FlipDelayMs, ImageQuality, ManualPauseSecs, RevalidateSecs, ThumbnailWidth,
};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Gallery transitions and auto-advance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GalleryConfig {
    /// Advance automatically in wide layouts.
    #[serde(
        default = "default_auto_advance",
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_advance: Option<bool>,

    #[serde(
        default = "default_auto_advance_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_advance_secs: Option<u32>,

    #[serde(
        default = "default_manual_pause_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub manual_pause_secs: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crossfade_ms: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flip_delay_ms: Option<u32>,

    /// Fade-in of a freshly loaded image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fade_in_ms: Option<u32>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            auto_advance: default_auto_advance(),
            auto_advance_secs: default_auto_advance_secs(),
            manual_pause_secs: default_manual_pause_secs(),
            crossfade_ms: None,
            flip_delay_ms: None,
            fade_in_ms: None,
        }
    }
}

/// Content source selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceKind>,

    /// TOML catalog read when `source = "file"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,

    /// Query endpoint used when `source = "remote"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Base URL for image asset ids returned by the remote backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_base: Option<String>,

    #[serde(
        default = "default_revalidate_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub revalidate_secs: Option<u32>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            source: None,
            catalog_path: None,
            endpoint: None,
            asset_base: None,
            revalidate_secs: default_revalidate_secs(),
        }
    }
}

/// Requested image sizes and cache limits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ImagesConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_width: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_width: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<ImageFormat>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_mb: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_images: Option<u32>,
}

/// Artist details for the About and Contact screens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SiteConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biography: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_url: Option<String>,
}

impl SiteConfig {
    #[must_use]
    pub fn artist_name(&self) -> &str {
        non_empty(self.artist_name.as_deref()).unwrap_or(DEFAULT_ARTIST_NAME)
    }

    #[must_use]
    pub fn biography(&self) -> &str {
        non_empty(self.biography.as_deref()).unwrap_or(DEFAULT_BIOGRAPHY)
    }

    #[must_use]
    pub fn contact_email(&self) -> &str {
        non_empty(self.contact_email.as_deref()).unwrap_or(DEFAULT_CONTACT_EMAIL)
    }

    /// Social profiles as `(label, url)`. An empty string hides a link.
    #[must_use]
    pub fn social_links(&self) -> Vec<(&'static str, &str)> {
        let instagram = self.instagram_url.as_deref().unwrap_or(DEFAULT_INSTAGRAM_URL);
        let twitter = self.twitter_url.as_deref().unwrap_or(DEFAULT_TWITTER_URL);
        [("Instagram", instagram), ("Twitter", twitter)]
            .into_iter()
            .filter(|(_, url)| !url.trim().is_empty())
            .collect()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Source choices given on the command line. They win over `[content]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceOverrides {
    pub catalog: Option<PathBuf>,
    pub endpoint: Option<String>,
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Application configuration with sectioned layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub content: ContentConfig,

    #[serde(default)]
    pub images: ImagesConfig,

    #[serde(default)]
    pub site: SiteConfig,
}

impl Config {
    /// Transition and auto-advance durations, clamped.
    #[must_use]
    pub fn timing(&self) -> Timing {
        Timing {
            flip_delay: FlipDelayMs::from(self.gallery.flip_delay_ms).as_duration(),
            crossfade: CrossfadeMs::from(self.gallery.crossfade_ms).as_duration(),
            auto_advance: AutoAdvanceSecs::from(self.gallery.auto_advance_secs).as_duration(),
            manual_pause: ManualPauseSecs::from(self.gallery.manual_pause_secs).as_duration(),
        }
    }

    #[must_use]
    pub fn auto_advance(&self) -> bool {
        self.gallery.auto_advance.unwrap_or(DEFAULT_AUTO_ADVANCE)
    }

    #[must_use]
    pub fn fade_in(&self) -> Duration {
        FadeInMs::from(self.gallery.fade_in_ms).as_duration()
    }

    #[must_use]
    pub fn revalidate_interval(&self) -> Duration {
        RevalidateSecs::from(self.content.revalidate_secs).as_duration()
    }

    /// Parameters for the stage image.
    #[must_use]
    pub fn display_params(&self) -> ImageParams {
        ImageParams {
            width: DisplayWidth::from(self.images.display_width).value(),
            quality: ImageQuality::from(self.images.quality).value(),
            format: self.images.format.unwrap_or_default(),
        }
    }

    /// Parameters for thumbnails in the filmstrip.
    #[must_use]
    pub fn thumbnail_params(&self) -> ImageParams {
        ImageParams {
            width: ThumbnailWidth::from(self.images.thumbnail_width).value(),
            ..self.display_params()
        }
    }

    #[must_use]
    pub fn cache_config(&self) -> CacheConfig {
        CacheConfig::new(
            CacheMegabytes::from(self.images.cache_mb).as_bytes(),
            CacheImages::from(self.images.cache_images).value() as usize,
        )
    }

    /// Resolves the content source.
    ///
    /// `--catalog` beats `--endpoint`, both beat `[content]`. A file source
    /// without a path degrades to the built-in sample.
    #[must_use]
    pub fn source(&self, overrides: &SourceOverrides) -> Source {
        let asset_base = self.content.asset_base.clone();
        if let Some(path) = &overrides.catalog {
            return Source::File(path.clone());
        }
        if let Some(endpoint) = &overrides.endpoint {
            return Source::Remote(RemoteSource::new(endpoint.clone(), asset_base));
        }

        match self.content.source.unwrap_or_default() {
            SourceKind::Sample => Source::Sample,
            SourceKind::File => match &self.content.catalog_path {
                Some(path) => Source::File(path.clone()),
                None => {
                    tracing::warn!("content source is \"file\" but catalog_path is unset");
                    Source::Sample
                }
            },
            SourceKind::Remote => Source::Remote(RemoteSource::new(
                self.content.endpoint.clone().unwrap_or_default(),
                asset_base,
            )),
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_auto_advance() -> Option<bool> {
    Some(DEFAULT_AUTO_ADVANCE)
}

fn default_auto_advance_secs() -> Option<u32> {
    Some(DEFAULT_AUTO_ADVANCE_SECS)
}

fn default_manual_pause_secs() -> Option<u32> {
    Some(DEFAULT_MANUAL_PAUSE_SECS)
}

fn default_revalidate_secs() -> Option<u32> {
    Some(DEFAULT_REVALIDATE_SECS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning to show.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "settings unreadable, using defaults");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            gallery: GalleryConfig {
                auto_advance: Some(false),
                crossfade_ms: Some(450),
                ..GalleryConfig::default()
            },
            content: ContentConfig {
                source: Some(SourceKind::File),
                catalog_path: Some(PathBuf::from("/srv/catalog.toml")),
                ..ContentConfig::default()
            },
            images: ImagesConfig {
                format: Some(ImageFormat::Webp),
                ..ImagesConfig::default()
            },
            site: SiteConfig {
                artist_name: Some("R. Okafor".into()),
                ..SiteConfig::default()
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(message.contains("expected")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[gallery]\ncrossfade_ms = 500\n").expect("write file");

        let config = load_from_path(&config_path).expect("load");
        assert_eq!(config.gallery.crossfade_ms, Some(500));
        assert_eq!(config.gallery.auto_advance, Some(true));
        assert_eq!(config.gallery.auto_advance_secs, Some(DEFAULT_AUTO_ADVANCE_SECS));
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.timing().crossfade, Duration::from_millis(500));
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config = toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("parse");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
        assert!(toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n").is_err());
    }

    #[test]
    fn default_timing_matches_gallery_defaults() {
        assert_eq!(Config::default().timing(), Timing::default());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config {
            gallery: GalleryConfig {
                auto_advance_secs: Some(0),
                crossfade_ms: Some(60_000),
                ..GalleryConfig::default()
            },
            images: ImagesConfig {
                quality: Some(0),
                display_width: Some(100_000),
                ..ImagesConfig::default()
            },
            ..Config::default()
        };

        let timing = config.timing();
        assert_eq!(timing.auto_advance, Duration::from_secs(u64::from(MIN_AUTO_ADVANCE_SECS)));
        assert_eq!(timing.crossfade, Duration::from_millis(u64::from(MAX_CROSSFADE_MS)));
        let params = config.display_params();
        assert_eq!(params.quality, MIN_IMAGE_QUALITY);
        assert_eq!(params.width, MAX_DISPLAY_WIDTH);
    }

    #[test]
    fn thumbnail_params_share_quality_and_format() {
        let config = Config {
            images: ImagesConfig {
                quality: Some(60),
                format: Some(ImageFormat::Jpg),
                ..ImagesConfig::default()
            },
            ..Config::default()
        };
        let thumb = config.thumbnail_params();
        assert_eq!(thumb.width, DEFAULT_THUMBNAIL_WIDTH);
        assert_eq!(thumb.quality, 60);
        assert_eq!(thumb.format, ImageFormat::Jpg);
    }

    #[test]
    fn cache_config_converts_megabytes() {
        let config = Config::default();
        let cache = config.cache_config();
        assert_eq!(cache.max_bytes, DEFAULT_CACHE_MB as usize * 1024 * 1024);
        assert_eq!(cache.max_images, DEFAULT_CACHE_IMAGES as usize);
    }

    #[test]
    fn source_defaults_to_sample() {
        assert_eq!(
            Config::default().source(&SourceOverrides::default()),
            Source::Sample
        );
    }

    #[test]
    fn file_source_without_path_degrades_to_sample() {
        let config = Config {
            content: ContentConfig {
                source: Some(SourceKind::File),
                ..ContentConfig::default()
            },
            ..Config::default()
        };
        assert_eq!(config.source(&SourceOverrides::default()), Source::Sample);
    }

    #[test]
    fn cli_catalog_beats_configured_remote() {
        let config = Config {
            content: ContentConfig {
                source: Some(SourceKind::Remote),
                endpoint: Some("https://cms.example.com/query".into()),
                ..ContentConfig::default()
            },
            ..Config::default()
        };
        let overrides = SourceOverrides {
            catalog: Some(PathBuf::from("works.toml")),
            endpoint: None,
        };
        assert_eq!(
            config.source(&overrides),
            Source::File(PathBuf::from("works.toml"))
        );
    }

    #[test]
    fn remote_source_carries_asset_base() {
        let config = Config {
            content: ContentConfig {
                source: Some(SourceKind::Remote),
                endpoint: Some("https://cms.example.com/query".into()),
                asset_base: Some("https://cdn.example.com/images".into()),
                ..ContentConfig::default()
            },
            ..Config::default()
        };
        match config.source(&SourceOverrides::default()) {
            Source::Remote(remote) => {
                assert_eq!(remote.endpoint, "https://cms.example.com/query");
                assert_eq!(
                    remote.asset_base.as_deref(),
                    Some("https://cdn.example.com/images")
                );
            }
            other => panic!("expected remote source, got {other:?}"),
        }
    }

    #[test]
    fn site_falls_back_to_defaults_and_hides_empty_links() {
        let site = SiteConfig {
            artist_name: Some("  ".into()),
            twitter_url: Some(String::new()),
            ..SiteConfig::default()
        };
        assert_eq!(site.artist_name(), DEFAULT_ARTIST_NAME);
        assert_eq!(site.social_links(), vec![("Instagram", DEFAULT_INSTAGRAM_URL)]);
    }

    #[test]
    fn saved_file_loads_through_override_dir() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            ..Config::default()
        };

        save_to_path(&config, &base_dir.join("settings.toml")).expect("save should succeed");
        assert!(base_dir.join("settings.toml").exists(), "config file should exist");

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none(), "load should succeed without warning");
        assert_eq!(loaded.general.language, Some("fr".to_string()));
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join("settings.toml"), "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
        assert_eq!(config, Config::default());
    }
}
