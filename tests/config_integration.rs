// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::config::{self, Config, SourceOverrides};
use iced_folio::content::{self, Source, SourceKind};
use iced_folio::i18n::fluent::I18n;
use std::time::Duration;
use tempfile::tempdir;

const CATALOG: &str = r#"
[[artwork]]
id = "late"
title = "Second Shown"
year = 2021
image = "late.jpg"
display_order = 2

[[artwork]]
id = "early"
title = "First Shown"
year = 2020
image = "https://images.example/early.jpg"
price = 900
currency = "EUR"
availability = "available"
display_order = 1
"#;

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut settings = Config::default();
    settings.general.language = Some("en-US".to_string());
    config::save_to_path(&settings, &path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("nav-gallery"), "Gallery");

    settings.general.language = Some("fr".to_string());
    config::save_to_path(&settings, &path).expect("Failed to write french config file");
    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("nav-gallery"), "Galerie");
}

#[test]
fn out_of_range_timings_are_clamped() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        "[gallery]\nauto_advance_secs = 0\ncrossfade_ms = 100000\n",
    )
    .expect("write settings");

    let loaded = config::load_from_path(&path).expect("load settings");
    let timing = loaded.timing();
    assert_eq!(timing.auto_advance, Duration::from_secs(2));
    assert_eq!(timing.crossfade, Duration::from_millis(2_000));
}

#[test]
fn unreadable_settings_fall_back_with_warning() {
    let dir = tempdir().expect("temp dir");
    std::fs::write(dir.path().join("settings.toml"), "[gallery\n").expect("write settings");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}

#[test]
fn cli_catalog_beats_configured_source() {
    let mut settings = Config::default();
    settings.content.source = Some(SourceKind::Remote);
    settings.content.endpoint = Some("https://cms.example/query".into());

    let source = settings.source(&SourceOverrides {
        catalog: Some("works.toml".into()),
        endpoint: None,
    });
    assert_eq!(source.kind(), SourceKind::File);
}

#[tokio::test]
async fn file_catalog_loads_in_display_order() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("catalog.toml");
    std::fs::write(&path, CATALOG).expect("write catalog");

    let loaded = content::load(Source::File(path)).await;
    assert!(loaded.fallback.is_none());
    let titles: Vec<&str> = loaded.catalog.artworks().iter().map(|a| a.title()).collect();
    assert_eq!(titles, vec!["First Shown", "Second Shown"]);

    // Relative image paths resolve next to the catalog file.
    let late = &loaded.catalog.artworks()[1];
    assert!(late.image().starts_with(&dir.path().to_string_lossy().into_owned()));
}

#[tokio::test]
async fn malformed_catalog_falls_back_to_sample() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("catalog.toml");
    std::fs::write(&path, "[[artwork]\n").expect("write catalog");

    let loaded = content::load(Source::File(path)).await;
    assert!(loaded.fallback.is_some());
    assert_eq!(loaded.catalog.len(), 6);
}
