// SPDX-License-Identifier: MPL-2.0
//! Fluent bundles, locale resolution and message lookup.

use crate::app::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::path::Path;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const DEFAULT_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None, &Config::default())
    }
}

impl I18n {
    /// Loads the embedded translations, then any `.ftl` files in `i18n_dir`
    /// (which replace an embedded locale of the same name).
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = locale_of(filename) else {
                continue;
            };
            if let Some(content) = Asset::get(filename) {
                let source = String::from_utf8_lossy(content.data.as_ref()).into_owned();
                bundles.insert(locale.clone(), build_bundle(locale, source));
            }
        }

        if let Some(dir) = i18n_dir {
            load_directory(Path::new(&dir), &mut bundles);
        }

        let mut available_locales: Vec<LanguageIdentifier> = bundles.keys().cloned().collect();
        available_locales.sort_by_key(ToString::to_string);

        let default_locale = default_locale();
        let current_locale = resolve_locale(cli_lang, config, &available_locales)
            .unwrap_or(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    #[must_use]
    pub fn available_locales(&self) -> &[LanguageIdentifier] {
        &self.available_locales
    }

    /// Translates `key`. Missing keys come back as `MISSING: key`.
    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Translates `key` with named arguments. Values that parse as numbers
    /// are passed as Fluent numbers so plural selectors work.
    #[must_use]
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            match value.parse::<f64>() {
                Ok(number) => fluent_args.set(*name, FluentValue::from(number)),
                Err(_) => fluent_args.set(*name, FluentValue::from(*value)),
            }
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        let lookup = |locale: &LanguageIdentifier| {
            let bundle = self.bundles.get(locale)?;
            let pattern = bundle.get_message(key)?.value()?;
            let mut errors = vec![];
            let value = bundle.format_pattern(pattern, args, &mut errors);
            errors.is_empty().then(|| value.into_owned())
        };

        lookup(&self.current_locale)
            .or_else(|| lookup(&default_locale()))
            .unwrap_or_else(|| format!("MISSING: {key}"))
    }
}

fn default_locale() -> LanguageIdentifier {
    DEFAULT_LOCALE.parse().unwrap_or_default()
}

fn locale_of(filename: &str) -> Option<LanguageIdentifier> {
    filename.strip_suffix(".ftl")?.parse().ok()
}

fn build_bundle(locale: LanguageIdentifier, source: String) -> FluentBundle<FluentResource> {
    let resource = match FluentResource::try_new(source) {
        Ok(resource) => resource,
        Err((resource, errors)) => {
            tracing::warn!(%locale, count = errors.len(), "translation file has syntax errors");
            resource
        }
    };
    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    // Bidi isolation marks would end up verbatim in plain text widgets.
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        tracing::warn!(%locale, count = errors.len(), "duplicate translation messages");
    }
    bundle
}

fn load_directory(
    dir: &Path,
    bundles: &mut HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(dir = %dir.display(), %err, "cannot read translation directory");
            return;
        }
    };
    for entry in entries.flatten() {
        let path = entry.path();
        let Some(locale) = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(locale_of)
        else {
            continue;
        };
        match std::fs::read_to_string(&path) {
            Ok(source) => {
                bundles.insert(locale.clone(), build_bundle(locale, source));
            }
            Err(err) => tracing::warn!(path = %path.display(), %err, "cannot read translation"),
        }
    }
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let supported = |raw: &str| {
        raw.parse::<LanguageIdentifier>()
            .ok()
            .filter(|lang| available.contains(lang))
    };

    // 1. CLI, 2. config file, 3. OS locale
    cli_lang
        .as_deref()
        .and_then(supported)
        .or_else(|| config.general.language.as_deref().and_then(supported))
        .or_else(|| sys_locale::get_locale().as_deref().and_then(supported))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn available() -> Vec<LanguageIdentifier> {
        vec!["en-US".parse().unwrap(), "fr".parse().unwrap()]
    }

    #[test]
    fn resolve_locale_prefers_cli() {
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());
        let lang = resolve_locale(Some("fr".to_string()), &config, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_uses_config() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(None, &config, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn unsupported_cli_language_falls_through() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(Some("xx".to_string()), &config, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn embedded_locales_are_loaded() {
        let i18n = I18n::new(Some("en-US".into()), None, &Config::default());
        assert!(i18n.available_locales().len() >= 2);
        assert_eq!(i18n.tr("nav-gallery"), "Gallery");
    }

    #[test]
    fn missing_key_is_marked() {
        let i18n = I18n::default();
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn plural_selector_uses_numeric_args() {
        let i18n = I18n::new(Some("en-US".into()), None, &Config::default());
        assert_eq!(
            i18n.tr_with_args("filter-year-tooltip", &[("year", "2024"), ("count", "1")]),
            "Filter by year 2024 (1 artwork)"
        );
        assert_eq!(
            i18n.tr_with_args("filter-year-tooltip", &[("year", "2024"), ("count", "2")]),
            "Filter by year 2024 (2 artworks)"
        );
    }

    #[test]
    fn french_falls_back_to_english_for_missing_keys() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join("fr.ftl"), "nav-gallery = Galerie\n").expect("write ftl");
        let i18n = I18n::new(
            Some("fr".into()),
            Some(dir.path().to_string_lossy().into_owned()),
            &Config::default(),
        );
        assert_eq!(i18n.tr("nav-gallery"), "Galerie");
        assert_eq!(i18n.tr("nav-about"), "About");
    }
}
