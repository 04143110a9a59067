// SPDX-License-Identifier: MPL-2.0
//! Image reference resolution.
//!
//! References are opaque to the gallery. Remote ones are rewritten with size,
//! format and quality query parameters so the image host serves a version
//! fit for display; local paths pass through untouched.

use reqwest::Url;

/// Output format requested from the image host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// Let the host pick (`auto=format`).
    #[default]
    Auto,
    Jpg,
    Png,
    Webp,
}

impl ImageFormat {
    fn code(self) -> Option<&'static str> {
        match self {
            ImageFormat::Auto => None,
            ImageFormat::Jpg => Some("jpg"),
            ImageFormat::Png => Some("png"),
            ImageFormat::Webp => Some("webp"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageParams {
    pub width: u32,
    pub quality: u8,
    pub format: ImageFormat,
}

const MANAGED_KEYS: [&str; 4] = ["w", "q", "fm", "auto"];

/// Applies `params` to an `http(s)` reference. Anything else is returned as is.
#[must_use]
pub fn resolve(reference: &str, params: ImageParams) -> String {
    let Ok(mut url) = Url::parse(reference) else {
        return reference.to_string();
    };
    if !matches!(url.scheme(), "http" | "https") {
        return reference.to_string();
    }

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| !MANAGED_KEYS.contains(&key.as_ref()))
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    {
        let mut query = url.query_pairs_mut();
        query.clear();
        for (key, value) in &kept {
            query.append_pair(key, value);
        }
        query.append_pair("w", &params.width.to_string());
        query.append_pair("q", &params.quality.to_string());
        match params.format.code() {
            Some(code) => query.append_pair("fm", code),
            None => query.append_pair("auto", "format"),
        };
    }
    url.to_string()
}

/// Turns an asset id such as `image-<hash>-1200x800-jpg` into a CDN URL
/// under `base`.
#[must_use]
pub fn asset_url(reference: &str, base: &str) -> Option<String> {
    let rest = reference.strip_prefix("image-")?;
    let (stem, extension) = rest.rsplit_once('-')?;
    if stem.is_empty() || extension.is_empty() {
        return None;
    }
    Some(format!("{}/{stem}.{extension}", base.trim_end_matches('/')))
}
