// SPDX-License-Identifier: MPL-2.0
//! Content sources.
//!
//! The gallery consumes a [`Catalog`] and never knows where it came from.
//! Three sources exist: the built-in [`sample`], a TOML [`file`], and the
//! hosted [`remote`] backend. A failing file or remote source falls back to
//! the sample so the window is never blank because of a network hiccup; an
//! empty (but successful) source is shown as such.

pub mod file;
pub mod image_url;
pub mod record;
pub mod remote;
pub mod revalidate;
pub mod sample;

use crate::domain::Catalog;
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use remote::RemoteSource;
pub use revalidate::Freshness;

/// Which source the configuration selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Sample,
    File,
    Remote,
}

/// A fully specified source, ready to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Sample,
    File(PathBuf),
    Remote(RemoteSource),
}

impl Source {
    #[must_use]
    pub fn kind(&self) -> SourceKind {
        match self {
            Source::Sample => SourceKind::Sample,
            Source::File(_) => SourceKind::File,
            Source::Remote(_) => SourceKind::Remote,
        }
    }

    /// Whether reloading can yield something different.
    #[must_use]
    pub fn is_refreshable(&self) -> bool {
        !matches!(self, Source::Sample)
    }
}

/// Outcome of [`load`].
#[derive(Debug, Clone)]
pub struct Loaded {
    pub catalog: Catalog,
    pub kind: SourceKind,
    /// Set when the configured source failed and the sample was used instead.
    pub fallback: Option<Error>,
}

/// Loads `source`, falling back to the sample catalog on failure.
pub async fn load(source: Source) -> Loaded {
    let kind = source.kind();
    let result = match &source {
        Source::Sample => Ok(sample::catalog()),
        Source::File(path) => file::load(path).await,
        Source::Remote(remote) => remote::fetch(remote).await,
    };

    match result {
        Ok(catalog) => Loaded {
            catalog,
            kind,
            fallback: None,
        },
        Err(err) => {
            tracing::warn!(?kind, %err, "content source failed, using sample catalog");
            Loaded {
                catalog: sample::catalog(),
                kind,
                fallback: Some(err),
            }
        }
    }
}
