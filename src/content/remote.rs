// SPDX-License-Identifier: MPL-2.0
//! Hosted content backend.
//!
//! One read query returns every artwork record, ordered by its display-order
//! field. The response body is `{"result": [...]}`.

use super::record::{into_catalog, RawArtwork};
use crate::domain::Catalog;
use crate::error::{ContentError, Result};
use serde::Deserialize;
use std::time::Duration;

/// Query sent to the backend. Opaque to the gallery.
pub const ARTWORK_QUERY: &str = r#"*[_type == "artwork"] | order(displayOrder asc) {
  _id, title, year, medium, dimensions, price, currency, availability,
  inquireForPrice, displayOrder, mainImage, thumbnail
}"#;

/// Environment variable holding the read token, if the dataset is private.
pub const TOKEN_ENV_VAR: &str = "ICED_FOLIO_CONTENT_TOKEN";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Where and how to query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteSource {
    pub endpoint: String,
    /// Base URL that image asset ids are resolved against.
    pub asset_base: Option<String>,
    pub token: Option<String>,
}

impl RemoteSource {
    /// Reads the token from [`TOKEN_ENV_VAR`].
    #[must_use]
    pub fn new(endpoint: impl Into<String>, asset_base: Option<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            asset_base,
            token: std::env::var(TOKEN_ENV_VAR).ok().filter(|t| !t.is_empty()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    result: Option<Vec<RawArtwork>>,
}

/// Parses a query response body.
pub fn parse_response(body: &[u8], asset_base: Option<&str>) -> Result<Catalog> {
    let response: QueryResponse = serde_json::from_slice(body)?;
    Ok(into_catalog(
        response.result.unwrap_or_default(),
        asset_base,
    ))
}

/// Runs the artwork query.
pub async fn fetch(source: &RemoteSource) -> Result<Catalog> {
    if source.endpoint.trim().is_empty() {
        return Err(ContentError::MissingEndpoint.into());
    }

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(concat!("IcedFolio/", env!("CARGO_PKG_VERSION")))
        .timeout(REQUEST_TIMEOUT)
        .build()?;

    let mut request = client
        .get(source.endpoint.trim())
        .query(&[("query", ARTWORK_QUERY)]);
    if let Some(token) = &source.token {
        request = request.bearer_auth(token);
    }

    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ContentError::Status(status.as_u16()).into());
    }

    let body = response.bytes().await?;
    let catalog = parse_response(&body, source.asset_base.as_deref())?;
    tracing::info!(
        endpoint = %source.endpoint,
        artworks = catalog.len(),
        "fetched remote catalog"
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn parses_result_array() {
        let body = br#"{"result": [
            {"_id": "x2", "title": "Two", "year": 2023, "mainImage": "https://i/2.jpg", "displayOrder": 2},
            {"_id": "x1", "title": "One", "year": 2024, "mainImage": "https://i/1.jpg", "displayOrder": 1}
        ], "ms": 4}"#;
        let catalog = parse_response(body, None).unwrap();
        let ids: Vec<_> = catalog.ids().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["x1", "x2"]);
    }

    #[test]
    fn null_result_is_empty_catalog() {
        let catalog = parse_response(br#"{"result": null}"#, None).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn non_json_is_malformed() {
        let err = parse_response(b"<html>", None).unwrap_err();
        assert!(matches!(err, Error::Content(ContentError::Malformed(_))));
    }

    #[tokio::test]
    async fn blank_endpoint_is_rejected_before_any_request() {
        let source = RemoteSource {
            endpoint: "  ".into(),
            asset_base: None,
            token: None,
        };
        let err = fetch(&source).await.unwrap_err();
        assert_eq!(err, Error::Content(ContentError::MissingEndpoint));
    }
}
