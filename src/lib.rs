// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` presents one artist's portfolio as a desktop gallery built
//! with the Iced GUI framework.
//!
//! Artworks crossfade on a stage, grouped by year in a sidebar index, with a
//! thumbnail filmstrip, a year filter and an auto-advancing slideshow. The
//! catalog comes from a built-in sample, a TOML file or a hosted content
//! backend.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.1.0")]

pub mod app;
pub mod content;
pub mod domain;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod icon;
pub mod logging;
pub mod media;
pub mod outbound;
pub mod ui;
