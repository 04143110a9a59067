// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`gallery`] - Crossfading stage, year index, filmstrip and year filter
//! - [`about`] - The artist's biography
//! - [`contact`] - Email and social profile links
//!
//! # Shared Infrastructure
//!
//! - [`header`] - Top bar with screen links and the drawer button
//! - [`styles`] - Centralized styling (buttons, containers, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod about;
pub mod contact;
pub mod design_tokens;
pub mod gallery;
pub mod header;
pub mod notifications;
pub mod styles;
pub mod theming;
