// SPDX-License-Identifier: MPL-2.0
//! Widget styles built from the active color scheme.

pub mod button;
pub mod container;
pub mod tooltip;
