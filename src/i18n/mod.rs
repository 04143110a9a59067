// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent files embedded from `assets/i18n/`. The locale is
//! chosen from the `--lang` flag, then `[general] language` in the settings
//! file, then the OS locale, then `en-US`. Keys missing from a locale fall
//! back to `en-US`.

pub mod fluent;
