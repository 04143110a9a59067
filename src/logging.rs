// SPDX-License-Identifier: MPL-2.0
//! Logging setup with `tracing` and `tracing-subscriber`.
//!
//! Output goes to stderr. The filter comes from `ICED_FOLIO_LOG` when set
//! (any `EnvFilter` directive, e.g. `iced_folio=debug`), otherwise our crate
//! logs at `info` and dependencies at `warn`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "ICED_FOLIO_LOG";

const DEFAULT_DIRECTIVES: &str = "warn,iced_folio=info";

/// Builds the filter from [`LOG_ENV_VAR`], falling back to the defaults when
/// the variable is unset or unparsable.
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Installs the global subscriber. A second call is a no-op.
pub fn init() {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    if tracing_subscriber::registry()
        .with(env_filter())
        .with(layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("logging already initialised");
    }
}
