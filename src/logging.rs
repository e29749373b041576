// SPDX-License-Identifier: MPL-2.0
//! Log subscriber set-up for the binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the executable.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "iced_toast=info";

/// Installs a stderr fmt subscriber filtered by `RUST_LOG`.
///
/// Calling it twice is harmless; the second call is ignored.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
