#![forbid(unsafe_code)]

//! Logging facade.
//!
//! wheelpick crates log through `tracing`; this module re-exports the macros
//! so downstream crates do not need a direct dependency, and offers a JSON
//! subscriber for production hosts behind the `tracing-json` feature.
//!
//! # Conventions
//!
//! - `debug!` for driver transitions (drag start/end, wheel gesture end,
//!   snap start, commit, cancellation).
//! - `trace!` for per-event detail (wheel accumulation, per-frame ticks).
//! - Fields are structured (`target_index = 3`), never formatted into the
//!   message.

pub use tracing::{debug, debug_span, error, info, trace, trace_span, warn};

/// Install a global JSON subscriber filtered by `RUST_LOG`.
///
/// Falls back to `info` when `RUST_LOG` is unset or invalid. Returns an error
/// if a global subscriber is already installed.
#[cfg(feature = "tracing-json")]
pub fn init_json_logging() -> Result<(), tracing_subscriber::util::TryInitError> {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().json())
        .try_init()
}
