//! Optional tracing bootstrap for hosts embedding the engine.
//!
//! Nothing here runs unless the `telemetry` feature is enabled and the
//! host asks for it; embedders with their own subscriber stack should
//! skip this module and install filters directly.

/// Installs a compact global `tracing` subscriber that honors `RUST_LOG`
/// and defaults to `info`.
///
/// Returns `false` when the feature is disabled or another subscriber
/// already claimed the global slot.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
