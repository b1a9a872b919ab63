//! Opt-in tracing setup for hosts embedding `keyed-charts`.
//!
//! Charts emit `tracing` events at layout time and on ignored pointer
//! events. Hosts that already run a subscriber need nothing from here;
//! others can call `init_default_tracing` once at startup.

/// Installs a default `tracing` subscriber when the `telemetry` feature is
/// enabled.
///
/// Returns `true` on success and `false` when the feature is disabled or a
/// global subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
