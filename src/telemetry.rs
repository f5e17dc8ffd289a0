//! Telemetry helpers for applications embedding `breakpoints-rs`.
//!
//! Tracing setup stays opt-in. Hosts either call one of the helpers below or
//! install their own `tracing` subscriber; sweep and refresh logs go through
//! whatever subscriber is active.

/// Directive used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER_DIRECTIVE: &str = "breakpoints_rs=info";

/// Installs a compact `tracing` subscriber filtered by `RUST_LOG`, falling back
/// to [`DEFAULT_FILTER_DIRECTIVE`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback(DEFAULT_FILTER_DIRECTIVE)
}

/// Same as [`init_default_tracing`] with a caller-provided fallback directive,
/// e.g. `"breakpoints_rs=trace"` to watch every dispatch.
#[must_use]
pub fn init_tracing_with_fallback(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::init_tracing_with_fallback;

    #[cfg(not(feature = "telemetry"))]
    #[test]
    fn tracing_init_is_noop_without_feature() {
        assert!(!init_tracing_with_fallback("breakpoints_rs=trace"));
    }

    #[cfg(feature = "telemetry")]
    #[test]
    fn second_tracing_init_reports_existing_subscriber() {
        let _ = init_tracing_with_fallback("breakpoints_rs=trace");
        assert!(!init_tracing_with_fallback("breakpoints_rs=trace"));
    }
}
