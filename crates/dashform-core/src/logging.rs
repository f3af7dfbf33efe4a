//! Logging integration for the dashform library.
//!
//! Provides helpers for configuring [`tracing`]-based logging and for
//! creating per-request spans. The library itself only emits events; the
//! hosting application decides whether to install a subscriber.

/// Sets up the global tracing subscriber with the given filter directive
/// (e.g. `"info"`, `"dashform_forms=debug"`).
///
/// Installing twice is harmless: a second call leaves the existing
/// subscriber in place.
pub fn setup_logging(filter: &str) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));

    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .ok();
}

/// Creates a tracing span for one request-scoped form lifecycle.
///
/// Attach this span around construct/update/render so all events emitted
/// while handling the request carry the request ID.
///
/// # Examples
///
/// ```
/// use dashform_core::logging::request_span;
///
/// let span = request_span("abc-123");
/// let _guard = span.enter();
/// tracing::info!("rendering filter form");
/// ```
pub fn request_span(request_id: &str) -> tracing::Span {
    tracing::info_span!("request", id = request_id)
}
