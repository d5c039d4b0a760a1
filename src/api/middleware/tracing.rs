//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates the request tracing layer applied to every route, the asset
/// fallback included.
///
/// - span at `INFO` with method, URI and version (headers are not recorded,
///   so submitted form data never reaches the span)
/// - response at `INFO` with status and latency in milliseconds
/// - 5xx responses additionally logged at `ERROR`
///
/// ```text
/// INFO request{method=POST uri=/api/contact version=HTTP/1.1}: finished processing request latency=3 ms status=200
/// INFO request{method=GET uri=/ version=HTTP/1.1}: finished processing request latency=0 ms status=200
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(
            DefaultMakeSpan::new()
                .level(Level::INFO)
                .include_headers(false),
        )
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::ERROR)
                .latency_unit(LatencyUnit::Millis),
        )
}
