use axum::extract::Request;
use tracing::{Span, info_span};

use crate::utils::security::mask_uri_secrets;

/// Request span with credential query values masked; the masked keys are
/// recorded so a client leaking its key into the URL shows up in the logs.
pub fn make_log_span(request: &Request) -> Span {
    let masked = mask_uri_secrets(&request.uri().to_string());

    info_span!(
        "request",
        method = %request.method(),
        uri = %masked.uri,
        redacted = ?masked.redacted,
    )
}
