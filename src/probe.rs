//! Reachability probe helpers.
//!
//! Turning an address into probe targets and turning `crux_http` resolutions
//! into [`ProbeResult`]s lives here, outside the update handlers, so the
//! conversions are plain testable functions.

use crux_http::Response;

use crate::types::{ErrorDetail, FailureKind, ProbeResult, Protocol};

/// Deadline for a whole probe. Enforced by the Core racing a host delay
/// against the HTTP attempts; the transport is not trusted to time out on
/// its own.
pub const PROBE_TIMEOUT_MS: u64 = 5_000;

/// Upper bound on the response body excerpt kept for diagnostics.
const BODY_EXCERPT_LIMIT: usize = 2_048;

/// Response headers worth keeping in the diagnostics report.
const DIAGNOSTIC_HEADERS: [&str; 3] = ["content-type", "server", "www-authenticate"];

/// Builds the request target for one protocol variant.
///
/// The address is used verbatim, so a user-supplied `host:port` overrides
/// the protocol's default port implicitly.
pub fn target(protocol: Protocol, address: &str) -> String {
    format!("{}://{address}", protocol.scheme())
}

/// Converts an HTTP resolution into a probe result.
///
/// A completed exchange counts as success regardless of status code family:
/// any response, 401 included, is proof of life.
pub fn attempt(protocol: Protocol, result: crux_http::Result<Response<Vec<u8>>>) -> ProbeResult {
    match result {
        Ok(mut response) => completed(protocol, &mut response),
        Err(error) => failed(protocol, error.to_string()),
    }
}

fn completed(protocol: Protocol, response: &mut Response<Vec<u8>>) -> ProbeResult {
    let mut headers = Vec::new();
    for name in DIAGNOSTIC_HEADERS {
        if let Some(values) = response.header(name) {
            headers.push((name.to_string(), values.to_string()));
        }
    }

    let body_excerpt = response
        .take_body()
        .filter(|body| !body.is_empty())
        .map(|body| {
            String::from_utf8_lossy(&body)
                .chars()
                .take(BODY_EXCERPT_LIMIT)
                .collect()
        });

    ProbeResult {
        protocol,
        succeeded: true,
        status_code: Some(u16::from(response.status())),
        headers,
        body_excerpt,
        error: None,
    }
}

/// Probe result for an attempt that failed before completing an exchange.
pub fn failed(protocol: Protocol, message: String) -> ProbeResult {
    let kind = classify_failure(&message);
    ProbeResult {
        protocol,
        succeeded: false,
        status_code: None,
        headers: Vec::new(),
        body_excerpt: None,
        error: Some(ErrorDetail {
            message,
            kind,
            epoch_ms: None,
        }),
    }
}

/// Probe result synthesized when the probe deadline fires before the attempt
/// resolved.
pub fn timed_out(protocol: Protocol) -> ProbeResult {
    ProbeResult {
        protocol,
        succeeded: false,
        status_code: None,
        headers: Vec::new(),
        body_excerpt: None,
        error: Some(ErrorDetail {
            message: format!("no response within {PROBE_TIMEOUT_MS} ms"),
            kind: FailureKind::Timeout,
            epoch_ms: None,
        }),
    }
}

/// Best-effort classification of a transport error message.
///
/// `crux_http` surfaces shell-side failures as strings, so this works on the
/// message text. Classification feeds diagnostics only, never control flow.
pub fn classify_failure(message: &str) -> FailureKind {
    let message = message.to_ascii_lowercase();
    if message.contains("timed out") || message.contains("timeout") {
        FailureKind::Timeout
    } else if message.contains("url") || message.contains("invalid") {
        FailureKind::InvalidTarget
    } else {
        FailureKind::Network
    }
}
