use serde::{Deserialize, Serialize};

/// Protocol variant used for one reachability attempt.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Plain,
    Secure,
}

impl Protocol {
    pub fn scheme(self) -> &'static str {
        match self {
            Self::Plain => "http",
            Self::Secure => "https",
        }
    }
}

/// Classification of a failed reachability attempt.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// No response within the probe deadline.
    Timeout,
    /// Transport-level failure (refused, reset, no route, DNS).
    Network,
    /// The address could not be turned into a request target.
    InvalidTarget,
}

/// Failure detail captured for the diagnostics view. Never shown to the end
/// user directly; the user only sees the generic connection messages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorDetail {
    pub message: String,
    pub kind: FailureKind,
    /// Wall-clock stamp of the probe, taken from the host context snapshot.
    /// Diagnostic only.
    pub epoch_ms: Option<u64>,
}

/// Outcome of one reachability attempt over one protocol.
///
/// `succeeded` means the HTTP exchange completed, regardless of status code
/// family: any response is proof of life. A new probe produces new results;
/// prior ones are never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProbeResult {
    pub protocol: Protocol,
    pub succeeded: bool,
    pub status_code: Option<u16>,
    /// Selected response headers, captured for diagnostics.
    pub headers: Vec<(String, String)>,
    /// Bounded excerpt of the response body, captured for diagnostics.
    pub body_excerpt: Option<String>,
    pub error: Option<ErrorDetail>,
}

/// Platform information attached to probe diagnostics. Never used for
/// control-flow decisions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HostContext {
    pub platform: String,
    pub platform_version: String,
    pub epoch_ms: u64,
}

/// Diagnostic record of one whole probe, fed to the opt-in developer view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProbeReport {
    pub address: String,
    pub results: Vec<ProbeResult>,
    pub platform: Option<HostContext>,
}
