use serde::{Deserialize, Serialize};

use crate::types::{HostContext, ProbeResult};

/// Events that can happen in the app
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    // Shell-driven
    /// Dispatched once when the shell launches: loads the theme preference
    /// and the stored address, then probes the address if one exists.
    Startup,
    /// The user submitted a candidate address from the entry form.
    SubmitAddress { address: String },
    /// Toggle the developer diagnostics view.
    ToggleDiagnostics,
    /// Dismiss the error shown on the entry form.
    ClearError,

    // Effect resolutions (internal events, skipped from serialization)
    #[serde(skip)]
    ThemeLoaded(Result<Option<String>, String>),
    #[serde(skip)]
    StoredAddressLoaded(Result<Option<String>, String>),
    #[serde(skip)]
    HostContextLoaded {
        generation: u32,
        context: Option<HostContext>,
    },
    #[serde(skip)]
    ProbeAttemptResolved { generation: u32, result: ProbeResult },
    #[serde(skip)]
    ProbeTimedOut { generation: u32 },
    #[serde(skip)]
    AddressPersisted {
        generation: u32,
        result: Result<(), String>,
    },
}
