//! Projection of the model into what the shell renders.

use serde::{Deserialize, Serialize};

use crate::model::{ConnectionState, Model};
use crate::types::ThemePreference;

/// Exactly one of the three screens the shell can show.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Screen {
    /// Startup load or a probe is in flight.
    Loading,
    /// Address entry form, with the last user-facing error if any.
    AddressEntry { last_error: Option<String> },
    /// Embedded console for the validated, persisted address.
    Console { url: String },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewModel {
    pub screen: Screen,
    pub theme: ThemePreference,
    /// Last probe report, pretty-printed for the shell's debug pane.
    /// Present only while the diagnostics view is toggled on.
    pub diagnostics: Option<String>,
}

/// Console URL for a validated address.
///
/// Always uses the secure scheme, regardless of which protocol the probe
/// validated. An appliance that only serves plain HTTP will validate but may
/// then fail to load in the console view; see DESIGN.md.
pub fn console_url(address: &str) -> String {
    format!("https://{address}")
}

/// Pure projection: (connection state, in-flight probe, theme, diagnostics
/// toggle) and nothing else decide what is rendered.
pub fn view(model: &Model) -> ViewModel {
    let screen = if model.flight.is_some() {
        Screen::Loading
    } else {
        match &model.connection {
            ConnectionState::Initializing => Screen::Loading,
            ConnectionState::AwaitingAddress { last_error } => Screen::AddressEntry {
                last_error: last_error.clone(),
            },
            ConnectionState::Connected { address } => Screen::Console {
                url: console_url(address),
            },
        }
    };

    let diagnostics = if model.show_diagnostics {
        model
            .last_report
            .as_ref()
            .and_then(|report| serde_json::to_string_pretty(report).ok())
    } else {
        None
    };

    ViewModel {
        screen,
        theme: model.theme,
        diagnostics,
    }
}
