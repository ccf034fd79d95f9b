use serde::{Deserialize, Serialize};

/// Address of the Device Manager appliance as entered by the user or loaded
/// from the settings store: a hostname, an IP literal, or `host:port`.
///
/// The value is opaque to the core. It is trimmed on input and otherwise
/// passed through unchanged; a `host:port` value overrides the protocol
/// default port simply by being part of the string.
pub type ServerAddress = String;

/// UI theme preference, loaded once at startup and independent of the
/// connection flow.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Parse the value stored under the `"theme"` key.
    ///
    /// Anything other than `"dark"` falls back to the light theme, matching
    /// the default for an absent key.
    pub fn from_stored(value: &str) -> Self {
        match value.trim() {
            "dark" => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}
