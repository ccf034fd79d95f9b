//! Durable settings store operations.
//!
//! The shell owns the actual key/value storage (AsyncStorage, localStorage,
//! platform preferences). The Core only issues gets and sets by string key;
//! an absent key is a valid, handled case and not an error.

use std::marker::PhantomData;

use crux_core::capability::Operation;
use serde::{Deserialize, Serialize};

use super::RequestBuilder;

/// Key under which the validated appliance address is persisted.
pub const SERVER_ADDRESS_KEY: &str = "serverIP";

/// Key under which the theme preference is persisted.
pub const THEME_KEY: &str = "theme";

// Operations the Shell performs against the settings store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum SettingsOperation {
    Get { key: String },
    Set { key: String, value: String },
}

// What the store reported back
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum SettingsOutput {
    /// Result of a `Get`; `None` means the key is absent.
    Value { value: Option<String> },
    /// A `Set` was written durably.
    Written,
    /// The store failed to serve the operation.
    Error { message: String },
}

impl SettingsOutput {
    /// Interpret this output as the result of a read.
    pub fn into_value(self) -> Result<Option<String>, String> {
        match self {
            Self::Value { value } => Ok(value),
            Self::Written => Err("unexpected write acknowledgement for a read".to_string()),
            Self::Error { message } => Err(message),
        }
    }

    /// Interpret this output as the result of a write.
    pub fn into_write(self) -> Result<(), String> {
        match self {
            Self::Written => Ok(()),
            Self::Value { .. } => Err("unexpected value payload for a write".to_string()),
            Self::Error { message } => Err(message),
        }
    }
}

impl Operation for SettingsOperation {
    type Output = SettingsOutput;
}

/// Command-based settings store API
pub struct Settings<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Settings<Effect, Event>
where
    Effect: Send + From<crux_core::Request<SettingsOperation>> + 'static,
    Event: Send + 'static,
{
    /// Read the value stored under `key`
    pub fn get(key: impl Into<String>) -> RequestBuilder<SettingsOperation, Effect, Event> {
        RequestBuilder::new(SettingsOperation::Get { key: key.into() })
    }

    /// Durably write `value` under `key`
    pub fn set(
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> RequestBuilder<SettingsOperation, Effect, Event> {
        RequestBuilder::new(SettingsOperation::Set {
            key: key.into(),
            value: value.into(),
        })
    }
}
