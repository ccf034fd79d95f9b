use serde::{Deserialize, Serialize};

use crate::types::*;

/// Error shown when a startup probe of the stored address fails. The stored
/// address itself is not shown back to the user.
pub const STARTUP_FAILURE_ERROR: &str = "Unable to connect to server";

/// Error shown when a submitted address fails validation.
pub const SUBMIT_FAILURE_ERROR: &str = "Server not found";

/// Error shown when the user submits an empty address. No probe is issued.
pub const EMPTY_ADDRESS_ERROR: &str = "Please enter a server address";

/// Error shown when a validated address could not be written to the settings
/// store. The submission is aborted; the app never claims to be connected
/// with an unsaved address.
pub const STORAGE_WRITE_ERROR: &str = "Unable to save the server address";

/// The single authoritative connection state.
///
/// `Connected` is reached only after a probe succeeded AND the validated
/// address was written to the settings store; the write completes before the
/// transition becomes observable to the shell.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum ConnectionState {
    #[default]
    Initializing,
    AwaitingAddress {
        last_error: Option<String>,
    },
    Connected {
        address: ServerAddress,
    },
}

/// What triggered a probe. Decides which generic error message the user sees
/// when it fails.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProbeOrigin {
    Startup,
    Submission,
}

impl ProbeOrigin {
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Startup => STARTUP_FAILURE_ERROR,
            Self::Submission => SUBMIT_FAILURE_ERROR,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FlightStage {
    /// Waiting for the protocol attempts (or the deadline).
    Probing,
    /// A protocol attempt succeeded; waiting for the persistence write.
    Persisting,
}

/// The single in-flight probe.
///
/// At most one exists at a time; a newly started probe replaces it. Every
/// asynchronous result carries the generation it was issued under and is
/// ignored unless it matches this flight, so a superseded probe can never
/// overwrite a newer one's outcome.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProbeFlight {
    pub generation: u32,
    pub address: ServerAddress,
    pub origin: ProbeOrigin,
    pub stage: FlightStage,
    pub plain: Option<ProbeResult>,
    pub secure: Option<ProbeResult>,
    pub context: Option<HostContext>,
}

impl ProbeFlight {
    pub fn new(generation: u32, address: ServerAddress, origin: ProbeOrigin) -> Self {
        Self {
            generation,
            address,
            origin,
            stage: FlightStage::Probing,
            plain: None,
            secure: None,
            context: None,
        }
    }

    pub fn record(&mut self, result: ProbeResult) {
        match result.protocol {
            Protocol::Plain => self.plain = Some(result),
            Protocol::Secure => self.secure = Some(result),
        }
    }

    /// Either protocol completing an exchange validates the address.
    pub fn any_succeeded(&self) -> bool {
        [&self.plain, &self.secure]
            .into_iter()
            .flatten()
            .any(|result| result.succeeded)
    }

    /// Both attempts resolved and neither completed an exchange.
    pub fn all_failed(&self) -> bool {
        match (&self.plain, &self.secure) {
            (Some(plain), Some(secure)) => !plain.succeeded && !secure.succeeded,
            _ => false,
        }
    }

    /// Snapshot of this flight for the diagnostics view, with failure
    /// details stamped from the host context.
    pub fn report(&self) -> ProbeReport {
        let epoch_ms = self.context.as_ref().map(|context| context.epoch_ms);
        let mut results = Vec::new();
        for attempt in [&self.plain, &self.secure].into_iter().flatten() {
            let mut result = attempt.clone();
            if let Some(error) = result.error.as_mut() {
                error.epoch_ms = epoch_ms;
            }
            results.push(result);
        }
        ProbeReport {
            address: self.address.clone(),
            results,
            platform: self.context.clone(),
        }
    }
}

/// Application Model - the complete state
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Model {
    pub connection: ConnectionState,
    pub theme: ThemePreference,

    /// Single-flight guard: the one probe currently outstanding, if any.
    pub flight: Option<ProbeFlight>,
    /// Bumped each time a probe starts; tags every asynchronous result.
    pub generation: u32,

    /// Diagnostics from the most recently concluded probe.
    pub last_report: Option<ProbeReport>,
    /// Opt-in developer diagnostics view.
    pub show_diagnostics: bool,
}

impl Model {
    /// The current flight, if `generation` still identifies it.
    pub fn flight_matching(&mut self, generation: u32) -> Option<&mut ProbeFlight> {
        self.flight
            .as_mut()
            .filter(|flight| flight.generation == generation)
    }

    /// Leave any in-flight probe behind and show the entry form.
    pub fn await_address(&mut self, last_error: Option<String>) {
        self.flight = None;
        self.connection = ConnectionState::AwaitingAddress { last_error };
    }
}
