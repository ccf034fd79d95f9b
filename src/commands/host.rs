//! Host service operations.
//!
//! Two things only the Shell can provide: a one-shot delay (used to enforce
//! the probe deadline, since the Core has no clock of its own) and a
//! diagnostic context snapshot (platform identifier, platform version,
//! wall-clock time) attached to probe reports.

use std::marker::PhantomData;

use crux_core::capability::Operation;
use serde::{Deserialize, Serialize};

use super::RequestBuilder;
use crate::types::HostContext;

// Operations the Shell performs on behalf of the Core
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum HostOperation {
    /// Resolve after `millis` milliseconds.
    Delay { millis: u64 },
    /// Snapshot platform identifier, version and wall-clock time.
    Context,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum HostOutput {
    Elapsed,
    Context(HostContext),
}

impl HostOutput {
    pub fn into_context(self) -> Option<HostContext> {
        match self {
            Self::Context(context) => Some(context),
            Self::Elapsed => None,
        }
    }
}

impl Operation for HostOperation {
    type Output = HostOutput;
}

/// Command-based host services API
pub struct Host<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Host<Effect, Event>
where
    Effect: Send + From<crux_core::Request<HostOperation>> + 'static,
    Event: Send + 'static,
{
    /// Ask the shell to resolve after `millis` milliseconds
    pub fn delay(millis: u64) -> RequestBuilder<HostOperation, Effect, Event> {
        RequestBuilder::new(HostOperation::Delay { millis })
    }

    /// Ask the shell for a diagnostic context snapshot
    pub fn context() -> RequestBuilder<HostOperation, Effect, Event> {
        RequestBuilder::new(HostOperation::Context)
    }
}
