//! Custom shell operations.
//!
//! These modules define the interface between the Core and the Shell for
//! everything the Core cannot do deterministically itself: durable settings
//! storage and host services (delay timer, diagnostic context).

pub mod host;
pub mod settings;

use std::future::Future;
use std::marker::PhantomData;

use crux_core::{capability::Operation, command, Command};

/// Request builder shared by the custom shell operations.
///
/// Wraps an operation so it can be turned into a `Command` request and have
/// its output mapped to an event with `then_send`, mirroring the `crux_http`
/// command API.
#[must_use]
pub struct RequestBuilder<Op, Effect, Event> {
    operation: Op,
    _effect: PhantomData<Effect>,
    _event: PhantomData<fn() -> Event>,
}

impl<Op, Effect, Event> RequestBuilder<Op, Effect, Event>
where
    Op: Operation,
    Effect: Send + From<crux_core::Request<Op>> + 'static,
    Event: Send + 'static,
{
    pub(crate) fn new(operation: Op) -> Self {
        Self {
            operation,
            _effect: PhantomData,
            _event: PhantomData,
        }
    }

    /// Build the request into a Command RequestBuilder
    pub fn build(
        self,
    ) -> command::RequestBuilder<Effect, Event, impl Future<Output = Op::Output>> {
        command::RequestBuilder::new(move |ctx| async move {
            Command::request_from_shell(self.operation)
                .into_future(ctx)
                .await
        })
    }
}
