//! Connection discovery and validation.
//!
//! Owns every transition of [`ConnectionState`]: loading the stored address
//! at startup, probing candidates, persisting validated addresses, and
//! converting failures into the user-facing entry-form messages. All network
//! and storage failures end here as state transitions; none escape.

use crux_core::{render::render, Command};

use crate::commands::settings::{SERVER_ADDRESS_KEY, THEME_KEY};
use crate::events::Event;
use crate::model::{
    ConnectionState, FlightStage, Model, ProbeFlight, ProbeOrigin, EMPTY_ADDRESS_ERROR,
    STORAGE_WRITE_ERROR,
};
use crate::probe;
use crate::types::{Protocol, ServerAddress};
use crate::{Effect, HostCmd, HttpCmd, SettingsCmd};

/// Handle connection-related events
pub fn handle(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::Startup => startup(model),
        Event::StoredAddressLoaded(result) => stored_address_loaded(result, model),
        Event::SubmitAddress { address } => submit(address, model),
        Event::HostContextLoaded {
            generation,
            context,
        } => {
            if let Some(flight) = model.flight_matching(generation) {
                flight.context = context;
            }
            Command::done()
        }
        Event::ProbeAttemptResolved { generation, result } => {
            attempt_resolved(generation, result, model)
        }
        Event::ProbeTimedOut { generation } => timed_out(generation, model),
        Event::AddressPersisted { generation, result } => persisted(generation, result, model),
        _ => unreachable!("Non-connection event passed to connection handler"),
    }
}

/// Load the theme preference and the stored address. Both reads are issued
/// together; the theme never blocks the connection flow.
fn startup(model: &mut Model) -> Command<Effect, Event> {
    model.connection = ConnectionState::Initializing;
    Command::all([
        render(),
        SettingsCmd::get(THEME_KEY)
            .build()
            .then_send(|output| Event::ThemeLoaded(output.into_value())),
        SettingsCmd::get(SERVER_ADDRESS_KEY)
            .build()
            .then_send(|output| Event::StoredAddressLoaded(output.into_value())),
    ])
}

fn stored_address_loaded(
    result: Result<Option<String>, String>,
    model: &mut Model,
) -> Command<Effect, Event> {
    match result {
        Ok(Some(stored)) if !stored.trim().is_empty() => {
            start_probe(model, stored.trim().to_string(), ProbeOrigin::Startup)
        }
        // First run: no stored address is not a failure, show the plain form
        Ok(_) => {
            model.await_address(None);
            render()
        }
        // Read failures are treated as absence (fail open to the entry form)
        Err(message) => {
            log::warn!("Failed to read stored server address: {message}");
            model.await_address(None);
            render()
        }
    }
}

fn submit(address: String, model: &mut Model) -> Command<Effect, Event> {
    let candidate = address.trim().to_string();
    if candidate.is_empty() {
        model.await_address(Some(EMPTY_ADDRESS_ERROR.to_string()));
        return render();
    }
    start_probe(model, candidate, ProbeOrigin::Submission)
}

/// Start a probe of `address`, superseding any probe already in flight.
///
/// Both protocol targets are requested, plain first, racing a host delay
/// that enforces the probe deadline. Every resulting event is tagged with
/// this probe's generation so that results of a superseded probe are
/// dropped instead of last-write-wins.
fn start_probe(
    model: &mut Model,
    address: ServerAddress,
    origin: ProbeOrigin,
) -> Command<Effect, Event> {
    model.generation = model.generation.wrapping_add(1);
    let generation = model.generation;
    let plain_target = probe::target(Protocol::Plain, &address);
    let secure_target = probe::target(Protocol::Secure, &address);
    model.flight = Some(ProbeFlight::new(generation, address, origin));

    Command::all([
        render(),
        HttpCmd::get(plain_target).build().then_send(move |result| {
            Event::ProbeAttemptResolved {
                generation,
                result: probe::attempt(Protocol::Plain, result),
            }
        }),
        HttpCmd::get(secure_target)
            .build()
            .then_send(move |result| Event::ProbeAttemptResolved {
                generation,
                result: probe::attempt(Protocol::Secure, result),
            }),
        HostCmd::context()
            .build()
            .then_send(move |output| Event::HostContextLoaded {
                generation,
                context: output.into_context(),
            }),
        HostCmd::delay(probe::PROBE_TIMEOUT_MS)
            .build()
            .then_send(move |_| Event::ProbeTimedOut { generation }),
    ])
}

fn attempt_resolved(
    generation: u32,
    result: crate::types::ProbeResult,
    model: &mut Model,
) -> Command<Effect, Event> {
    let Some(flight) = model.flight_matching(generation) else {
        // Stale: a newer probe replaced this one
        return Command::done();
    };
    if flight.stage != FlightStage::Probing {
        // Decision already made; late sibling attempt
        return Command::done();
    }
    flight.record(result);

    if flight.any_succeeded() {
        return persist_validated_address(model);
    }
    if flight.all_failed() {
        return conclude_failure(model);
    }
    // One attempt still outstanding, bounded by the deadline
    Command::done()
}

fn timed_out(generation: u32, model: &mut Model) -> Command<Effect, Event> {
    let Some(flight) = model.flight_matching(generation) else {
        return Command::done();
    };
    if flight.stage != FlightStage::Probing {
        return Command::done();
    }
    if flight.plain.is_none() {
        flight.record(probe::timed_out(Protocol::Plain));
    }
    if flight.secure.is_none() {
        flight.record(probe::timed_out(Protocol::Secure));
    }
    conclude_failure(model)
}

/// A protocol attempt completed an exchange: write the address before the
/// `Connected` transition becomes observable.
fn persist_validated_address(model: &mut Model) -> Command<Effect, Event> {
    let Some(flight) = model.flight.as_mut() else {
        return Command::done();
    };
    flight.stage = FlightStage::Persisting;
    model.last_report = Some(flight.report());

    let generation = flight.generation;
    let address = flight.address.clone();
    SettingsCmd::set(SERVER_ADDRESS_KEY, address)
        .build()
        .then_send(move |output| Event::AddressPersisted {
            generation,
            result: output.into_write(),
        })
}

fn conclude_failure(model: &mut Model) -> Command<Effect, Event> {
    let Some(flight) = model.flight.take() else {
        return Command::done();
    };
    log::info!("Probe of {} failed on both protocols", flight.address);
    model.last_report = Some(flight.report());
    model.connection = ConnectionState::AwaitingAddress {
        last_error: Some(flight.origin.failure_message().to_string()),
    };
    render()
}

fn persisted(
    generation: u32,
    result: Result<(), String>,
    model: &mut Model,
) -> Command<Effect, Event> {
    let Some(flight) = model.flight.take() else {
        return Command::done();
    };
    if flight.generation != generation || flight.stage != FlightStage::Persisting {
        model.flight = Some(flight);
        return Command::done();
    }

    match result {
        Ok(()) => {
            model.connection = ConnectionState::Connected {
                address: flight.address,
            };
        }
        Err(message) => {
            log::error!("Failed to persist server address: {message}");
            model.connection = ConnectionState::AwaitingAddress {
                last_error: Some(STORAGE_WRITE_ERROR.to_string()),
            };
        }
    }
    render()
}
