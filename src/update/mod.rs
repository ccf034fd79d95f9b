mod connection;
mod ui;

use crux_core::Command;

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        // Connection discovery and validation domain
        Event::Startup
        | Event::StoredAddressLoaded(_)
        | Event::SubmitAddress { .. }
        | Event::HostContextLoaded { .. }
        | Event::ProbeAttemptResolved { .. }
        | Event::ProbeTimedOut { .. }
        | Event::AddressPersisted { .. } => connection::handle(event, model),

        // UI domain
        Event::ThemeLoaded(_) | Event::ToggleDiagnostics | Event::ClearError => {
            ui::handle(event, model)
        }
    }
}
