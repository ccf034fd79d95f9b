use crux_core::{render::render, Command};

use crate::events::Event;
use crate::model::{ConnectionState, Model};
use crate::types::ThemePreference;
use crate::Effect;

/// Handle UI-related events (theme, diagnostics toggle, error dismissal)
pub fn handle(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::ThemeLoaded(result) => {
            // Best-effort: any failure falls back to the default theme
            let theme = match result {
                Ok(Some(stored)) => ThemePreference::from_stored(&stored),
                Ok(None) => ThemePreference::default(),
                Err(message) => {
                    log::warn!("Failed to read theme preference: {message}");
                    ThemePreference::default()
                }
            };
            if model.theme == theme {
                Command::done()
            } else {
                model.theme = theme;
                render()
            }
        }

        Event::ToggleDiagnostics => {
            model.show_diagnostics = !model.show_diagnostics;
            render()
        }

        Event::ClearError => {
            if let ConnectionState::AwaitingAddress { last_error } = &mut model.connection {
                if last_error.take().is_some() {
                    return render();
                }
            }
            Command::done()
        }

        _ => unreachable!("Non-UI event passed to UI handler"),
    }
}
