pub mod commands;
pub mod events;
pub mod model;
pub mod probe;
pub mod types;
pub mod update;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub mod wasm;


use crux_core::Command;

// Re-export core types
pub use crate::{
    commands::host::{HostOperation, HostOutput},
    commands::settings::{SettingsOperation, SettingsOutput, SERVER_ADDRESS_KEY, THEME_KEY},
    events::Event,
    model::{ConnectionState, Model, ProbeOrigin},
    types::*,
    view::{console_url, Screen, ViewModel},
};
pub use crux_http::Result as HttpResult;

#[crux_macros::effect(typegen)]
pub enum Effect {
    Render(crux_core::render::RenderOperation),
    Http(crux_http::protocol::HttpRequest),
    Settings(SettingsOperation),
    Host(HostOperation),
}

pub type HttpCmd = crux_http::command::Http<Effect, Event>;
pub type SettingsCmd = crate::commands::settings::Settings<Effect, Event>;
pub type HostCmd = crate::commands::host::Host<Effect, Event>;

/// The Core application
#[derive(Default)]
pub struct App;

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Effect = Effect;

    fn update(&self, event: Self::Event, model: &mut Self::Model) -> Command<Effect, Event> {
        update::update(event, model)
    }

    fn view(&self, model: &Self::Model) -> Self::ViewModel {
        view::view(model)
    }
}
