#![allow(non_snake_case)]

mod board;
mod config;
mod dataset;
mod fixtures;
mod models;
mod state;
mod suggestions;
mod ui;

use config::AppConfig;
use dioxus::prelude::*;
use dioxus_router::prelude::*;
use once_cell::sync::OnceCell;
use state::AppState;
use tracing::info;
use ui::agent_board::AgentBoard;
use ui::status_board::StatusBoard;

pub(crate) static APP_CONFIG: OnceCell<AppConfig> = OnceCell::new();

fn main() {
    console_error_panic_hook::set_once();
    init_logging();
    bootstrap();
    dioxus::launch(App);
}

fn init_logging() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let _ = dioxus_logger::init(tracing::Level::INFO);
    });
}

fn bootstrap() {
    let config = AppConfig::from_env();
    let _ = APP_CONFIG.set(config);
    info!(count = dataset::leads().len(), "board dataset ready");
}

#[component]
fn App() -> Element {
    let app_state = use_signal(AppState::default);

    use_context_provider(|| app_state);

    rsx! {
        div { class: "relative",
            Router::<Route> {}
        }
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
pub(crate) enum Route {
    #[route("/")]
    StatusBoard {},
    #[route("/agents")]
    AgentBoard {},
}
