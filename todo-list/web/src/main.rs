use dioxus::prelude::*;

mod components;
mod config;
mod state;
mod views;

use config::AppConfig;
use views::TodoBoard;

const MAIN_CSS: Asset = asset!("/assets/main.css");
const FONT_AWESOME: &str = "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    dioxus::logger::init(config.level()?)?;
    tracing::info!(storage_key = %config.storage_key, "Starting to-do list");

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
    Ok(())
}

#[component]
fn App() -> Element {
    let config = use_context::<AppConfig>();
    state::use_dispatcher_provider(config.storage_key.clone(), config.toast_duration());

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: FONT_AWESOME }

        TodoBoard {}
    }
}
