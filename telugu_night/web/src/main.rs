use anyhow::Context;
use dioxus::prelude::*;
use telugu_night_core::LandingSettings;

mod components;
mod dom;
mod hooks;
mod views;

use views::{Home, NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";
const POPPINS_CSS: &str = "https://fonts.googleapis.com/css2?family=Poppins:wght@400;500;700&display=swap";

// Embedded at build time; there is no runtime configuration source.
const LANDING_TOML: &str = include_str!("../landing.toml");

fn main() {
    let loaded = load_settings();
    let level = loaded
        .as_ref()
        .map(LandingSettings::log_level)
        .unwrap_or(tracing::Level::INFO);
    if let Err(err) = dioxus::logger::init(level) {
        tracing::warn!(%err, "logger was already initialised");
    }

    let settings = loaded.unwrap_or_else(|err| {
        tracing::error!("{err:#}; falling back to built-in settings");
        LandingSettings::default()
    });
    tracing::info!(event = %settings.event.title, "launching landing page");

    dioxus::LaunchBuilder::new().with_context(settings).launch(App);
}

fn load_settings() -> anyhow::Result<LandingSettings> {
    LandingSettings::from_toml(LANDING_TOML).context("embedded landing.toml is invalid")
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "preconnect", href: "https://fonts.googleapis.com" }
        document::Link { rel: "stylesheet", href: POPPINS_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: TAILWIND_CDN }

        Router::<Route> {}
    }
}
