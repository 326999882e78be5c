#![allow(non_snake_case)]

mod api;
mod config;
mod fixtures;
mod hooks;
mod models;
mod services;
mod state;
mod storage;
mod ui;

use api::{BackendClient, ClientError};
use config::AppConfig;
use dioxus::prelude::*;
use dioxus_router::prelude::*;
use once_cell::sync::OnceCell;
use state::AppState;
use tracing::{error, info, warn};
use ui::blog::BlogPage;
use ui::contact::ContactPage;
use ui::dashboard::DashboardPage;
use ui::landing::LandingPage;
use ui::layout::Shell;
use ui::pricing::PricingPage;

pub(crate) static API_CLIENT: OnceCell<BackendClient> = OnceCell::new();

fn main() {
    console_error_panic_hook::set_once();
    let dotenv_issue = config::load_dotenv();
    let config = AppConfig::from_env();
    init_logging(config.profile.log_level());
    if let Some(issue) = dotenv_issue {
        warn!("failed to load .env: {issue}");
    }
    bootstrap_infrastructure(config);
    launch(App);
}

fn init_logging(level: tracing::Level) {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let _ = dioxus_logger::init(level);
    });
}

fn bootstrap_infrastructure(config: AppConfig) {
    let backend = config.backend_url.clone();

    match BackendClient::new(config) {
        Ok(client) => {
            let _ = API_CLIENT.set(client);
            info!(%backend, "backend client initialized");
        }
        Err(err) => {
            report_client_error("failed to initialize backend client", &err);
        }
    }
}

fn report_client_error(context: &str, err: &ClientError) {
    error!(%context, ?err, status = ?err.status(), "api bootstrap error");
}

#[component]
fn App() -> Element {
    let app_state = use_signal(AppState::default);

    use_context_provider(|| app_state);

    rsx! {
        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Landing {},
        #[route("/features")]
        Features {},
        #[route("/pricing")]
        Pricing {},
        #[route("/blog")]
        Blog {},
        #[route("/dashboard")]
        Dashboard {},
        #[route("/contact")]
        Contact {},
        #[route("/:..segments")]
        Fallback { segments: Vec<String> },
}

impl Route {
    /// Maps a path to its page; anything unrecognised lands on the home page.
    pub fn resolve(path: &str) -> Self {
        path.parse().unwrap_or(Route::Landing {})
    }
}

#[component]
fn Landing() -> Element {
    rsx! { LandingPage {} }
}

#[component]
fn Features() -> Element {
    rsx! { LandingPage {} }
}

#[component]
fn Pricing() -> Element {
    rsx! { PricingPage {} }
}

#[component]
fn Blog() -> Element {
    rsx! { BlogPage {} }
}

#[component]
fn Dashboard() -> Element {
    rsx! { DashboardPage {} }
}

#[component]
fn Contact() -> Element {
    rsx! { ContactPage {} }
}

#[component]
fn Fallback(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "unknown route, rendering landing page");
    rsx! { LandingPage {} }
}
