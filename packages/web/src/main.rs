use dioxus::prelude::*;

use api::{ClientConfig, HttpClient};
use ui::{AuthProvider, ToastProvider};
use views::{
    CreatePage, Dashboard, EditPage, Help, Landing, Login, NotFound, Overview, Pages, Portfolio,
    PortfolioPage, Profile, Setup, Signup, Themes,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Landing {},
    #[route("/login?:from")]
    Login { from: String },
    #[route("/signup")]
    Signup {},
    #[route("/setup")]
    Setup {},
    #[layout(Dashboard)]
        #[route("/dashboard")]
        Overview {},
        #[route("/dashboard/pages")]
        Pages {},
        #[route("/dashboard/pages/create")]
        CreatePage {},
        #[route("/dashboard/themes")]
        Themes {},
        #[route("/dashboard/profile")]
        Profile {},
        #[route("/dashboard/help")]
        Help {},
    #[end_layout]
    #[route("/edit-page/:id")]
    EditPage { id: String },
    #[route("/:username")]
    Portfolio { username: String },
    #[route("/:username/:slug")]
    PortfolioPage { username: String, slug: String },
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

/// Backend client from the build-time configuration. Without a configured base URL
/// the API is expected on the page's own origin.
fn make_client() -> Result<HttpClient, String> {
    let mut config = ClientConfig::from_build_env();
    if config.api.base_url.is_empty() {
        if let Some(origin) = ui::navigation::location_origin() {
            config.api.base_url = origin;
        }
    }
    tracing::info!("backend at {:?}", config.api.base_url);
    HttpClient::new(config).map_err(|e| {
        tracing::error!("invalid backend configuration: {e}");
        e.to_string()
    })
}

#[component]
fn App() -> Element {
    let client = use_hook(make_client);

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::LINKFREE_CSS }

        ToastProvider {
            match client {
                Ok(client) => rsx! {
                    AuthProvider { client,
                        Router::<Route> {}
                    }
                },
                Err(message) => rsx! {
                    div { class: "min-h-screen flex items-center justify-center p-6",
                        p { class: "banner-error", "LinkFree is misconfigured: {message}" }
                    }
                },
            }
        }
    }
}
