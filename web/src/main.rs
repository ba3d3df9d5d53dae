use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::{AppNavbar, LoadingSpinner};
use ui::core::language::{use_language, LanguageProvider};
use ui::core::navigation::{PathParams, DEVICE_ID_PARAM};
use ui::views::{device_id_from_params, DeviceRemotePage, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/device/:device_id")]
    DeviceRemote { device_id: String },
    #[route("/device")]
    RemoteTest {},
}

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_remote(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::RemoteTest {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder {
        home: nav_home,
        remote: nav_remote,
    });

    rsx! {
        document::Style { "{THEME_CSS}" }

        LanguageProvider {
            Shell {}
        }
    }
}

/// Router wrapped in a suspense boundary whose fallback follows the selected language.
#[component]
fn Shell() -> Element {
    let lang = use_language();
    tracing::debug!(lang = %lang(), "web shell render");

    rsx! {
        // Keyed by language so the memoized routed tree re-renders its localized text.
        div {
            key: "{lang()}",
            SuspenseBoundary {
                fallback: move |_: SuspenseContext| rsx! { LoadingSpinner { language: lang() } },
                Router::<Route> {}
            }
        }
    }
}

/// A web-specific layout around the shared navbar, so it can use this crate's `Route`.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}

#[component]
fn DeviceRemote(device_id: String) -> Element {
    let params: PathParams = [(DEVICE_ID_PARAM, device_id)].into_iter().collect();
    rsx! {
        DeviceRemotePage { device_id: device_id_from_params(&params) }
    }
}

/// `/device` has no id segment, so the page gets no device id.
#[component]
fn RemoteTest() -> Element {
    rsx! {
        DeviceRemotePage { device_id: None }
    }
}
