#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::{AppNavbar, LoadingSpinner};
use ui::core::language::{use_language, LanguageProvider};
use ui::core::navigation::{PathParams, DEVICE_ID_PARAM};
use ui::views::{device_id_from_params, DeviceRemotePage, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Home {},
    #[route("/device/:device_id")]
    DeviceRemote { device_id: String },
    #[route("/device")]
    RemoteTest {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Shared theme, always inlined on desktop.

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Supportdesk – v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn nav_home(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Home {}, "{label}" })
}
fn nav_remote(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::RemoteTest {}, "{label}" })
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    register_nav(NavBuilder {
        home: nav_home,
        remote: nav_remote,
    });

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        LanguageProvider {
            Shell {}
        }
    }
}

#[component]
fn Shell() -> Element {
    let lang = use_language();
    tracing::debug!(lang = %lang(), "desktop shell render");

    rsx! {
        // Keyed by language to force a full remount of the routed tree on switch.
        div {
            key: "{lang()}",
            SuspenseBoundary {
                fallback: move |_: SuspenseContext| rsx! { LoadingSpinner { language: lang() } },
                Router::<Route> { }
            }
        }
    }
}

/// A desktop-specific layout around the shared navbar, so it can use this crate's `Route`.
#[component]
fn DesktopNavbar() -> Element {
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
