use dioxus::prelude::*;

use crate::classes;
use crate::core::language::use_language;
use crate::core::navigation::{navigate_home, NavigationContext, PathParams, DEVICE_ID_PARAM};

/// Device identifier from the current route, unvalidated.
pub fn device_id_from_params(params: &PathParams) -> Option<String> {
    params.get(DEVICE_ID_PARAM).map(str::to_string)
}

/// `Device ID: <id>`, with an empty value when the route carried none.
pub fn device_id_label(device_id: Option<&str>) -> String {
    format!("Device ID: {}", device_id.unwrap_or_default())
}

/// Test variant of the device remote page.
///
/// `panel_btn_from_remote` and `on_remote_button` are accepted so routes can be
/// wired against the full remote page's props; this variant only displays the
/// device id and never calls the remote button handler.
///
/// The back button goes through a provided [`NavigationContext`] when there is
/// one, otherwise through the router's navigator.
#[component]
pub fn DeviceRemotePage(
    /// Resolved by the caller from the route; required so absence is explicit.
    #[props(!optional)]
    device_id: Option<String>,
    panel_btn_from_remote: Option<i64>,
    on_remote_button: Option<EventHandler<String>>,
) -> Element {
    tracing::debug!(
        ?device_id,
        ?panel_btn_from_remote,
        has_remote_handler = on_remote_button.is_some(),
        "device remote render"
    );

    // Reading the signal re-renders the localized chrome on a language switch.
    let lang = use_language()();
    let requester = try_use_context::<NavigationContext>();

    let label = device_id_label(device_id.as_deref());
    let back_class = classes!["button", "button--primary", "device-remote__back"];

    rsx! {
        section { class: "page page-device-remote", lang: "{lang}",
            h1 { {crate::t!("remote-title")} }
            p { class: "device-remote__id", "{label}" }
            button {
                class: "{back_class}",
                r#type: "button",
                // Router is resolved on click so the page renders outside one too.
                onclick: move |_| match &requester {
                    Some(ctx) => navigate_home(ctx),
                    None => navigate_home(&navigator()),
                },
                {crate::t!("remote-back-home")}
            }
        }
    }
}
