use dioxus::prelude::*;

use crate::core::language::use_language;

#[component]
pub fn Home() -> Element {
    // Reading the signal subscribes this view to language switches.
    let lang = use_language()();
    tracing::debug!(%lang, "home render");

    rsx! {
        section { class: "page page-home",
            h1 { {crate::t!("home-title")} }
            p { {crate::t!("home-intro")} }
            p { class: "page-home__hint", {crate::t!("home-remote-hint")} }
        }
    }
}
