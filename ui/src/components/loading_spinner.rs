use dioxus::prelude::*;

use crate::classes;
use crate::core::language::Language;

/// Caption shown under the ring.
pub fn loading_caption(language: &Language) -> &'static str {
    match language {
        Language::Ru => "Загрузка...",
        Language::Other(_) => "Loading...",
    }
}

/// Full-viewport loading indicator with a localized caption.
///
/// The language is passed in by the caller (usually straight from
/// [`crate::core::language::use_language`]); this component never reads context.
#[component]
pub fn LoadingSpinner(
    language: Language,
    /// Extra classes merged onto the container.
    class: Option<String>,
) -> Element {
    let caption = loading_caption(&language);
    let container = classes!["loading-spinner", class];

    rsx! {
        div { class: "{container}", role: "status", aria_live: "polite",
            div { class: "loading-spinner__ring", aria_hidden: "true" }
            p { class: "loading-spinner__caption", "{caption}" }
        }
    }
}
