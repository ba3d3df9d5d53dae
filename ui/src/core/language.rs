//! Current language selection shared across the view tree.
//!
//! Views never look the language up themselves; callers read the context
//! signal (see [`use_language`]) and pass the value down explicitly.

use dioxus::prelude::*;

use crate::i18n;

const RUSSIAN: &str = "ru";
const DEFAULT_CODE: &str = "en";

/// The active language. Only Russian gets dedicated handling; every other
/// code is carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Language {
    Ru,
    Other(OtherLanguage),
}

/// Any code other than `"ru"`. Only built through [`Language::from_code`], so
/// an `Other` can never carry the Russian code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OtherLanguage(String);

impl OtherLanguage {
    pub fn code(&self) -> &str {
        &self.0
    }
}

impl Language {
    /// Exact match on `"ru"`. Regional tags such as `ru-RU` are *not* folded
    /// here; use [`Language::from_locale`] for those.
    pub fn from_code(code: &str) -> Self {
        if code == RUSSIAN {
            Self::Ru
        } else {
            Self::Other(OtherLanguage(code.to_string()))
        }
    }

    /// Builds a selection from a locale tag (`ru-RU` -> `ru`).
    pub fn from_locale(tag: &str) -> Self {
        let primary = tag.split(['-', '_']).next().unwrap_or_default();
        Self::from_code(primary)
    }

    pub fn code(&self) -> &str {
        match self {
            Self::Ru => RUSSIAN,
            Self::Other(other) => other.code(),
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::from_code(DEFAULT_CODE)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Provides `Signal<Language>` to the tree, seeded from the loader's negotiated locale.
#[component]
pub fn LanguageProvider(children: Element) -> Element {
    let lang = use_signal(|| {
        i18n::init();
        Language::from_locale(&i18n::current_language())
    });
    use_context_provider(|| lang);

    rsx! { {children} }
}

/// The shared language signal, or a local default one when no provider is mounted.
pub fn use_language() -> Signal<Language> {
    if let Some(sig) = try_use_context::<Signal<Language>>() {
        return sig;
    }

    tracing::warn!("missing LanguageProvider context, using default language");
    use_signal(Language::default)
}
