//! Shared UI crate for Supportdesk. Views, components and cross-platform helpers live here.

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    // Localized full-viewport loading indicator (components/loading_spinner.rs)
    pub mod loading_spinner;
    pub use loading_spinner::{loading_caption, LoadingSpinner};
}

#[cfg(test)]
mod tests;
