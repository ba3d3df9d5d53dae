//! Route parameters and navigation requests.
//!
//! The shared crate does not know any platform's `Route` enum, so views take
//! path parameters as plain data and issue navigation through
//! [`NavigationRequester`].

use std::collections::BTreeMap;
use std::rc::Rc;

use dioxus::prelude::*;

/// Application root.
pub const HOME_PATH: &str = "/";

/// Path parameter carrying the remote-controlled device.
pub const DEVICE_ID_PARAM: &str = "deviceId";

/// Named values captured from the current route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams(BTreeMap<String, String>);

impl PathParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PathParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

/// Something that can move the app to another location. Fire and forget.
pub trait NavigationRequester {
    fn request(&self, path: &str);
}

impl NavigationRequester for Navigator {
    fn request(&self, path: &str) {
        tracing::debug!(path, "navigation requested");
        if let Some(failure) = self.push(NavigationTarget::Internal(path.to_owned())) {
            tracing::warn!(?failure, path, "navigation request rejected");
        }
    }
}

/// A requester handed down through context. Views prefer it over the router's
/// navigator, which lets a shell (or a test) observe navigation.
#[derive(Clone)]
pub struct NavigationContext(Rc<dyn NavigationRequester>);

impl NavigationContext {
    pub fn new(requester: impl NavigationRequester + 'static) -> Self {
        Self(Rc::new(requester))
    }
}

impl NavigationRequester for NavigationContext {
    fn request(&self, path: &str) {
        self.0.request(path);
    }
}

/// Sends the app back to [`HOME_PATH`].
pub fn navigate_home(nav: &impl NavigationRequester) {
    nav.request(HOME_PATH);
}
