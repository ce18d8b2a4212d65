//! Navigation capability used by the submission flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login moves to `/home` through the client-side router; registration does a
//! full page load into `/dashboard`. Flows ask a `Navigator` for either, so
//! tests can assert on the requested route without a browser.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use std::cell::RefCell;

/// How a route should be entered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationMode {
    /// In-app router transition; the current document stays loaded.
    ClientSide,
    /// `location.href` assignment; the browser loads a new document.
    FullPageLoad,
}

pub trait Navigator {
    fn go_to(&self, route: &str, mode: NavigationMode);
}

/// Records requested navigations instead of performing them.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visits: RefCell<Vec<(String, NavigationMode)>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visits(&self) -> Vec<(String, NavigationMode)> {
        self.visits.borrow().clone()
    }

    /// Most recently requested route.
    pub fn last_route(&self) -> Option<String> {
        self.visits.borrow().last().map(|(route, _)| route.clone())
    }
}

impl Navigator for RecordingNavigator {
    fn go_to(&self, route: &str, mode: NavigationMode) {
        self.visits.borrow_mut().push((route.to_owned(), mode));
    }
}

/// Browser navigation: the Leptos router for client-side moves and
/// `window.location` for full page loads.
#[cfg(feature = "hydrate")]
#[derive(Clone)]
pub struct BrowserNavigator<F> {
    navigate: F,
}

#[cfg(feature = "hydrate")]
impl<F> BrowserNavigator<F>
where
    F: Fn(&str, leptos_router::NavigateOptions),
{
    /// Wrap the closure returned by `leptos_router::hooks::use_navigate`.
    pub fn new(navigate: F) -> Self {
        Self { navigate }
    }
}

#[cfg(feature = "hydrate")]
impl<F> Navigator for BrowserNavigator<F>
where
    F: Fn(&str, leptos_router::NavigateOptions),
{
    fn go_to(&self, route: &str, mode: NavigationMode) {
        match mode {
            NavigationMode::ClientSide => (self.navigate)(route, leptos_router::NavigateOptions::default()),
            NavigationMode::FullPageLoad => {
                if let Some(window) = web_sys::window() {
                    if let Err(e) = window.location().set_href(route) {
                        log::error!("navigation to {route} failed: {e:?}");
                    }
                }
            }
        }
    }
}
