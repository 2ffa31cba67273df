//! Injectable access to the page location.
//!
//! The root shell reads the path through `Navigator` and the auth client
//! leaves the app through it, so neither touches `window.location` directly.
//! `BrowserNavigator` is the real implementation (csr only);
//! tests use `StaticNavigator`.

#[cfg(test)]
#[path = "location_test.rs"]
mod location_test;

pub trait Navigator: Send + Sync {
    /// Current path, e.g. `/profile`.
    fn path(&self) -> String;
    /// Full current URL.
    fn href(&self) -> String;
    /// Full-page navigation to `url`; discards the running app.
    fn assign(&self, url: &str);
}

/// `window.location`-backed navigator.
#[cfg(feature = "csr")]
pub struct BrowserNavigator;

#[cfg(feature = "csr")]
impl Navigator for BrowserNavigator {
    fn path(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_owned())
    }

    fn href(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default()
    }

    fn assign(&self, url: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(url) {
                log::error!("navigation to {url} failed: {e:?}");
            }
        }
    }
}

/// Fixed location that records navigations instead of performing them.
#[cfg(test)]
pub(crate) struct StaticNavigator {
    href: String,
    path: String,
    assigned: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl StaticNavigator {
    /// Accepts a full URL or a bare path.
    pub(crate) fn new(href: impl Into<String>) -> Self {
        let href = href.into();
        let path = match url::Url::parse(&href) {
            Ok(parsed) => parsed.path().to_owned(),
            Err(_) if href.starts_with('/') => href.split(['?', '#']).next().unwrap_or("/").to_owned(),
            Err(_) => "/".to_owned(),
        };
        Self { href, path, assigned: std::sync::Mutex::new(Vec::new()) }
    }

    /// URLs passed to `assign`, oldest first.
    pub(crate) fn assigned(&self) -> Vec<String> {
        self.assigned.lock().map(|urls| urls.clone()).unwrap_or_default()
    }
}

#[cfg(test)]
impl Navigator for StaticNavigator {
    fn path(&self) -> String {
        self.path.clone()
    }

    fn href(&self) -> String {
        self.href.clone()
    }

    fn assign(&self, url: &str) {
        if let Ok(mut urls) = self.assigned.lock() {
            urls.push(url.to_owned());
        }
    }
}
