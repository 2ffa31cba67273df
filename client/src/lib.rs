//! # traveller-client
//!
//! Leptos + WASM single-page shell for Vibed Traveller: a navigation bar, a
//! home page, and a profile page showing the session state reported by the
//! backend.
//!
//! The backend owns authentication through an HTTP-only session cookie.
//! This crate only asks it who is logged in (`net::auth`) and sends the
//! browser to its login/logout endpoints.
//!
//! Browser-only code sits behind the `csr` feature; everything else builds
//! and tests on the host.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: wire config, transport and location, then mount.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use std::sync::Arc;

    use leptos::prelude::*;

    use crate::app::App;
    use crate::config::AppConfig;
    use crate::net::auth::AuthClient;
    use crate::net::transport::BrowserTransport;
    use crate::util::location::{BrowserNavigator, Navigator};

    console_error_panic_hook::set_once();

    let loaded = AppConfig::from_build_env();
    let level = match &loaded {
        Ok(cfg) if !cfg.is_development() => log::Level::Info,
        _ => log::Level::Debug,
    };
    let _ = console_log::init_with_level(level);

    let config = loaded.unwrap_or_else(|e| {
        log::error!("invalid build configuration, using defaults: {e}");
        AppConfig::default()
    });
    log::info!(
        "{} v{} ({}) using backend {}",
        config.app_name,
        config.app_version,
        config.environment.as_str(),
        config.api_base_url
    );

    let navigator: Arc<dyn Navigator> = Arc::new(BrowserNavigator);
    let transport = Arc::new(BrowserTransport::new(config.status_timeout_ms));
    let auth = AuthClient::new(config.api_base_url.clone(), transport, navigator.clone());

    leptos::mount::mount_to_body(move || view! { <App config auth navigator/> });
}
