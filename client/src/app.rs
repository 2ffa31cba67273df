//! Root shell: navigation bar plus exactly one page chosen by path.
//!
//! DESIGN
//! ======
//! There is no client-side router. The path is read once from the injected
//! `Navigator` and matched exactly; unknown paths render the home page.
//! Links are plain anchors, so every navigation reloads and re-matches.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::navigation::Navigation;
use crate::config::AppConfig;
use crate::net::auth::AuthClient;
use crate::pages::{home::HomePage, profile::ProfilePage};
use crate::util::location::Navigator;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Profile,
}

impl Route {
    /// Exact path match; anything unrecognized is `Home`.
    pub fn from_path(path: &str) -> Self {
        match path {
            "/profile" => Self::Profile,
            _ => Self::Home,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Profile => "/profile",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Profile => "Profile",
        }
    }
}

pub fn current_route(navigator: &dyn Navigator) -> Route {
    Route::from_path(&navigator.path())
}

/// Root application component.
#[component]
pub fn App(config: AppConfig, auth: AuthClient, navigator: Arc<dyn Navigator>) -> impl IntoView {
    provide_meta_context();

    let route = current_route(navigator.as_ref());
    log::debug!("rendering {:?} for {}", route, navigator.path());

    let title = format!("{} | {}", config.app_name, route.title());
    let app_name = config.app_name;
    let page = match route {
        Route::Home => view! { <HomePage config=config.clone()/> }.into_any(),
        Route::Profile => view! { <ProfilePage auth=auth.clone() show_debug=config.is_development()/> }.into_any(),
    };

    view! {
        <Title text=title/>
        <Navigation auth app_name/>
        <main class="main">{page}</main>
    }
}
