//! Top navigation bar: brand, static links, logout.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos::prelude::*;

use crate::app::Route;
use crate::net::auth::AuthClient;

/// Routes linked from the bar, in display order.
const NAV_ROUTES: [Route; 2] = [Route::Home, Route::Profile];

/// `(href, label)` pairs. Plain anchors, so following one reloads the page.
pub fn nav_links() -> impl Iterator<Item = (&'static str, &'static str)> {
    NAV_ROUTES.into_iter().map(|route| (route.path(), route.title()))
}

/// Stateless navigation bar. The logout button is always shown, whether or
/// not a session exists.
#[component]
pub fn Navigation(auth: AuthClient, app_name: &'static str) -> impl IntoView {
    let on_logout = move |_| auth.logout();

    view! {
        <nav class="nav">
            <div class="nav__inner">
                <div class="nav__brand">
                    <span class="nav__logo">"✈️"</span>
                    <span class="nav__title">{app_name}</span>
                </div>
                <div class="nav__links">
                    {nav_links()
                        .map(|(href, label)| view! { <a href=href class="nav__link">{label}</a> })
                        .collect_view()}
                </div>
                <div class="nav__actions">
                    <button class="btn btn--danger btn--small" on:click=on_logout>
                        "Log Out"
                    </button>
                </div>
            </div>
        </nav>
    }
}
