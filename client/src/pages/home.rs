//! Home landing page with feature blurbs and build configuration info.

use leptos::prelude::*;

use crate::config::AppConfig;

const FEATURES: &[(&str, &str, &str)] = &[
    ("🔐", "Authentication", "Secure login through the backend identity provider"),
    ("👤", "Profile Management", "View and manage your user profile"),
];

#[component]
pub fn HomePage(config: AppConfig) -> impl IntoView {
    let env = config.environment_info();
    let footer_line = format!("{} Frontend • v{} • Built with Rust & Leptos", config.app_name, config.app_version);

    view! {
        <div class="page page--home">
            <section class="hero">
                <h1 class="hero__title">"Welcome to " {config.app_name} "! ✈️"</h1>
                <p class="hero__lead">
                    "Your journey begins here. Sign in to see your profile and session details."
                </p>

                <div class="card feature-grid">
                    {FEATURES
                        .iter()
                        .map(|&(icon, title, blurb)| {
                            view! {
                                <div class="feature">
                                    <div class="feature__icon">{icon}</div>
                                    <h3 class="feature__title">{title}</h3>
                                    <p class="feature__blurb">{blurb}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <a href="/profile" class="btn btn--primary btn--large">"View Your Profile"</a>
                <p class="hint">
                    "Click the button above to see your authentication status and profile information"
                </p>
            </section>

            <footer class="footer">
                <div class="config-info">
                    <h4>"🔧 Configuration Info"</h4>
                    <p class="config-info__label">"API URL:"</p>
                    <p class="config-info__value">{config.api_base_url.clone()}</p>
                    <p class="config-info__mode">{env.description}</p>
                </div>
                <p class="footer__line">{footer_line}</p>
            </footer>
        </div>
    }
}
