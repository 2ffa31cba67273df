//! Profile page: one auth-status check per mount or explicit refresh.
//!
//! SYSTEM CONTEXT
//! ==============
//! `state::profile` owns the transitions; this page stores the current state
//! in a signal, spawns the check, and renders whichever actions the state
//! offers. Login and logout leave the app entirely.

use leptos::prelude::*;

use crate::net::auth::AuthClient;
use crate::net::types::AuthStatus;
use crate::state::profile::{
    Avatar, PLACEHOLDER_AVATAR, ProfileAction, ProfileCard, ProfileState, check_profile, debug_json,
};

#[component]
pub fn ProfilePage(auth: AuthClient, #[prop(optional)] show_debug: bool) -> impl IntoView {
    let state = RwSignal::new(ProfileState::Loading);
    let last_status = RwSignal::new(None::<AuthStatus>);

    let start_check = Callback::new({
        let auth = auth.clone();
        move |()| {
            state.set(ProfileState::Loading);
            let auth = auth.clone();
            leptos::task::spawn_local(async move {
                let check = check_profile(&auth).await;
                last_status.set(Some(check.status));
                state.set(check.state);
            });
        }
    });

    let on_action = Callback::new(move |action: ProfileAction| {
        if action.perform(&auth) {
            start_check.run(());
        }
    });

    start_check.run(());

    view! {
        <div class="page page--profile" aria-busy=move || state.with(ProfileState::is_loading).to_string()>
            {move || {
                let current = state.get();
                let actions = action_buttons(&current, on_action);
                match current {
                    ProfileState::Loading => loading_panel().into_any(),
                    ProfileState::Error(message) => error_panel(message, actions).into_any(),
                    ProfileState::Unauthenticated { .. } => login_panel(actions).into_any(),
                    ProfileState::Authenticated(user) => {
                        let debug = show_debug
                            .then(|| debug_panel(last_status));
                        view! {
                            {profile_card(ProfileCard::from_user(&user), actions)}
                            {debug}
                        }
                            .into_any()
                    }
                }
            }}
        </div>
    }
}

fn action_class(action: ProfileAction) -> &'static str {
    match action {
        ProfileAction::Retry | ProfileAction::LogIn => "btn btn--primary",
        ProfileAction::Refresh => "btn btn--secondary",
        ProfileAction::LogOut => "btn btn--danger",
    }
}

fn action_buttons(state: &ProfileState, on_action: Callback<ProfileAction>) -> impl IntoView + use<> {
    state
        .actions()
        .iter()
        .map(|&action| {
            view! {
                <button class=action_class(action) on:click=move |_| on_action.run(action)>
                    {action.label()}
                </button>
            }
        })
        .collect_view()
}

fn loading_panel() -> impl IntoView {
    view! {
        <div class="status-panel">
            <div class="spinner"></div>
            <p class="status-panel__text">"Checking authentication..."</p>
        </div>
    }
}

fn error_panel(message: String, actions: impl IntoView) -> impl IntoView {
    view! {
        <div class="status-panel">
            <div class="alert alert--error">
                <p class="alert__title">"Error"</p>
                <p>{message}</p>
            </div>
            <div class="actions">{actions}</div>
        </div>
    }
}

fn login_panel(actions: impl IntoView) -> impl IntoView {
    view! {
        <div class="status-panel">
            <div class="card card--narrow">
                <div class="status-panel__icon">"🔒"</div>
                <h2>"Not Authenticated"</h2>
                <p class="status-panel__text">"Please log in to view your profile."</p>
                <div class="actions">{actions}</div>
            </div>
        </div>
    }
}

fn profile_card(card: ProfileCard, actions: impl IntoView) -> impl IntoView {
    let ProfileCard { greeting, header_name, avatar, email, user_id, username, details } = card;
    let avatar = match avatar {
        Avatar::Image(src) => view! { <img class="avatar__img" src=src alt="Profile"/> }.into_any(),
        Avatar::Placeholder => view! { <span class="avatar__glyph">{PLACEHOLDER_AVATAR}</span> }.into_any(),
    };

    view! {
        <header class="profile-header">
            <h1>"Profile"</h1>
            <p class="profile-header__greeting">{greeting}</p>
        </header>

        <div class="card profile-card">
            <div class="profile-card__banner">
                <div class="avatar">{avatar}</div>
                <div>
                    <h2 class="profile-card__name">{header_name}</h2>
                    <p class="profile-card__email">{email.clone()}</p>
                </div>
            </div>

            <div class="profile-card__body">
                <div class="field-group">
                    <h3>"Basic Information"</h3>
                    {field("User ID", user_id)}
                    {field("Username", username)}
                    {field("Email", email)}
                </div>
                <div class="field-group">
                    <h3>"Additional Information"</h3>
                    {details.into_iter().map(|row| field(row.label, row.value)).collect_view()}
                </div>
            </div>

            <div class="actions actions--footer">{actions}</div>
        </div>
    }
}

fn field(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="field">
            <span class="field__label">{label}</span>
            <p class="field__value">{value}</p>
        </div>
    }
}

fn debug_panel(last_status: RwSignal<Option<AuthStatus>>) -> impl IntoView {
    view! {
        <div class="debug-panel">
            <h4>"Debug Information"</h4>
            <pre>{move || last_status.with(|status| debug_json(status.as_ref()))}</pre>
        </div>
    }
}
