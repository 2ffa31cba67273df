//! Profile view state machine and presentation model.
//!
//! DESIGN
//! ======
//! `Loading -> {Error, Unauthenticated, Authenticated}`. Every terminal state
//! offers actions that either leave the app (login/logout) or re-enter
//! `Loading` for a fresh check. No actions exist while `Loading`, so a
//! mounted view never has two checks in flight.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;

use crate::net::auth::AuthClient;
use crate::net::types::{AuthStatus, User};

pub const CHECK_FAILED_MESSAGE: &str = "Failed to check authentication status";
pub const PLACEHOLDER_AVATAR: &str = "👤";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileState {
    Loading,
    Error(String),
    Unauthenticated { message: Option<String> },
    Authenticated(User),
}

impl ProfileState {
    /// Resolve a finished status check into the next view state.
    /// A failed check wins over `authenticated: false` so it gets the retry path.
    pub fn from_status(status: &AuthStatus) -> Self {
        if status.is_failed_check() {
            return Self::Error(CHECK_FAILED_MESSAGE.to_owned());
        }
        if !status.authenticated {
            return Self::Unauthenticated { message: status.message.clone() };
        }
        match &status.user {
            Some(user) => Self::Authenticated(user.clone()),
            None => {
                log::error!("backend reported an authenticated session without a user");
                Self::Error(CHECK_FAILED_MESSAGE.to_owned())
            }
        }
    }

    /// True while a check is in flight; drives the page's `aria-busy`.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Controls offered in this state.
    pub fn actions(&self) -> &'static [ProfileAction] {
        match self {
            Self::Loading => &[],
            Self::Error(_) => &[ProfileAction::Retry],
            Self::Unauthenticated { .. } => &[ProfileAction::LogIn],
            Self::Authenticated(_) => &[ProfileAction::Refresh, ProfileAction::LogOut],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileAction {
    Retry,
    Refresh,
    LogIn,
    LogOut,
}

impl ProfileAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::Retry => "Try Again",
            Self::Refresh => "Refresh Profile",
            Self::LogIn => "Log In",
            Self::LogOut => "Log Out",
        }
    }

    /// Run the action's side effect. Returns `true` when the view should
    /// re-enter `Loading` and check again.
    pub fn perform(self, auth: &AuthClient) -> bool {
        match self {
            Self::Retry | Self::Refresh => true,
            Self::LogIn => {
                auth.login();
                false
            }
            Self::LogOut => {
                auth.logout();
                false
            }
        }
    }
}

/// Outcome of one check: the raw status (for the debug panel) and the state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileCheck {
    pub status: AuthStatus,
    pub state: ProfileState,
}

/// Perform one status check and resolve it.
pub async fn check_profile(auth: &AuthClient) -> ProfileCheck {
    let status = auth.get_auth_status().await;
    let state = ProfileState::from_status(&status);
    ProfileCheck { status, state }
}

/// Pretty JSON of the last status, for the development debug panel.
pub fn debug_json(status: Option<&AuthStatus>) -> String {
    let user = status.and_then(|s| s.user.as_ref());
    serde_json::to_string_pretty(&serde_json::json!({ "authStatus": status, "userProfile": user }))
        .unwrap_or_default()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Avatar {
    Image(String),
    Placeholder,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

/// Display values for an authenticated user, with every fallback applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileCard {
    pub greeting: String,
    pub header_name: String,
    pub avatar: Avatar,
    pub email: String,
    pub user_id: String,
    pub username: String,
    /// Rows rendered only for metadata the backend supplied.
    pub details: Vec<DetailRow>,
}

impl ProfileCard {
    pub fn from_user(user: &User) -> Self {
        let username = user.username();
        let greeting_name = username.unwrap_or(&user.email);
        let header_name = user.meta(|m| m.name.as_ref()).or(username).unwrap_or("User");
        let avatar = user
            .meta(|m| m.picture.as_ref())
            .map_or(Avatar::Placeholder, |url| Avatar::Image(url.to_owned()));

        let mut details = Vec::new();
        if let Some(given) = user.meta(|m| m.given_name.as_ref()) {
            details.push(DetailRow { label: "First Name", value: given.to_owned() });
        }
        if let Some(family) = user.meta(|m| m.family_name.as_ref()) {
            details.push(DetailRow { label: "Last Name", value: family.to_owned() });
        }
        if let Some(updated) = user.meta(|m| m.updated_at.as_ref()) {
            details.push(DetailRow { label: "Last Updated", value: format_date(updated) });
        }

        Self {
            greeting: format!("Welcome back, {greeting_name}!"),
            header_name: header_name.to_owned(),
            avatar,
            email: user.email.clone(),
            user_id: user.id.clone(),
            username: username.unwrap_or("Not set").to_owned(),
            details,
        }
    }
}

/// `2024-01-15T10:30:00Z` -> `1/15/2024`. Unparsable input is shown as-is.
pub fn format_date(raw: &str) -> String {
    let format = format_description!("[month padding:none]/[day padding:none]/[year]");
    OffsetDateTime::parse(raw, &Rfc3339)
        .ok()
        .and_then(|ts| ts.format(format).ok())
        .unwrap_or_else(|| raw.to_owned())
}
