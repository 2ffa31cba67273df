//! Networking modules for the backend auth contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` maps backend responses onto `AuthStatus` and drives login/logout
//! navigations, `transport` abstracts the browser `fetch`, and `types`
//! defines the wire schema.

pub mod auth;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;
