//! Page modules for top-level screens.
//!
//! ARCHITECTURE
//! ============
//! The root shell picks exactly one page per load. Pages own their
//! orchestration and take configuration and clients as props.

pub mod home;
pub mod profile;
