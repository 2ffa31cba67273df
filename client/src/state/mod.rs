//! Client-side view state.
//!
//! DESIGN
//! ======
//! State machines live here as plain data so they can be tested without a
//! browser; pages only wire them to signals.

pub mod profile;
