//! Browser capability wrappers.

pub mod location;
