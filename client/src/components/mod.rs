//! Shared UI components rendered around the pages.

pub mod navigation;
