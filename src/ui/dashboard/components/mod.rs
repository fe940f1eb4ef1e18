//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod activity;
pub mod footer;
pub mod header;
pub mod logs;
pub mod stats;
pub mod testimonials;
pub mod toasts;
