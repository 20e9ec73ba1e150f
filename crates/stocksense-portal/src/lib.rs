//! # stocksense-portal
//!
//! Page-level glue over the auth service and the dashboard. The only side
//! effects are navigation ones (alerts and redirects), routed through a
//! caller-supplied [`Navigator`].

pub mod navigator;
pub mod portal;

pub use navigator::{NavEvent, Navigator, RecordingNavigator};
pub use portal::Portal;
