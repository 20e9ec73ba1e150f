//! # stocksense-dashboard
//!
//! Read-only dashboard model and the display helpers used by the portal
//! pages.
//!
//! - [`DashboardData`]: headline counters plus the fixed order list
//! - [`Dashboard`]: accessors returning owned copies of that data
//! - [`format`]: peso amounts, Manila-time dates, status badge markup

pub mod data;
pub mod format;

pub use data::{Dashboard, DashboardData};
pub use format::{format_currency, format_date, format_datetime, parse_timestamp, status_badge};
