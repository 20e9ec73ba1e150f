//! # stocksense-types
//!
//! Shared types, errors, and configuration for the **StockSense PH** demo
//! inventory portal.
//!
//! This crate is the leaf dependency of the workspace; every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`SessionId`], [`EmployeeId`], [`InvoiceId`]
//! - **User model**: [`User`], [`Role`]
//! - **Lockout model**: [`SecurityState`], [`FailureOutcome`], [`LockStatus`], [`RemainingTime`]
//! - **Session model**: [`Session`], [`SessionStatus`], [`InvalidReason`]
//! - **Dashboard model**: [`DashboardStats`], [`DashboardOrder`], [`OrderStatus`], [`PaymentMethod`]
//! - **Configuration**: [`StockSenseConfig`], [`LockoutPolicy`], [`SessionConfig`], [`PortalConfig`]
//! - **Errors**: [`StockSenseError`] with `SS_ERR_` prefix codes
//! - **Constants**: storage keys, thresholds, and defaults

pub mod config;
pub mod constants;
pub mod dashboard;
pub mod error;
pub mod ids;
pub mod security;
pub mod session;
pub mod user;

// Re-export all primary types at crate root for ergonomic imports:
//   use stocksense_types::{User, Session, SecurityState, ...};

pub use config::*;
pub use dashboard::*;
pub use error::*;
pub use ids::*;
pub use security::*;
pub use session::*;
pub use user::*;

// Constants are accessed via `stocksense_types::constants::FOO`
// (not re-exported to avoid name collisions).
