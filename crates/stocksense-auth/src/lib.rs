//! # stocksense-auth
//!
//! Login-side state of the StockSense portal:
//!
//! - [`CredentialStore`]: fixed account list with salted SHA-256 password digests
//! - [`LockoutTracker`]: progressive lockout counter persisted in a durable store
//! - [`SessionManager`]: single login session with a wall-clock TTL in a volatile store
//! - [`failure_message`]: warning text shown after each failed attempt
//! - [`AuthService`]: the three above behind one caller-owned context, plus the login flow
//!
//! ## Lockout Lifecycle
//!
//! ```text
//!  fail 1-2        fail 3        fail 4        fail 5        fail 6
//! ┌────────┐    ┌─────────┐   ┌─────────┐   ┌─────────┐   ┌───────────┐
//! │ stage 0│───▶│ stage 1 │──▶│ stage 2 │──▶│ stage 3 │──▶│ stage 4   │
//! │ warn   │    │ 30s     │   │ 30s     │   │ 1min    │   │ permanent │
//! └────────┘    └─────────┘   └─────────┘   └─────────┘   └───────────┘
//!      ▲              │ lock expires: stage → 0, counter kept
//!      └──── reset ───┴──────────────────────────────────────────┘
//! ```
//!
//! Nothing here is production authentication: the account list is
//! compiled in and session ids are not cryptographic tokens.

pub mod credentials;
pub mod lockout;
pub mod messages;
pub mod service;
pub mod session;

pub use credentials::CredentialStore;
pub use lockout::LockoutTracker;
pub use messages::failure_message;
pub use service::{AuthService, LoginOutcome};
pub use session::{SessionManager, generate_session_id};
