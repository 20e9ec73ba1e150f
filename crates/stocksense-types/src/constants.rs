//! System-wide constants for the StockSense portal.

/// Durable storage key holding the serialized [`crate::SecurityState`].
pub const SECURITY_STORAGE_KEY: &str = "stockSenseSecurity";

/// Volatile storage key holding the serialized [`crate::Session`].
pub const SESSION_STORAGE_KEY: &str = "stockSenseUser";

/// Failure count at which the first temporary lock is applied.
pub const DEFAULT_LOCK_AFTER_FAILURES: u32 = 3;

/// Temporary lock durations in seconds, one entry per lock stage.
/// Stage 1 = 30s, stage 2 = 30s, stage 3 = 1min.
pub const DEFAULT_STAGE_DURATIONS_SECS: [u64; 3] = [30, 30, 60];

/// Stage number recorded once the account is permanently locked.
pub const PERMANENT_LOCK_STAGE: u8 = 4;

/// Session validity window in minutes, measured from login time.
pub const DEFAULT_SESSION_TTL_MINUTES: i64 = 30;

/// Prefix for generated session identifiers.
pub const SESSION_ID_PREFIX: &str = "sess_";

/// Number of random base-36 characters after [`SESSION_ID_PREFIX`].
pub const SESSION_ID_SUFFIX_LEN: usize = 9;

/// Number of orders returned by the recent-orders accessor when no limit is given.
pub const DEFAULT_RECENT_ORDERS: usize = 5;

/// Relative destination of the login page.
pub const DEFAULT_LOGIN_PAGE: &str = "login.html";

/// Relative destination of the dashboard page.
pub const DEFAULT_DASHBOARD_PAGE: &str = "dashboard.html";

/// Alert shown when a session is found expired.
pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please login again.";

/// Currency symbol prefixed by the currency formatter.
pub const CURRENCY_SYMBOL: &str = "\u{20B1}";

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Product name.
pub const PRODUCT_NAME: &str = "StockSense PH";
