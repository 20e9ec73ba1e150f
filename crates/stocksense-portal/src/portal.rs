//! The portal context used by the login and dashboard pages.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use stocksense_auth::{AuthService, LoginOutcome};
use stocksense_dashboard::{Dashboard, format};
use stocksense_storage::{KeyValueStore, LoadOutcome};
use stocksense_types::{
    DashboardOrder, DashboardStats, InvalidReason, PortalConfig, Result, Session, SessionStatus,
    StockSenseConfig,
};

use crate::Navigator;

/// Auth service, dashboard and navigator behind one page-facing handle.
#[derive(Debug)]
pub struct Portal<D: KeyValueStore, V: KeyValueStore, N: Navigator> {
    auth: AuthService<D, V>,
    dashboard: Dashboard,
    navigator: N,
    pages: PortalConfig,
}

impl<D: KeyValueStore, V: KeyValueStore, N: Navigator> Portal<D, V, N> {
    /// Open the auth service over the given stores and attach the mock
    /// dashboard.
    pub fn open(
        durable: D,
        volatile: V,
        navigator: N,
        config: &StockSenseConfig,
    ) -> Result<(Self, LoadOutcome)> {
        let (auth, outcome) = AuthService::open(durable, volatile, config)?;
        let portal = Self::new(auth, Dashboard::default(), navigator, config.portal.clone());
        Ok((portal, outcome))
    }

    #[must_use]
    pub fn new(
        auth: AuthService<D, V>,
        dashboard: Dashboard,
        navigator: N,
        pages: PortalConfig,
    ) -> Self {
        Self {
            auth,
            dashboard,
            navigator,
            pages,
        }
    }

    // ── Session guard ───────────────────────────────────────────────

    /// Page guard: the active session, or `None` after sending the user to
    /// the login page (with an alert first if the session just expired).
    pub fn validate_session(&mut self) -> Option<Session> {
        self.validate_session_at(Utc::now())
    }

    pub fn validate_session_at(&mut self, now: DateTime<Utc>) -> Option<Session> {
        match self.auth.validate_session_at(now) {
            SessionStatus::Valid(session) => Some(session),
            SessionStatus::Invalid(reason) => {
                if reason == InvalidReason::Expired {
                    self.navigator.alert(&self.pages.expired_message);
                }
                tracing::debug!(reason = %reason, "redirecting to login");
                self.navigator.redirect(&self.pages.login_page);
                None
            }
        }
    }

    /// End the session and go back to the login page.
    pub fn logout(&mut self) {
        self.auth.destroy_session();
        tracing::info!("logged out");
        self.navigator.redirect(&self.pages.login_page);
    }

    /// Login-form submit. Redirects to the dashboard on success.
    pub fn login(&mut self, username: &str, password: &str) -> LoginOutcome {
        self.login_at(username, password, Utc::now())
    }

    pub fn login_at(&mut self, username: &str, password: &str, now: DateTime<Utc>) -> LoginOutcome {
        let outcome = self.auth.login_at(username, password, now);
        if matches!(outcome, LoginOutcome::Authenticated(_)) {
            self.navigator.redirect(&self.pages.dashboard_page);
        }
        outcome
    }

    // ── Pass-throughs ───────────────────────────────────────────────

    #[must_use]
    pub fn session(&self) -> Option<Session> {
        self.auth.get_session()
    }

    #[must_use]
    pub fn stats(&self) -> DashboardStats {
        self.dashboard.stats()
    }

    #[must_use]
    pub fn orders(&self, limit: Option<usize>) -> Vec<DashboardOrder> {
        self.dashboard.recent_orders(limit)
    }

    #[must_use]
    pub fn all_orders(&self) -> Vec<DashboardOrder> {
        self.dashboard.all_orders()
    }

    #[must_use]
    pub fn format_currency(&self, amount: Decimal) -> String {
        format::format_currency(amount)
    }

    #[must_use]
    pub fn format_date(&self, iso: &str) -> String {
        format::format_date(iso)
    }

    #[must_use]
    pub fn status_badge(&self, status: &str) -> String {
        format::status_badge(status)
    }

    // ── Parts ───────────────────────────────────────────────────────

    #[must_use]
    pub fn auth(&self) -> &AuthService<D, V> {
        &self.auth
    }

    pub fn auth_mut(&mut self) -> &mut AuthService<D, V> {
        &mut self.auth
    }

    #[must_use]
    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NavEvent, RecordingNavigator};
    use chrono::Duration;
    use stocksense_storage::MemoryStore;
    use stocksense_types::User;
    use stocksense_types::constants::SESSION_EXPIRED_MESSAGE;

    type TestPortal = Portal<MemoryStore, MemoryStore, RecordingNavigator>;

    fn portal() -> TestPortal {
        Portal::open(
            MemoryStore::new(),
            MemoryStore::new(),
            RecordingNavigator::new(),
            &StockSenseConfig::default(),
        )
        .unwrap()
        .0
    }

    #[test]
    fn missing_session_redirects_without_alert() {
        let mut p = portal();
        assert!(p.validate_session().is_none());
        assert_eq!(
            p.navigator().events(),
            [NavEvent::Redirect("login.html".into())]
        );
    }

    #[test]
    fn expired_session_alerts_then_redirects() {
        let mut p = portal();
        let now = Utc::now();
        p.auth_mut()
            .sessions_mut()
            .create_session_at(&User::dummy("ana"), now - Duration::minutes(45));

        assert!(p.validate_session_at(now).is_none());
        assert_eq!(
            p.navigator().events(),
            [
                NavEvent::Alert(SESSION_EXPIRED_MESSAGE.into()),
                NavEvent::Redirect("login.html".into()),
            ]
        );
        assert!(p.session().is_none());
    }

    #[test]
    fn valid_session_has_no_side_effects() {
        let mut p = portal();
        let session = p.auth_mut().create_session(&User::dummy("ana"));
        assert_eq!(p.validate_session(), Some(session));
        assert!(p.navigator().events().is_empty());
    }

    #[test]
    fn login_redirects_only_on_success() {
        let mut p = portal();
        assert!(matches!(
            p.login("admin", "guess"),
            LoginOutcome::Rejected { .. }
        ));
        assert!(p.navigator().events().is_empty());

        assert!(p.login("admin", "Admin@123").session().is_some());
        assert_eq!(p.navigator().last_redirect(), Some("dashboard.html"));
    }

    #[test]
    fn logout_destroys_and_redirects() {
        let mut p = portal();
        p.login("staff", "Staff@123");
        p.logout();
        assert!(p.session().is_none());
        assert_eq!(p.navigator().last_redirect(), Some("login.html"));
    }

    #[test]
    fn custom_pages() {
        let mut config = StockSenseConfig::default();
        config.portal.login_page = "/signin".into();
        let (mut p, _) = Portal::open(
            MemoryStore::new(),
            MemoryStore::new(),
            RecordingNavigator::new(),
            &config,
        )
        .unwrap();
        p.logout();
        assert_eq!(p.navigator().last_redirect(), Some("/signin"));
    }

    #[test]
    fn dashboard_passthroughs() {
        let p = portal();
        assert_eq!(p.stats().products, 2543);
        assert_eq!(p.orders(Some(2)).len(), 2);
        assert_eq!(p.orders(None).len(), 5);
        assert_eq!(p.all_orders().len(), 5);
        assert_eq!(p.format_currency(Decimal::from(724_500)), "₱724,500.00");
        assert_eq!(p.format_date("2024-02-28T10:30:00"), "Feb 28, 10:30 AM");
        assert!(p.status_badge("Pending").contains("amber"));
    }
}
