//! Fixed account list and password check.
//!
//! Passwords are kept as `hex(sha256(salt || password))` with a random
//! per-account salt. Matching is exact and case-sensitive on both the
//! username and the password.

use sha2::{Digest, Sha256};
use stocksense_types::{Result, Role, StockSenseError, User};

/// Salt byte length for password digests.
const SALT_BYTES: usize = 16;

struct Credential {
    user: User,
    salt: String,
    digest: String,
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("user", &self.user)
            .field("digest", &"<redacted>")
            .finish_non_exhaustive()
    }
}

/// In-memory account list. Lookup is a linear scan in registration order.
#[derive(Debug, Default)]
pub struct CredentialStore {
    entries: Vec<Credential>,
}

impl CredentialStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The two demo accounts shipped with the portal.
    #[must_use]
    pub fn demo() -> Self {
        let mut store = Self::new();
        store.insert(
            User::new("admin", Role::Admin, "EMP-2024-001", "Admin User"),
            "Admin@123",
        );
        store.insert(
            User::new("staff", Role::Staff, "EMP-2024-002", "Staff User"),
            "Staff@123",
        );
        store
    }

    /// Add an account.
    ///
    /// # Errors
    /// Returns [`StockSenseError::DuplicateUsername`] if the username is taken.
    pub fn register(&mut self, user: User, password: &str) -> Result<()> {
        if self.user_by_username(&user.username).is_some() {
            return Err(StockSenseError::DuplicateUsername(user.username));
        }
        self.insert(user, password);
        Ok(())
    }

    fn insert(&mut self, user: User, password: &str) {
        let salt = hex::encode(rand::random::<[u8; SALT_BYTES]>());
        let digest = password_digest(&salt, password);
        self.entries.push(Credential { user, salt, digest });
    }

    /// Return the account whose username and password both match exactly.
    #[must_use]
    pub fn validate_user(&self, username: &str, password: &str) -> Option<User> {
        self.entries
            .iter()
            .find(|c| c.user.username == username && password_digest(&c.salt, password) == c.digest)
            .map(|c| c.user.clone())
    }

    #[must_use]
    pub fn user_by_username(&self, username: &str) -> Option<User> {
        self.entries
            .iter()
            .find(|c| c.user.username == username)
            .map(|c| c.user.clone())
    }

    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.entries.iter().map(|c| &c.user)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn password_digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_accounts_validate() {
        let store = CredentialStore::demo();
        assert_eq!(store.len(), 2);

        let admin = store.validate_user("admin", "Admin@123").unwrap();
        assert_eq!(admin.role, Role::Admin);
        assert_eq!(admin.employee_id.as_str(), "EMP-2024-001");
        assert_eq!(admin.display_name, "Admin User");

        let staff = store.validate_user("staff", "Staff@123").unwrap();
        assert_eq!(staff.role, Role::Staff);
    }

    #[test]
    fn wrong_password_rejected() {
        let store = CredentialStore::demo();
        assert!(store.validate_user("admin", "Staff@123").is_none());
        assert!(store.validate_user("admin", "").is_none());
        assert!(store.validate_user("nobody", "Admin@123").is_none());
    }

    #[test]
    fn matching_is_case_sensitive() {
        let store = CredentialStore::demo();
        assert!(store.validate_user("Admin", "Admin@123").is_none());
        assert!(store.validate_user("admin", "admin@123").is_none());
    }

    #[test]
    fn lookup_by_username() {
        let store = CredentialStore::demo();
        assert_eq!(store.user_by_username("staff").unwrap().display_name, "Staff User");
        assert!(store.user_by_username("STAFF").is_none());
    }

    #[test]
    fn duplicate_registration_rejected() {
        let mut store = CredentialStore::demo();
        let err = store
            .register(User::dummy("admin"), "whatever")
            .unwrap_err();
        assert!(matches!(err, StockSenseError::DuplicateUsername(name) if name == "admin"));

        store.register(User::dummy("juan"), "Juan@123").unwrap();
        assert!(store.validate_user("juan", "Juan@123").is_some());
        assert_eq!(store.users().count(), 3);
    }

    #[test]
    fn digests_are_salted_per_account() {
        let mut store = CredentialStore::new();
        store.register(User::dummy("a"), "same").unwrap();
        store.register(User::dummy("b"), "same").unwrap();
        assert_ne!(store.entries[0].digest, store.entries[1].digest);
        assert!(!format!("{store:?}").contains(&store.entries[0].digest));
    }
}
