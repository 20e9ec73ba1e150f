//! # Login Lifecycle Integration Tests
//!
//! Drives [`AuthService::login_at`] through the full escalation ladder with
//! a file-backed durable store, reopening the service between attempts the
//! way a page reload would.

use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use stocksense_auth::{AuthService, LoginOutcome};
use stocksense_storage::{FileStore, KeyValueStore, LoadOutcome, MemoryStore};
use stocksense_types::constants::SECURITY_STORAGE_KEY;
use stocksense_types::{FailureOutcome, LockStatus, StockSenseConfig};
use tempfile::TempDir;

fn reopen(dir: &Path) -> (AuthService<FileStore, MemoryStore>, LoadOutcome) {
    AuthService::open(
        FileStore::open(dir).unwrap(),
        MemoryStore::new(),
        &StockSenseConfig::default(),
    )
    .unwrap()
}

fn fail(auth: &mut AuthService<FileStore, MemoryStore>, now: DateTime<Utc>) -> FailureOutcome {
    match auth.login_at("admin", "wrong", now) {
        LoginOutcome::Rejected { outcome, .. } => outcome,
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[test]
fn escalation_survives_reloads() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();
    let mut now = Utc::now();

    let (mut auth, outcome) = reopen(dir);
    assert_eq!(outcome, LoadOutcome::Missing);
    assert!(!fail(&mut auth, now).is_locked());
    assert!(!fail(&mut auth, now).is_locked());
    let third = fail(&mut auth, now);
    assert_eq!(third.stage(), 1);
    drop(auth);

    // Still locked after a reload, and the locked attempt is not counted.
    let (mut auth, outcome) = reopen(dir);
    assert!(outcome.is_loaded());
    let status = match auth.login_at("admin", "Admin@123", now + Duration::seconds(10)) {
        LoginOutcome::Locked(status) => status,
        other => panic!("expected lock, got {other:?}"),
    };
    assert_eq!(status.remaining().unwrap().display(), "00:20");
    assert_eq!(auth.security_state().failures, 3);

    // Stages 2 and 3 after each lock runs out.
    for (failures, stage, secs) in [(4, 2, 30), (5, 3, 60)] {
        now += Duration::seconds(31);
        match fail(&mut auth, now) {
            FailureOutcome::TemporarilyLocked {
                failures: f,
                stage: s,
                duration_secs,
                ..
            } => {
                assert_eq!((f, s, duration_secs), (failures, stage, secs));
            }
            other => panic!("expected temporary lock, got {other:?}"),
        }
    }

    now += Duration::seconds(61);
    let sixth = fail(&mut auth, now);
    assert!(sixth.is_permanent());
    drop(auth);

    // Permanent lock outlives both reloads and time.
    let (mut auth, _) = reopen(dir);
    let later = now + Duration::days(30);
    assert!(matches!(
        auth.login_at("admin", "Admin@123", later),
        LoginOutcome::Locked(LockStatus::PermanentlyLocked { .. })
    ));
    assert_eq!(auth.security_state().failures, 6);

    auth.reset_security();
    drop(auth);

    let (mut auth, _) = reopen(dir);
    let outcome = auth.login_at("admin", "Admin@123", later);
    assert!(outcome.session().is_some());
}

#[test]
fn session_expires_after_login() {
    let tmp = TempDir::new().unwrap();
    let (mut auth, _) = reopen(tmp.path());
    let login_time = Utc::now();

    let session = auth
        .login_at("staff", "Staff@123", login_time)
        .session()
        .cloned()
        .unwrap();
    assert!(session.session_id.is_well_formed());

    let status = auth.validate_session_at(login_time + Duration::minutes(29));
    assert_eq!(status.into_session(), Some(session));

    let status = auth.validate_session_at(login_time + Duration::minutes(31));
    assert_eq!(status.reason().map(|r| r.as_str()), Some("expired"));
    assert!(auth.get_session().is_none());
}

#[test]
fn persisted_blob_uses_wire_field_names() {
    let tmp = TempDir::new().unwrap();
    let (mut auth, _) = reopen(tmp.path());
    let now = Utc::now();
    for _ in 0..3 {
        fail(&mut auth, now);
    }

    let raw = auth
        .lockout()
        .store()
        .get(SECURITY_STORAGE_KEY)
        .unwrap()
        .unwrap();
    let blob: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(blob["failures"], 3);
    assert_eq!(blob["stage"], 1);
    assert!(blob["lockedUntil"].is_string());
    assert_eq!(blob["permanentlyLocked"], false);
    assert!(blob["permanentLockTime"].is_null());
    assert!(blob.get("locked_until").is_none());
}
