//! Session storage contract, navigation intents and the session actions
//! (login completion and logout) built on them.

use crate::error::ConsoleError;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const USER_PHONE_KEY: &str = "userPhone";

/// Every session-scoped key a logout must remove.
///
/// `userPassword` is never written by this crate but older clients stored it,
/// so logout still clears it.
pub const SESSION_KEYS: &[&str] = &[
    ACCESS_TOKEN_KEY,
    REFRESH_TOKEN_KEY,
    "userFullName",
    "email",
    "phoneNumber",
    USER_PHONE_KEY,
    "userPassword",
];

/// Small key-value store persisted on the client (localStorage in the browser).
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), ConsoleError>;

    fn remove(&self, key: &str) -> Result<(), ConsoleError>;

    /// Write several keys as one action. If any write fails the keys written
    /// so far are removed again and the error is returned.
    fn set_all(&self, entries: &[(&str, &str)]) -> Result<(), ConsoleError> {
        for (i, (key, value)) in entries.iter().enumerate() {
            if let Err(e) = self.set(key, value) {
                let written: Vec<&str> = entries[..i].iter().map(|(key, _)| *key).collect();
                if let Err(rollback) = self.remove_all(&written) {
                    log::warn!("Rollback after failed write was incomplete: {}", rollback);
                }
                return Err(e);
            }
        }
        Ok(())
    }

    /// Remove every key, continuing past failures. Returns the first failure.
    fn remove_all(&self, keys: &[&str]) -> Result<(), ConsoleError> {
        let mut first_error = None;
        for key in keys {
            if let Err(e) = self.remove(key) {
                log::warn!("{}", e);
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}

/// In-memory store, used natively and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ConsoleError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), ConsoleError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// The two places the console ever navigates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// Public entry view (the login screen)
    PublicEntry,
    /// Protected dashboard
    Dashboard,
}

pub trait Navigator {
    fn go_to(&self, destination: Destination);
}

/// Whether a non-empty access token is persisted right now.
pub fn session_present<S: SessionStore + ?Sized>(store: &S) -> bool {
    store
        .get(ACCESS_TOKEN_KEY)
        .is_some_and(|token| !token.is_empty())
}

/// Tokens returned by a successful sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTokens {
    pub access_token: String,
    pub refresh_token: String,
}

/// Persist a fresh session and move to the dashboard.
///
/// Nothing is written and no navigation happens if the access token is empty
/// or the store rejects a write.
pub fn complete_login<S, N>(
    store: &S,
    navigator: &N,
    tokens: &SessionTokens,
    phone: &str,
) -> Result<(), ConsoleError>
where
    S: SessionStore + ?Sized,
    N: Navigator + ?Sized,
{
    if tokens.access_token.is_empty() {
        return Err(ConsoleError::SessionAbsent);
    }
    store.set_all(&[
        (ACCESS_TOKEN_KEY, tokens.access_token.as_str()),
        (REFRESH_TOKEN_KEY, tokens.refresh_token.as_str()),
        (USER_PHONE_KEY, phone),
    ])?;
    log::info!("Session established, opening dashboard");
    navigator.go_to(Destination::Dashboard);
    Ok(())
}

/// Remove every session-scoped key in one step.
pub fn clear_session<S: SessionStore + ?Sized>(store: &S) -> Result<(), ConsoleError> {
    store.remove_all(SESSION_KEYS)?;
    log::info!("Session cleared");
    Ok(())
}

/// Clear the session, then go to the public entry.
///
/// Navigation happens even if a key could not be removed; the failure is
/// logged and returned.
pub fn end_session<S, N>(store: &S, navigator: &N) -> Result<(), ConsoleError>
where
    S: SessionStore + ?Sized,
    N: Navigator + ?Sized,
{
    let cleared = clear_session(store);
    if let Err(e) = &cleared {
        log::error!("Session only partly cleared: {}", e);
    }
    navigator.go_to(Destination::PublicEntry);
    cleared
}

/// Sign-in form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub phone: String,
    pub password: String,
}

/// Shown when the sign-in mutation is rejected.
pub const LOGIN_FAILED_MESSAGE: &str = "Invalid phone number or password. Please try again.";

impl LoginForm {
    pub fn is_submittable(&self) -> bool {
        !self.phone.trim().is_empty() && !self.password.trim().is_empty()
    }

    /// Variables for the sign-in mutation.
    pub fn credentials(&self) -> serde_json::Value {
        serde_json::json!({
            "phoneNumber": self.phone.trim(),
            "password": self.password,
        })
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Records every navigation it is asked to perform.
    #[derive(Debug, Default)]
    pub struct RecordingNavigator {
        pub visits: RefCell<Vec<Destination>>,
    }

    impl RecordingNavigator {
        pub fn visits(&self) -> Vec<Destination> {
            self.visits.borrow().clone()
        }
    }

    impl Navigator for RecordingNavigator {
        fn go_to(&self, destination: Destination) {
            self.visits.borrow_mut().push(destination);
        }
    }

    /// Store that refuses to write or remove one particular key.
    #[derive(Debug, Default)]
    pub struct FailingStore {
        pub inner: MemoryStore,
        pub reject: &'static str,
    }

    impl SessionStore for FailingStore {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), ConsoleError> {
            if key == self.reject {
                return Err(ConsoleError::Storage("quota exceeded".to_string()));
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), ConsoleError> {
            if key == self.reject {
                return Err(ConsoleError::Storage(format!("cannot remove {}", key)));
            }
            self.inner.remove(key)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;

    fn tokens() -> SessionTokens {
        SessionTokens {
            access_token: "access".to_string(),
            refresh_token: "refresh".to_string(),
        }
    }

    #[test]
    fn presence_requires_non_empty_access_token() {
        let store = MemoryStore::new();
        assert!(!session_present(&store));
        store.set(ACCESS_TOKEN_KEY, "").unwrap();
        assert!(!session_present(&store));
        store.set(ACCESS_TOKEN_KEY, "abc").unwrap();
        assert!(session_present(&store));
    }

    #[test]
    fn login_stores_tokens_and_navigates_once() {
        let store = MemoryStore::new();
        let nav = RecordingNavigator::default();
        complete_login(&store, &nav, &tokens(), "0911000000").unwrap();

        assert_eq!(store.get(ACCESS_TOKEN_KEY).as_deref(), Some("access"));
        assert_eq!(store.get(REFRESH_TOKEN_KEY).as_deref(), Some("refresh"));
        assert_eq!(store.get(USER_PHONE_KEY).as_deref(), Some("0911000000"));
        assert_eq!(store.get("userPassword"), None);
        assert_eq!(nav.visits(), vec![Destination::Dashboard]);
    }

    #[test]
    fn login_with_empty_token_is_rejected() {
        let store = MemoryStore::new();
        let nav = RecordingNavigator::default();
        let tokens = SessionTokens {
            access_token: String::new(),
            refresh_token: "r".to_string(),
        };
        assert_eq!(
            complete_login(&store, &nav, &tokens, "1"),
            Err(ConsoleError::SessionAbsent)
        );
        assert!(store.is_empty());
        assert!(nav.visits().is_empty());
    }

    #[test]
    fn failed_write_leaves_no_partial_session() {
        let store = FailingStore {
            inner: MemoryStore::new(),
            reject: USER_PHONE_KEY,
        };
        let nav = RecordingNavigator::default();
        let result = complete_login(&store, &nav, &tokens(), "1");

        assert!(matches!(result, Err(ConsoleError::Storage(_))));
        assert!(store.inner.is_empty());
        assert!(nav.visits().is_empty());
    }

    #[test]
    fn end_session_clears_every_key() {
        let store = MemoryStore::new();
        for key in SESSION_KEYS {
            store.set(key, "value").unwrap();
        }
        store.set("console_config", "{}").unwrap();
        let nav = RecordingNavigator::default();

        end_session(&store, &nav).unwrap();

        for key in SESSION_KEYS {
            assert_eq!(store.get(key), None, "{} survived logout", key);
        }
        // Non-session keys are left alone
        assert_eq!(store.len(), 1);
        assert_eq!(nav.visits(), vec![Destination::PublicEntry]);
    }

    #[test]
    fn failed_removal_is_reported_and_logout_continues() {
        let store = FailingStore {
            inner: MemoryStore::new(),
            reject: ACCESS_TOKEN_KEY,
        };
        for key in SESSION_KEYS {
            store.inner.set(key, "value").unwrap();
        }
        let nav = RecordingNavigator::default();

        let result = end_session(&store, &nav);

        assert!(matches!(result, Err(ConsoleError::Storage(_))));
        // Every other key is still removed
        assert_eq!(store.inner.len(), 1);
        assert_eq!(store.get(ACCESS_TOKEN_KEY).as_deref(), Some("value"));
        assert_eq!(nav.visits(), vec![Destination::PublicEntry]);
    }

    #[test]
    fn clear_session_does_not_navigate() {
        let store = MemoryStore::new();
        store.set(ACCESS_TOKEN_KEY, "abc").unwrap();
        clear_session(&store).unwrap();
        assert!(!session_present(&store));
    }

    #[test]
    fn login_form_validation() {
        let mut form = LoginForm::default();
        assert!(!form.is_submittable());
        form.phone = "  0911  ".to_string();
        assert!(!form.is_submittable());
        form.password = "secret".to_string();
        assert!(form.is_submittable());

        let vars = form.credentials();
        assert_eq!(vars["phoneNumber"], "0911");
        assert_eq!(vars["password"], "secret");
    }
}
