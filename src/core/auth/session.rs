//! Process-wide session state
//!
//! The session is owned by the auth client and published through a
//! [`SessionStore`]. Consumers subscribe explicitly and must unsubscribe when
//! they are torn down.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Authenticated user as reported by the auth service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default)]
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Avatar fallback: first letter of the name, upper-cased
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string())
    }

    /// `@username`, or the email for accounts without a username
    pub fn handle(&self) -> String {
        match &self.username {
            Some(username) => format!("@{username}"),
            None => self.email.clone(),
        }
    }

    pub fn member_since(&self) -> String {
        self.created_at.format("%B %-d, %Y").to_string()
    }
}

/// Session record attached to the signed-in user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub id: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    pub session: SessionInfo,
}

/// What session consumers observe
#[derive(Debug, Clone, PartialEq)]
pub struct SessionView {
    pub pending: bool,
    pub data: Option<Session>,
}

impl Default for SessionView {
    fn default() -> Self {
        Self {
            pending: true,
            data: None,
        }
    }
}

/// The three mutually exclusive render states of a session consumer
#[derive(Debug, Clone, PartialEq)]
pub enum SessionGate {
    Pending,
    Absent,
    Present(Session),
}

impl SessionView {
    pub fn gate(&self) -> SessionGate {
        match (&self.data, self.pending) {
            (_, true) => SessionGate::Pending,
            (None, false) => SessionGate::Absent,
            (Some(session), false) => SessionGate::Present(session.clone()),
        }
    }
}

/// Handle returned by [`SessionStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(&SessionView) + Send + Sync>;

#[derive(Default)]
struct StoreInner {
    view: SessionView,
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

/// Observable session value shared by every consumer
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.lock();
        f.debug_struct("SessionStore")
            .field("view", &inner.view)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

impl SessionStore {
    /// A store in the initial pending state
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        // Listeners never run under the lock, so a poisoned lock still holds
        // a consistent view.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn current(&self) -> SessionView {
        self.lock().view.clone()
    }

    /// Register a listener; it is called on every later change
    pub fn subscribe(&self, listener: impl Fn(&SessionView) + Send + Sync + 'static) -> SubscriptionId {
        let mut inner = self.lock();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push((id, Arc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.lock().listeners.retain(|(sub, _)| *sub != id);
    }

    pub fn subscriber_count(&self) -> usize {
        self.lock().listeners.len()
    }

    /// Publish the outcome of a session load
    pub fn resolve(&self, data: Option<Session>) {
        self.publish(SessionView {
            pending: false,
            data,
        });
    }

    fn publish(&self, view: SessionView) {
        let listeners: Vec<Listener> = {
            let mut inner = self.lock();
            if inner.view == view {
                return;
            }
            inner.view = view.clone();
            inner.listeners.iter().map(|(_, l)| Arc::clone(l)).collect()
        };
        for listener in listeners {
            listener(&view);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn session() -> Session {
        Session {
            user: User {
                id: "u1".to_string(),
                name: "grace".to_string(),
                email: "grace@example.com".to_string(),
                username: Some("grace".to_string()),
                email_verified: true,
                image: None,
                created_at: Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap(),
            },
            session: SessionInfo {
                id: "s1".to_string(),
                expires_at: Utc.with_ymd_and_hms(2024, 3, 16, 12, 0, 0).unwrap(),
            },
        }
    }

    #[test]
    fn test_new_store_is_pending() {
        let store = SessionStore::new();

        assert_eq!(store.current().gate(), SessionGate::Pending);
    }

    #[test]
    fn test_gate_states() {
        let absent = SessionView {
            pending: false,
            data: None,
        };
        assert_eq!(absent.gate(), SessionGate::Absent);

        let present = SessionView {
            pending: false,
            data: Some(session()),
        };
        assert_eq!(present.gate(), SessionGate::Present(session()));

        let refreshing = SessionView {
            pending: true,
            data: Some(session()),
        };
        assert_eq!(refreshing.gate(), SessionGate::Pending);
    }

    #[test]
    fn test_subscribers_observe_changes_until_unsubscribed() {
        let store = SessionStore::new();
        let seen = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&seen);
        let id = store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(store.subscriber_count(), 1);

        store.resolve(Some(session()));
        assert_eq!(seen.load(Ordering::SeqCst), 1);

        store.unsubscribe(id);
        assert_eq!(store.subscriber_count(), 0);

        store.resolve(None);
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unchanged_view_is_not_republished() {
        let store = SessionStore::new();
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&seen);
        store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.resolve(None);
        store.resolve(None);

        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_listener_may_read_store() {
        let store = SessionStore::new();
        let reader = store.clone();
        store.subscribe(move |view| {
            assert_eq!(&reader.current(), view);
        });

        store.resolve(Some(session()));
    }

    #[test]
    fn test_user_display_helpers() {
        let user = session().user;

        assert_eq!(user.initial(), "G");
        assert_eq!(user.member_since(), "March 9, 2024");
    }

    #[test]
    fn test_handle_prefers_username() {
        let mut user = session().user;
        assert_eq!(user.handle(), "@grace");

        user.username = None;
        assert_eq!(user.handle(), "grace@example.com");
    }

    #[test]
    fn test_user_deserializes_from_camel_case() {
        let json = r#"{
            "id": "u1",
            "name": "Ada",
            "email": "ada@example.com",
            "emailVerified": false,
            "createdAt": "2024-01-02T03:04:05.000Z",
            "updatedAt": "2024-01-02T03:04:05.000Z",
            "displayUsername": null
        }"#;

        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user.name, "Ada");
        assert!(!user.email_verified);
        assert!(user.username.is_none());
    }
}
