use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

use serde::{Deserialize, Serialize};

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "authToken";
/// Storage key holding the JSON-encoded [`UserIdentity`].
pub const USER_KEY: &str = "authUser";

/// Who is signed in, as reported by the verification endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    pub email: String,
    /// Display name; empty when the provider sent none.
    #[serde(default)]
    pub name: String,
    /// Avatar URL, possibly empty.
    #[serde(default)]
    pub picture: String,
    /// Only this flag opens the admin console.
    #[serde(default)]
    pub is_admin: bool,
}

/// The authenticated visitor: identity plus the credential sent as bearer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: UserIdentity,
    /// Sent as `Authorization: Bearer <token>` on admin calls.
    pub token: String,
}

impl Session {
    /// Both halves are present; an empty token never authenticates.
    pub fn is_complete(&self) -> bool {
        !self.token.is_empty()
    }
}

/// Durable string key/value storage surviving page reloads.
///
/// Writes are best effort: a full or disabled storage must not break login,
/// it only means the session will not survive the next reload.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Process-local store; clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Read a previously persisted session.
///
/// A stored user record that does not parse is treated as corruption: both
/// keys are dropped and `None` is returned.
pub fn load_session<S: SessionStore + ?Sized>(store: &S) -> Option<Session> {
    let token = store.get(TOKEN_KEY).filter(|value| !value.is_empty())?;
    let raw_user = store.get(USER_KEY).filter(|value| !value.is_empty())?;

    match serde_json::from_str::<UserIdentity>(&raw_user) {
        Ok(user) => Some(Session {
            user,
            token,
        }),
        Err(err) => {
            tracing::warn!(error = %err, "discarding corrupt stored session");
            clear_session(store);
            None
        },
    }
}

pub fn persist_session<S: SessionStore + ?Sized>(store: &S, session: &Session) {
    match serde_json::to_string(&session.user) {
        Ok(user) => {
            store.set(TOKEN_KEY, &session.token);
            store.set(USER_KEY, &user);
        },
        Err(err) => tracing::warn!(error = %err, "failed to encode session user"),
    }
}

pub fn clear_session<S: SessionStore + ?Sized>(store: &S) {
    store.remove(TOKEN_KEY);
    store.remove(USER_KEY);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> UserIdentity {
        UserIdentity {
            email: "admin@example.org".to_string(),
            name: "Dana".to_string(),
            picture: String::new(),
            is_admin: true,
        }
    }

    #[test]
    fn persisted_session_round_trips_through_store() {
        let store = MemorySessionStore::new();
        let session = Session {
            user: admin(),
            token: "tok-1".to_string(),
        };
        persist_session(&store, &session);

        assert_eq!(load_session(&store), Some(session));
        assert!(store
            .get(USER_KEY)
            .unwrap_or_default()
            .contains("\"isAdmin\":true"));
    }

    #[test]
    fn corrupt_user_record_clears_both_keys() {
        let store = MemorySessionStore::new();
        store.set(TOKEN_KEY, "tok-1");
        store.set(USER_KEY, "{not json");

        assert_eq!(load_session(&store), None);
        assert!(store.is_empty());
    }

    #[test]
    fn token_without_user_is_not_a_session() {
        let store = MemorySessionStore::new();
        store.set(TOKEN_KEY, "tok-1");
        assert_eq!(load_session(&store), None);
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("tok-1"));
    }

    #[test]
    fn user_record_tolerates_missing_optional_fields() {
        let store = MemorySessionStore::new();
        store.set(TOKEN_KEY, "tok-1");
        store.set(USER_KEY, r#"{"email":"someone@example.org"}"#);

        let session = load_session(&store).expect("session");
        assert!(!session.user.is_admin);
        assert_eq!(session.user.picture, "");
    }
}
