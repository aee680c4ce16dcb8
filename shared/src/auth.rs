use std::{cell::Cell, fmt, rc::Rc};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    error::ApiError,
    session::{clear_session, load_session, persist_session, Session, SessionStore, UserIdentity},
};

/// What the verification endpoint hands back for an accepted credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedIdentity {
    #[serde(flatten)]
    pub user: UserIdentity,
    /// Server-issued session token; when absent the credential itself is
    /// used as the bearer token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Exchanges a sign-in credential for an identity. The backend owns the
/// actual verification; nothing is decoded client side.
#[async_trait(?Send)]
pub trait CredentialVerifier {
    async fn verify(&self, credential: &str) -> Result<VerifiedIdentity, ApiError>;
}

/// Whether the persisted session has been read yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPhase {
    /// Stored session not read yet.
    Loading,
    /// Restore ran; the session (or its absence) is final.
    Settled,
}

/// Which views a route leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// Open to every visitor.
    Public,
    /// Signed-in users with `is_admin` only.
    Admin,
}

/// Outcome of [`AuthGate::authorize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Still restoring; render a placeholder rather than deciding.
    Pending,
    /// Render the requested view.
    Granted,
    /// Render the login view instead of the requested destination.
    ShowLogin,
}

/// Admits one credential verification at a time. Shared by every control
/// that can start a sign-in, including callbacks captured long before the
/// attempt starts.
#[derive(Debug, Default)]
pub struct VerifyFlight(Cell<bool>);

impl VerifyFlight {
    /// `true` when the caller may start verifying; `false` while another
    /// attempt is still unsettled.
    pub fn try_begin(&self) -> bool {
        !self.0.replace(true)
    }

    /// Mark the running attempt settled, whatever its outcome.
    pub fn finish(&self) {
        self.0.set(false);
    }

    pub fn is_busy(&self) -> bool {
        self.0.get()
    }
}

type SignOutHook = Rc<dyn Fn()>;

/// Holds the current session and keeps its persisted copy in sync.
///
/// Clones share sign-out hooks but own their session state, which lets a UI
/// reducer produce the next gate from the previous one.
#[derive(Clone)]
pub struct AuthGate<S> {
    store: S,
    session: Option<Session>,
    phase: AuthPhase,
    sign_out_hooks: Vec<SignOutHook>,
}

impl<S: SessionStore> AuthGate<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            session: None,
            phase: AuthPhase::Loading,
            sign_out_hooks: Vec::new(),
        }
    }

    /// Run `hook` after every logout, e.g. to reset a third-party sign-in
    /// widget.
    pub fn with_sign_out_hook(mut self, hook: impl Fn() + 'static) -> Self {
        self.sign_out_hooks.push(Rc::new(hook));
        self
    }

    /// Adopt the persisted session, if any. Always leaves the gate settled.
    pub fn restore(&mut self) -> Option<&Session> {
        self.session = load_session(&self.store);
        self.phase = AuthPhase::Settled;
        tracing::debug!(restored = self.session.is_some(), "auth gate restored");
        self.session.as_ref()
    }

    /// Verify `credential` and start a session. On failure the current state
    /// is left untouched and the error is returned.
    pub async fn login<V>(&mut self, verifier: &V, credential: &str) -> Result<&Session, ApiError>
    where
        V: CredentialVerifier + ?Sized,
    {
        let verified = verifier.verify(credential).await?;
        Ok(self.establish(credential, verified))
    }

    /// Start a session from an already verified identity.
    pub fn establish(&mut self, credential: &str, verified: VerifiedIdentity) -> &Session {
        let token = verified
            .token
            .filter(|token| !token.trim().is_empty())
            .unwrap_or_else(|| credential.to_string());
        let session = Session {
            user: verified.user,
            token,
        };
        persist_session(&self.store, &session);
        self.phase = AuthPhase::Settled;
        self.session.insert(session)
    }

    pub fn logout(&mut self) {
        self.session = None;
        clear_session(&self.store);
        for hook in &self.sign_out_hooks {
            hook();
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == AuthPhase::Loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.as_ref().is_some_and(Session::is_complete)
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn user(&self) -> Option<&UserIdentity> {
        self.session.as_ref().map(|session| &session.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.session
            .as_ref()
            .filter(|session| session.is_complete())
            .map(|session| session.token.as_str())
    }

    pub fn authorize(&self, guard: Guard) -> Access {
        match guard {
            Guard::Public => Access::Granted,
            Guard::Admin if self.is_loading() => Access::Pending,
            Guard::Admin => match self.session.as_ref() {
                Some(session) if session.is_complete() && session.user.is_admin => Access::Granted,
                _ => Access::ShowLogin,
            },
        }
    }
}

impl<S> PartialEq for AuthGate<S> {
    fn eq(&self, other: &Self) -> bool {
        self.phase == other.phase && self.session == other.session
    }
}

impl<S> fmt::Debug for AuthGate<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthGate")
            .field("phase", &self.phase)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use anyhow::Result;

    use super::*;
    use crate::session::{MemorySessionStore, TOKEN_KEY, USER_KEY};

    struct FixedVerifier(Result<VerifiedIdentity, ApiError>);

    #[async_trait(?Send)]
    impl CredentialVerifier for FixedVerifier {
        async fn verify(&self, _credential: &str) -> Result<VerifiedIdentity, ApiError> {
            self.0.clone()
        }
    }

    fn identity(is_admin: bool, token: Option<&str>) -> VerifiedIdentity {
        VerifiedIdentity {
            user: UserIdentity {
                email: "volunteer@example.org".to_string(),
                name: "Noa".to_string(),
                picture: String::new(),
                is_admin,
            },
            token: token.map(str::to_string),
        }
    }

    #[test]
    fn restore_with_corrupt_user_settles_unauthenticated() {
        let store = MemorySessionStore::new();
        store.set(TOKEN_KEY, "tok");
        store.set(USER_KEY, "][");
        let mut gate = AuthGate::new(store.clone());

        assert!(gate.is_loading());
        assert!(gate.restore().is_none());
        assert!(!gate.is_loading());
        assert!(!gate.is_authenticated());
        assert!(store.is_empty());
    }

    #[test]
    fn restore_adopts_valid_persisted_session() {
        let store = MemorySessionStore::new();
        store.set(TOKEN_KEY, "tok");
        store.set(USER_KEY, r#"{"email":"a@b.c","name":"A","picture":"","isAdmin":true}"#);
        let mut gate = AuthGate::new(store);
        gate.restore();

        assert!(gate.is_authenticated());
        assert_eq!(gate.token(), Some("tok"));
        assert_eq!(gate.authorize(Guard::Admin), Access::Granted);
    }

    #[tokio::test]
    async fn login_uses_server_token_when_echoed() -> Result<()> {
        let store = MemorySessionStore::new();
        let mut gate = AuthGate::new(store.clone());
        gate.restore();

        let verifier = FixedVerifier(Ok(identity(true, Some("server-token"))));
        let session = gate.login(&verifier, "google-id-token").await?;
        assert_eq!(session.token, "server-token");
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("server-token"));
        Ok(())
    }

    #[tokio::test]
    async fn login_falls_back_to_credential_as_token() -> Result<()> {
        let mut gate = AuthGate::new(MemorySessionStore::new());
        let verifier = FixedVerifier(Ok(identity(true, Some("  "))));
        let session = gate.login(&verifier, "google-id-token").await?;
        assert_eq!(session.token, "google-id-token");
        Ok(())
    }

    #[tokio::test]
    async fn failed_login_leaves_session_unset_and_surfaces_error() {
        let store = MemorySessionStore::new();
        let mut gate = AuthGate::new(store.clone());
        gate.restore();

        let verifier = FixedVerifier(Err(ApiError::Rejected("Not an admin".to_string())));
        let err = gate
            .login(&verifier, "cred")
            .await
            .expect_err("login must fail");

        assert_eq!(err.user_message(), "Not an admin");
        assert!(!gate.is_authenticated());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn non_admin_is_sent_to_login() -> Result<()> {
        let mut gate = AuthGate::new(MemorySessionStore::new());
        gate.restore();
        gate.login(&FixedVerifier(Ok(identity(false, None))), "cred")
            .await?;

        assert!(gate.is_authenticated());
        assert_eq!(gate.authorize(Guard::Admin), Access::ShowLogin);
        assert_eq!(gate.authorize(Guard::Public), Access::Granted);
        Ok(())
    }

    #[test]
    fn second_credential_is_refused_until_the_first_settles() {
        let flight = VerifyFlight::default();
        assert!(flight.try_begin());
        assert!(flight.is_busy());
        assert!(!flight.try_begin());

        flight.finish();
        assert!(!flight.is_busy());
        assert!(flight.try_begin());
    }

    #[test]
    fn admin_route_is_pending_until_restored() {
        let gate = AuthGate::new(MemorySessionStore::new());
        assert_eq!(gate.authorize(Guard::Admin), Access::Pending);
    }

    #[test]
    fn logout_clears_memory_storage_and_notifies_widget() {
        let store = MemorySessionStore::new();
        let cancelled = Rc::new(Cell::new(0));
        let counter = cancelled.clone();
        let mut gate =
            AuthGate::new(store.clone()).with_sign_out_hook(move || counter.set(counter.get() + 1));
        gate.establish("cred", identity(true, None));
        assert!(gate.is_authenticated());

        gate.logout();
        assert!(!gate.is_authenticated());
        assert!(gate.user().is_none());
        assert!(store.is_empty());
        assert_eq!(cancelled.get(), 1);

        // Unconditional: a second logout still clears and notifies.
        gate.logout();
        assert_eq!(cancelled.get(), 2);
    }

    #[test]
    fn authenticated_iff_user_and_token_present() {
        let mut gate = AuthGate::new(MemorySessionStore::new());
        assert!(!gate.is_authenticated());
        assert!(gate.token().is_none() && gate.user().is_none());

        gate.establish("", identity(true, None));
        assert!(gate.user().is_some());
        assert!(gate.token().is_none());
        assert!(!gate.is_authenticated());
        assert_eq!(gate.authorize(Guard::Admin), Access::ShowLogin);

        gate.establish("cred", identity(true, None));
        assert!(gate.is_authenticated());
        assert!(gate.token().is_some() && gate.user().is_some());
    }

    #[test]
    fn verified_identity_reads_flat_payload() {
        let parsed: VerifiedIdentity = serde_json::from_str(
            r#"{"email":"a@b.c","name":"A","picture":"p","isAdmin":true,"token":"t"}"#,
        )
        .expect("parse");
        assert!(parsed.user.is_admin);
        assert_eq!(parsed.token.as_deref(), Some("t"));
    }
}
