use std::{ops::Deref, rc::Rc};

use rescue_site_shared::{AuthGate, VerifiedIdentity};
use yew::prelude::*;

use crate::{google_sign_in, storage::BrowserSessionStore};

/// The app-wide sign-in gate, persisted in `localStorage`.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState(AuthGate<BrowserSessionStore>);

impl Default for AuthState {
    fn default() -> Self {
        Self(AuthGate::new(BrowserSessionStore).with_sign_out_hook(google_sign_in::cancel))
    }
}

impl Deref for AuthState {
    type Target = AuthGate<BrowserSessionStore>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

pub enum AuthAction {
    /// Adopt the stored session; dispatched once when the provider mounts.
    Restore,
    /// Credential already verified by the backend.
    Establish {
        credential: String,
        verified: VerifiedIdentity,
    },
    Logout,
}

impl Reducible for AuthState {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            AuthAction::Restore => {
                next.0.restore();
            },
            AuthAction::Establish {
                credential,
                verified,
            } => {
                next.0.establish(&credential, verified);
            },
            AuthAction::Logout => next.0.logout(),
        }
        Rc::new(next)
    }
}

pub type AuthContext = UseReducerHandle<AuthState>;

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Html,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let state = use_reducer(AuthState::default);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            state.dispatch(AuthAction::Restore);
            || ()
        });
    }

    html! {
        <ContextProvider<AuthContext> context={state}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

/// The gate handle, or `None` outside an [`AuthProvider`].
#[hook]
pub fn use_auth() -> Option<AuthContext> {
    use_context::<AuthContext>()
}
