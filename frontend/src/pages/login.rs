use rescue_site_shared::{CredentialVerifier, VerifyFlight};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api,
    auth_context::{use_auth, AuthAction},
    config::google_sign_in_enabled,
    google_sign_in::GoogleSignInButton,
    i18n::{current::login as t, fill_one},
    router::Route,
};

#[derive(Clone, PartialEq)]
enum LoginStatus {
    Idle,
    Verifying,
    Failed(String),
}

/// Sign-in screen. Shown at `/login` and by the admin guard in place of
/// any admin page the visitor may not see yet.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let auth = use_auth();
    let navigator = use_navigator();
    let status = use_state(|| LoginStatus::Idle);
    // Read live by callbacks captured at mount (the GSI closure).
    let flight = use_memo((), |_| VerifyFlight::default());

    let on_credential = {
        let auth = auth.clone();
        let status = status.clone();
        let flight = flight.clone();
        Callback::from(move |credential: String| {
            let Some(auth) = auth.clone() else {
                return;
            };
            if !flight.try_begin() {
                return;
            }
            status.set(LoginStatus::Verifying);
            let status = status.clone();
            let navigator = navigator.clone();
            let flight = flight.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = api::verifier().verify(&credential).await;
                flight.finish();
                match result {
                    Ok(verified) => {
                        let is_admin = verified.user.is_admin;
                        auth.dispatch(AuthAction::Establish {
                            credential,
                            verified,
                        });
                        status.set(LoginStatus::Idle);
                        if is_admin {
                            if let Some(navigator) = navigator {
                                navigator.push(&Route::Admin);
                            }
                        }
                    },
                    Err(err) => {
                        web_sys::console::error_1(&format!("Login error: {}", err).into());
                        status.set(LoginStatus::Failed(fill_one(
                            t::FAILED_TEMPLATE,
                            err.user_message(),
                        )));
                    },
                }
            });
        })
    };

    let on_logout = {
        let auth = auth.clone();
        let status = status.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(auth) = auth.as_ref() {
                auth.dispatch(AuthAction::Logout);
            }
            status.set(LoginStatus::Idle);
        })
    };

    // Signed in but not an admin: say so instead of offering another login.
    let refused = auth
        .as_ref()
        .filter(|auth| auth.is_authenticated())
        .and_then(|auth| auth.user())
        .filter(|user| !user.is_admin)
        .map(|user| user.email.clone());

    let verifying = *status == LoginStatus::Verifying;

    #[cfg(feature = "mock")]
    let mock_login = {
        let on_credential = on_credential.clone();
        html! {
            <div class="mock-login">
                <p class="mock-label">{ t::MOCK_LABEL }</p>
                <button
                    type="button"
                    class="mock-login-button"
                    disabled={verifying}
                    onclick={Callback::from(move |_: MouseEvent| {
                        on_credential.emit(crate::mock::MOCK_ADMIN_EMAIL.to_string())
                    })}
                >
                    { if verifying { t::SIGNING_IN } else { t::MOCK_BUTTON } }
                </button>
            </div>
        }
    };
    #[cfg(not(feature = "mock"))]
    let mock_login = Html::default();

    html! {
        <div class="login-container">
            <div class="login-box">
                <div class="login-header">
                    <h1>{ t::HEADING }</h1>
                    <p>{ t::SUBHEADING }</p>
                </div>
                <div class="login-content">
                    <h2>{ t::TITLE }</h2>
                    <p class="login-subtitle">{ t::SUBTITLE }</p>
                    if let LoginStatus::Failed(message) = &*status {
                        <div class="login-error" role="alert">{ message.clone() }</div>
                    }
                    if let Some(email) = refused {
                        <div class="login-error" role="alert">
                            <p>{ fill_one(t::NOT_ADMIN_TEMPLATE, email) }</p>
                            <button type="button" class="login-logout" onclick={on_logout}>
                                { t::SIGN_OUT }
                            </button>
                        </div>
                    } else {
                        if google_sign_in_enabled() {
                            <GoogleSignInButton on_credential={on_credential.clone()} disabled={verifying} />
                        } else {
                            <p class="login-hint">{ t::GOOGLE_DISABLED }</p>
                        }
                        if verifying {
                            <div class="login-loading">{ t::SIGNING_IN }</div>
                        }
                        { mock_login }
                    }
                </div>
                <div class="login-footer">
                    <p>{ t::FOOTER }</p>
                </div>
            </div>
        </div>
    }
}
