use gloo_timers::callback::Timeout;
use rescue_site_shared::{models::ContactDraft, site::DraftError, ContactInfo};
use yew::prelude::*;

use crate::{
    api::{fetch_contact_info, submit_contact},
    i18n::current::contact as t,
    utils::event_value,
};

/// How long the "message sent" line stays up.
const SENT_NOTE_MS: u32 = 5_000;

#[derive(Clone, PartialEq)]
enum SendState {
    Idle,
    Sending,
    Sent,
    Failed(String),
}

fn draft_error_message(err: DraftError) -> String {
    match err {
        DraftError::Missing(_) => t::MISSING_FIELD.to_string(),
        DraftError::InvalidEmail => t::INVALID_EMAIL.to_string(),
    }
}

fn social_link(href: &str, label: &'static str, glyph: &'static str) -> Html {
    if href.trim().is_empty() {
        return Html::default();
    }
    html! {
        <a href={href.to_string()} aria-label={label} target="_blank" rel="noopener noreferrer">
            { glyph }
        </a>
    }
}

/// Branch contact details plus the message form. Details come from the
/// backend and fall back to the built-in ones.
#[function_component(Contact)]
pub fn contact() -> Html {
    let info = use_state(ContactInfo::fallback);
    let draft = use_state(ContactDraft::default);
    let send_state = use_state(|| SendState::Idle);

    {
        let info = info.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_contact_info().await {
                    Ok(Some(fetched)) => info.set(fetched),
                    Ok(None) => {},
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("Failed to load contact info: {}", err).into(),
                        );
                    },
                }
            });
            || ()
        });
    }

    {
        let send_state = send_state.clone();
        use_effect_with((*send_state).clone(), move |current| {
            let timeout = (*current == SendState::Sent)
                .then(|| Timeout::new(SENT_NOTE_MS, move || send_state.set(SendState::Idle)));
            move || drop(timeout)
        });
    }

    let on_field = |field: &'static str| {
        let draft = draft.clone();
        let send_state = send_state.clone();
        Callback::from(move |event: InputEvent| {
            let Some(value) = event_value(&event) else {
                return;
            };
            let mut next = (*draft).clone();
            match field {
                "name" => next.name = value,
                "email" => next.email = value,
                _ => next.message = value,
            }
            draft.set(next);
            if matches!(*send_state, SendState::Failed(_) | SendState::Sent) {
                send_state.set(SendState::Idle);
            }
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let send_state = send_state.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *send_state == SendState::Sending {
                return;
            }
            if let Err(err) = draft.validate() {
                send_state.set(SendState::Failed(draft_error_message(err)));
                return;
            }
            let payload = (*draft).clone();
            let draft = draft.clone();
            let send_state = send_state.clone();
            send_state.set(SendState::Sending);
            wasm_bindgen_futures::spawn_local(async move {
                match submit_contact(&payload).await {
                    Ok(()) => {
                        draft.set(ContactDraft::default());
                        send_state.set(SendState::Sent);
                    },
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("Failed to send contact message: {}", err).into(),
                        );
                        send_state.set(SendState::Failed(err.user_message()));
                    },
                }
            });
        })
    };

    let sending = *send_state == SendState::Sending;

    html! {
        <section id="contact" class="section contact">
            <div class="container">
                <h2 class="section-title">{ t::TITLE }</h2>
                <div class="contact-content">
                    <div class="contact-info">
                        <div class="info-item">
                            <h3>{ t::PHONE }</h3>
                            <a href={info.phone_href()}>{ info.phone.clone() }</a>
                        </div>
                        <div class="info-item">
                            <h3>{ t::EMAIL }</h3>
                            <a href={format!("mailto:{}", info.email)}>{ info.email.clone() }</a>
                        </div>
                        <div class="info-item">
                            <h3>{ t::ADDRESS }</h3>
                            <p>{ info.address.clone() }</p>
                        </div>
                        if !info.emergency_number.is_empty() {
                            <div class="info-item">
                                <h3>{ t::EMERGENCY }</h3>
                                <a href={format!("tel:{}", info.emergency_number)}>
                                    { info.emergency_number.clone() }
                                </a>
                            </div>
                        }
                        <div class="social-links">
                            <h3>{ t::FOLLOW }</h3>
                            <div class="links">
                                { social_link(&info.social_links.facebook, t::FACEBOOK_ARIA, "f") }
                                { social_link(&info.social_links.instagram, t::INSTAGRAM_ARIA, "📷") }
                                { social_link(&info.social_links.whatsapp, t::WHATSAPP_ARIA, "💬") }
                            </div>
                        </div>
                    </div>

                    <form class="contact-form" onsubmit={on_submit} novalidate=true>
                        <div class="form-group">
                            <label for="name">{ t::NAME_LABEL }</label>
                            <input
                                id="name"
                                type="text"
                                name="name"
                                required=true
                                aria-required="true"
                                value={draft.name.clone()}
                                oninput={on_field("name")}
                            />
                        </div>
                        <div class="form-group">
                            <label for="email">{ t::EMAIL_LABEL }</label>
                            <input
                                id="email"
                                type="email"
                                name="email"
                                required=true
                                aria-required="true"
                                value={draft.email.clone()}
                                oninput={on_field("email")}
                            />
                        </div>
                        <div class="form-group">
                            <label for="message">{ t::MESSAGE_LABEL }</label>
                            <textarea
                                id="message"
                                name="message"
                                rows="5"
                                required=true
                                aria-required="true"
                                value={draft.message.clone()}
                                oninput={on_field("message")}
                            />
                        </div>
                        {
                            match &*send_state {
                                SendState::Failed(message) => html! {
                                    <p class="form-error" role="alert">{ message.clone() }</p>
                                },
                                SendState::Sent => html! {
                                    <p class="form-success" role="status">{ t::SENT }</p>
                                },
                                SendState::Idle | SendState::Sending => Html::default(),
                            }
                        }
                        <button type="submit" class="submit-button" disabled={sending}>
                            { if sending { t::SENDING } else { t::SUBMIT } }
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}
