use rescue_site_shared::{
    models::DonationRequest,
    site::{DonationChoice, DONATION_NOTE_MS, PRESET_AMOUNTS},
};
use yew::prelude::*;
use yew_hooks::prelude::use_timeout;

use crate::{api::submit_donation, i18n::current::donation as t, utils::event_value};

#[function_component(DonationSection)]
pub fn donation_section() -> Html {
    let choice = use_state(DonationChoice::default);
    let thanks = use_state(|| false);
    let invalid = use_state(|| false);

    // Hides the note and clears the form once it has been up long enough.
    let reset_timeout = {
        let choice = choice.clone();
        let thanks = thanks.clone();
        use_timeout(
            move || {
                thanks.set(false);
                choice.set(DonationChoice::default());
            },
            DONATION_NOTE_MS,
        )
    };

    {
        let reset_timeout = reset_timeout.clone();
        use_effect_with(*thanks, move |visible| {
            if *visible {
                reset_timeout.reset();
            } else {
                reset_timeout.cancel();
            }
        });
    }

    let on_custom = {
        let choice = choice.clone();
        let invalid = invalid.clone();
        Callback::from(move |event: InputEvent| {
            let Some(raw) = event_value(&event) else {
                return;
            };
            let mut next = (*choice).clone();
            next.set_custom(raw);
            choice.set(next);
            invalid.set(false);
        })
    };

    let on_donate = {
        let choice = choice.clone();
        let thanks = thanks.clone();
        let invalid = invalid.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(amount) = choice.amount() else {
                invalid.set(true);
                return;
            };
            let request = DonationRequest {
                amount,
                donor_name: String::new(),
                donor_email: String::new(),
                message: None,
            };
            thanks.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = submit_donation(&request).await {
                    web_sys::console::error_1(&format!("Failed to record donation: {}", err).into());
                }
            });
        })
    };

    html! {
        <section id="donate" class="section donation">
            <div class="container">
                <h2 class="section-title">{ t::TITLE }</h2>
                <p class="section-subtitle">{ t::SUBTITLE }</p>
                <div class="donation-form">
                    <div class="amounts-grid">
                        { for PRESET_AMOUNTS.iter().copied().map(|amount| {
                            let choice = choice.clone();
                            let invalid = invalid.clone();
                            let selected = choice.preset == Some(amount);
                            let onclick = Callback::from(move |_: MouseEvent| {
                                let mut next = (*choice).clone();
                                next.select_preset(amount);
                                choice.set(next);
                                invalid.set(false);
                            });
                            html! {
                                <button
                                    type="button"
                                    key={amount}
                                    class={classes!("amount-button", selected.then_some("active"))}
                                    {onclick}
                                >
                                    { format!("₪{}", amount) }
                                </button>
                            }
                        }) }
                    </div>
                    <div class="custom-amount">
                        <label for="customAmount">{ t::CUSTOM_LABEL }</label>
                        <div class="input-wrapper">
                            <input
                                id="customAmount"
                                type="number"
                                min="1"
                                placeholder={t::CUSTOM_PLACEHOLDER}
                                aria-label={t::CUSTOM_ARIA}
                                value={choice.custom.clone()}
                                oninput={on_custom}
                            />
                            <span class="currency-symbol">{"₪"}</span>
                        </div>
                    </div>
                    if *invalid {
                        <p class="form-error" role="alert">{ t::INVALID_AMOUNT }</p>
                    }
                    <div class="security-info">
                        <span aria-hidden="true">{"🔒"}</span>
                        <p>{ t::SECURITY_NOTE }</p>
                    </div>
                    <button
                        type="button"
                        class="donate-button"
                        aria-label={t::SUBMIT_ARIA}
                        disabled={!choice.can_submit()}
                        onclick={on_donate}
                    >
                        { t::SUBMIT }
                    </button>
                </div>
                if *thanks {
                    <div class="success-message" role="status">
                        <span class="checkmark">{"✓"}</span>
                        <h3>{ t::THANKS_TITLE }</h3>
                        <p>{ t::THANKS_BODY }</p>
                    </div>
                }
            </div>
        </section>
    }
}
