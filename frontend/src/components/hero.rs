use yew::prelude::*;

use crate::{hooks::scroll_to_section, i18n::current::hero as t};

#[function_component(Hero)]
pub fn hero() -> Html {
    let to_donation = Callback::from(|_: MouseEvent| scroll_to_section("donate"));

    html! {
        <section class="hero">
            <div class="hero-background" />
            <div class="container hero-content">
                <h1 class="hero-title">{ t::TITLE }</h1>
                <p class="hero-subtitle">{ t::SUBTITLE }</p>
                <button
                    type="button"
                    class="hero-cta"
                    aria-label={t::CTA}
                    onclick={to_donation}
                >
                    { t::CTA }
                </button>
            </div>
        </section>
    }
}
