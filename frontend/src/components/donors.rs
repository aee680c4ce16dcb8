use rescue_site_shared::site::fallback_sponsors;
use yew::prelude::*;

use crate::{api::fetch_sponsors, hooks::use_public_list, i18n::current::donors as t};

#[function_component(Donors)]
pub fn donors() -> Html {
    let sponsors = use_public_list("sponsors", fetch_sponsors, fallback_sponsors);

    html! {
        <section id="donors" class="section donors">
            <div class="container">
                <h2 class="section-title">{ t::TITLE }</h2>
                <div class="donors-grid">
                    { for sponsors.into_iter().map(|sponsor| html! {
                        <div class="donor-card" key={sponsor.id.clone()}>
                            <div class="donor-logo">
                                if let Some(logo) = sponsor.logo.clone() {
                                    <img src={logo} alt={sponsor.name.clone()} />
                                } else {
                                    <span>{ sponsor.initial() }</span>
                                }
                            </div>
                            <h3 class="donor-name">{ sponsor.name.clone() }</h3>
                            <p class="donor-category">{ sponsor.category.clone() }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
