use rescue_site_shared::site::stat_placeholders;
use yew::prelude::*;
use yew_hooks::prelude::use_visible;

use crate::{
    api::fetch_statistics, components::stats_card::StatsCard, hooks::use_public_list,
    i18n::current::statistics as t,
};

#[function_component(Statistics)]
pub fn statistics() -> Html {
    let items = use_public_list("statistics", fetch_statistics, stat_placeholders);
    let section = use_node_ref();
    // Sticky: once seen, the numbers keep their final value.
    let seen = use_visible(section.clone(), true);

    html! {
        <section id="statistics" class="section statistics" ref={section}>
            <div class="container">
                <h2 class="section-title">{ t::TITLE }</h2>
                <div class="stats-grid">
                    { for items.into_iter().map(|item| {
                        let key = item.id.clone();
                        html! { <StatsCard key={key} {item} active={seen} /> }
                    }) }
                </div>
            </div>
        </section>
    }
}
