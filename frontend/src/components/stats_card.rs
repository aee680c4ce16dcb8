use rescue_site_shared::{models::StatItem, site::format_stat};
use yew::prelude::*;

use crate::hooks::use_count_up;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsCardProps {
    pub item: StatItem,
    /// Starts the count-up; the section flips it when scrolled into view.
    #[prop_or(true)]
    pub active: bool,
}

/// One statistic, counting up from zero once it becomes active.
#[function_component(StatsCard)]
pub fn stats_card(props: &StatsCardProps) -> Html {
    let shown = use_count_up(props.item.value, props.active);
    let unit = props.item.unit.clone().unwrap_or_default();

    html! {
        <div class="stats-card" role="status">
            <strong class="stats-card-value">
                { format_stat(shown) }{ unit }
            </strong>
            <span class="stats-card-title">{ props.item.title.clone() }</span>
        </div>
    }
}
