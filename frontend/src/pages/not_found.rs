use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{i18n::current::not_found as t, router::Route};

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="not-found">
            <h2>{ t::TITLE }</h2>
            <p>{ t::BODY }</p>
            <Link<Route> to={Route::Home}>{ t::HOME_LINK }</Link<Route>>
        </main>
    }
}
