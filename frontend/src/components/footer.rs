use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    config::route_path,
    i18n::{current::footer as t, fill_one},
    router::Route,
    utils::current_year,
};

fn link_list(links: &[(&'static str, &'static str)]) -> Html {
    html! {
        <ul>
            { for links.iter().map(|(href, label)| html! {
                <li key={*href}><a href={route_path(&format!("/{}", href))}>{ *label }</a></li>
            }) }
        </ul>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-content">
                    <div class="footer-section">
                        <h3>{ t::ABOUT_HEADING }</h3>
                        { link_list(&t::ABOUT_LINKS) }
                    </div>
                    <div class="footer-section">
                        <h3>{ t::COMMUNITY_HEADING }</h3>
                        { link_list(&t::COMMUNITY_LINKS) }
                    </div>
                </div>
                <div class="footer-divider" />
                <div class="footer-bottom">
                    <p>{ fill_one(t::COPYRIGHT_TEMPLATE, current_year()) }</p>
                    <p class="footer-credits">{ t::CREDITS }</p>
                    <Link<Route> to={Route::Admin} classes={classes!("footer-admin-link")}>{"🔐"}</Link<Route>>
                </div>
            </div>
        </footer>
    }
}
