use rescue_site_shared::site::fallback_gallery;
use yew::prelude::*;

use crate::{api::fetch_gallery, hooks::use_public_list, i18n::current::gallery as t};

#[function_component(Gallery)]
pub fn gallery() -> Html {
    let items = use_public_list("gallery", fetch_gallery, fallback_gallery);

    html! {
        <section id="gallery" class="section gallery">
            <div class="container">
                <h2 class="section-title">{ t::TITLE }</h2>
                <div class="gallery-grid">
                    { for items.into_iter().map(|item| html! {
                        <div class="gallery-item" key={item.id.clone()}>
                            <div class="gallery-image">
                                if let Some(url) = item.image_url.clone() {
                                    <img src={url} alt={item.title.clone()} loading="lazy" />
                                } else {
                                    <div class="gallery-placeholder" />
                                }
                            </div>
                            <div class="gallery-info">
                                <p class="gallery-category">{ item.category.clone() }</p>
                                <h3 class="gallery-title">{ item.title.clone() }</h3>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
