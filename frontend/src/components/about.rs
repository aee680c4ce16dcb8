use yew::prelude::*;

use crate::i18n::current::about as t;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="section about">
            <div class="container">
                <h2 class="section-title">{ t::TITLE }</h2>
                <p class="about-description">{ t::DESCRIPTION }</p>
                <div class="values-grid">
                    { for t::VALUES.iter().map(|(icon, title, body)| html! {
                        <div class="value-card" key={*title}>
                            <h3>{ format!("{} {}", icon, title) }</h3>
                            <p>{ *body }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
