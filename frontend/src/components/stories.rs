use rescue_site_shared::site::{carousel_next, carousel_prev, fallback_stories};
use yew::prelude::*;

use crate::{
    api::fetch_stories,
    hooks::use_public_list,
    i18n::{current::stories as t, fill_one},
};

/// One story at a time with previous/next arrows and a dot per story.
/// Both directions wrap around.
#[function_component(Stories)]
pub fn stories() -> Html {
    let stories = use_public_list("stories", fetch_stories, fallback_stories);
    let active = use_state(|| 0_usize);
    let len = stories.len();

    let prev = {
        let active = active.clone();
        Callback::from(move |_: MouseEvent| active.set(carousel_prev(*active, len)))
    };
    let next = {
        let active = active.clone();
        Callback::from(move |_: MouseEvent| active.set(carousel_next(*active, len)))
    };

    // The list can shrink when the backend answers after the fallback.
    let current = stories.get(*active % len.max(1)).cloned();

    html! {
        <section id="stories" class="section stories">
            <div class="container">
                <h2 class="section-title">{ t::TITLE }</h2>
                <div class="carousel">
                    if let Some(story) = current {
                        <article class="story-card" key={story.id.clone()}>
                            if let Some(image) = story.image.clone() {
                                <img class="story-image" src={image} alt={story.title.clone()} />
                            }
                            <h3 class="story-title">{ story.title.clone() }</h3>
                            <p class="story-description">{ story.description.clone() }</p>
                            <time class="story-date">{ story.date.clone() }</time>
                        </article>
                    }
                    <div class="carousel-controls">
                        <button type="button" class="carousel-nav" onclick={prev} aria-label={t::PREV_ARIA}>
                            {"❮"}
                        </button>
                        <div class="carousel-indicators">
                            { for (0..len).map(|index| {
                                let active = active.clone();
                                let selected = index == *active % len.max(1);
                                html! {
                                    <button
                                        type="button"
                                        key={index}
                                        class={classes!("carousel-dot", selected.then_some("active"))}
                                        aria-label={fill_one(t::GOTO_ARIA_TEMPLATE, index + 1)}
                                        onclick={Callback::from(move |_: MouseEvent| active.set(index))}
                                    />
                                }
                            }) }
                        </div>
                        <button type="button" class="carousel-nav" onclick={next} aria-label={t::NEXT_ARIA}>
                            {"❯"}
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}
