use std::future::Future;

use rescue_site_shared::{
    site::{or_fallback, CountUp},
    ApiError,
};
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_hooks::prelude::use_interval;
use yew_router::prelude::use_location;

/// Animate a number from zero up to `target`, one step every
/// [`COUNT_UP_TICK_MS`](rescue_site_shared::site::COUNT_UP_TICK_MS), starting
/// once `visible` turns true. Restarts whenever `target` changes.
#[hook]
pub fn use_count_up(target: f64, visible: bool) -> f64 {
    let counter = use_mut_ref(|| CountUp::new(target));
    let shown = use_state(|| 0.0_f64);

    {
        let counter = counter.clone();
        let shown = shown.clone();
        use_effect_with(target.to_bits(), move |bits| {
            *counter.borrow_mut() = CountUp::new(f64::from_bits(*bits));
            shown.set(0.0);
        });
    }

    let delay = counter.borrow().interval_ms(visible);
    {
        let counter = counter.clone();
        let shown = shown.clone();
        use_interval(move || shown.set(counter.borrow_mut().tick()), delay);
    }

    *shown
}

/// Items for a public section: `fallback` until the backend answers with a
/// non-empty list. Failures are logged and keep the fallback on screen.
#[hook]
pub fn use_public_list<T, F, Fut>(what: &'static str, fetch: F, fallback: fn() -> Vec<T>) -> Vec<T>
where
    T: Clone + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    let items = use_state(fallback);

    {
        let items = items.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match fetch().await {
                    Ok(list) => items.set(or_fallback(list, fallback)),
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("Failed to load {}: {}", what, err).into(),
                        );
                    },
                }
            });
            || ()
        });
    }

    (*items).clone()
}

/// Automatically scroll the viewport to the top whenever the current route
/// changes.
#[hook]
pub fn use_scroll_to_top() {
    let location = use_location();

    use_effect_with(location, move |location| {
        if location.is_some() {
            scroll_window_to_top();
        }

        || ()
    });
}

fn scroll_window_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_left(0.0);
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Smooth-scroll to the element with `id`, if it exists.
pub fn scroll_to_section(id: &str) {
    let element = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(id));
    if let Some(element) = element {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
