//! Browser entry point of the branch website and its admin console.

mod api;
mod auth_context;
mod components;
mod config;
mod google_sign_in;
pub mod hooks;
mod i18n;
#[cfg(feature = "mock")]
mod mock;
mod pages;
mod router;
mod storage;
mod utils;

use yew::prelude::*;

use crate::auth_context::AuthProvider;

#[function_component(App)]
fn app() -> Html {
    html! {
        <AuthProvider>
            <router::AppRouter />
        </AuthProvider>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
