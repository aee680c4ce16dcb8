use yew::prelude::*;
use yew_router::prelude::*;

use crate::{components::admin_guard::AdminGuard, pages};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[cfg(not(feature = "mock"))]
    #[at("/")]
    Home,
    #[cfg(feature = "mock")]
    #[at("/rescue-site/")]
    Home,

    #[cfg(not(feature = "mock"))]
    #[at("/login")]
    Login,
    #[cfg(feature = "mock")]
    #[at("/rescue-site/login")]
    Login,

    #[cfg(not(feature = "mock"))]
    #[at("/admin")]
    Admin,
    #[cfg(feature = "mock")]
    #[at("/rescue-site/admin")]
    Admin,

    #[not_found]
    #[cfg(not(feature = "mock"))]
    #[at("/404")]
    NotFound,
    #[not_found]
    #[cfg(feature = "mock")]
    #[at("/rescue-site/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <pages::home::HomePage /> },
        Route::Login => html! { <pages::login::LoginPage /> },
        Route::Admin => html! {
            <AdminGuard>
                <pages::admin::AdminPage />
            </AdminGuard>
        },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <div class="app" dir="rtl" lang="he">
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}
