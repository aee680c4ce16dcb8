use rescue_site_shared::ResourceKind;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api::admin_api,
    auth_context::{use_auth, AuthAction},
    components::{contact_tab::ContactTab, resource_tab::ResourceTab},
    hooks::use_scroll_to_top,
    i18n::{current::admin as t, fill_one, tab_label},
    router::Route,
};

/// The admin console: one tab per managed collection. Only reachable
/// through `AdminGuard`, so a session is always present here.
#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    use_scroll_to_top();
    let auth = use_auth();
    let active_tab = use_state(|| ResourceKind::Gallery);

    let token = auth
        .as_ref()
        .and_then(|auth| auth.token())
        .map(str::to_string);
    let api = use_memo(token, |token| admin_api(token.clone()));

    let user_name = auth
        .as_ref()
        .and_then(|auth| auth.user())
        .map(|user| if user.name.is_empty() { user.email.clone() } else { user.name.clone() })
        .unwrap_or_default();

    let on_logout = {
        let auth = auth.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(auth) = auth.as_ref() {
                auth.dispatch(AuthAction::Logout);
            }
        })
    };

    let tabs = ResourceKind::ALL.iter().copied().map(|kind| {
        let active_tab = active_tab.clone();
        let selected = *active_tab == kind;
        html! {
            <button
                type="button"
                key={kind.key()}
                role="tab"
                aria-selected={selected.to_string()}
                class={classes!("admin-tab-button", selected.then_some("active"))}
                onclick={Callback::from(move |_: MouseEvent| active_tab.set(kind))}
            >
                { tab_label(kind) }
            </button>
        }
    });

    let content = match *active_tab {
        ResourceKind::Contact => html! { <ContactTab api={api.clone()} /> },
        kind => html! { <ResourceTab key={kind.key()} {kind} api={api.clone()} /> },
    };

    html! {
        <div class="admin-panel">
            <header class="admin-header">
                <h1>{ t::TITLE }</h1>
                <div class="admin-user">
                    <span>{ fill_one(t::GREETING_TEMPLATE, user_name) }</span>
                    <Link<Route> to={Route::Home} classes={classes!("admin-back")}>
                        { t::BACK_TO_SITE }
                    </Link<Route>>
                    <button type="button" class="admin-logout" onclick={on_logout}>
                        { t::LOGOUT }
                    </button>
                </div>
            </header>
            <nav class="admin-tabs" role="tablist">
                { for tabs }
            </nav>
            <main class="admin-content">
                { content }
            </main>
        </div>
    }
}
