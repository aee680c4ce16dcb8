use rescue_site_shared::{Access, Guard};
use yew::prelude::*;

use crate::{
    auth_context::use_auth,
    components::loading_spinner::{LoadingSpinner, SpinnerSize},
    pages::login::LoginPage,
};

#[derive(Properties, PartialEq)]
pub struct AdminGuardProps {
    pub children: Html,
}

/// Renders `children` for a signed-in admin only. Everyone else gets the
/// login view in place of the requested page.
#[function_component(AdminGuard)]
pub fn admin_guard(props: &AdminGuardProps) -> Html {
    let access = match use_auth() {
        Some(auth) => auth.authorize(Guard::Admin),
        None => {
            web_sys::console::error_1(&"AdminGuard rendered outside AuthProvider".into());
            Access::ShowLogin
        },
    };

    match access {
        Access::Pending => html! { <LoadingSpinner size={SpinnerSize::Large} fullscreen=true /> },
        Access::Granted => props.children.clone(),
        Access::ShowLogin => html! { <LoginPage /> },
    }
}
