use std::rc::Rc;

use rescue_site_shared::{
    contact::{load_contact_info, save_contact_info, shown_value, CONTACT_INFO_FIELDS},
    resource::{FormState, ResourceKind},
    ContactInfo,
};
use yew::prelude::*;

use crate::{
    api::AdminApi,
    components::{
        error_banner::{BannerTone, ErrorBanner},
        loading_spinner::{LoadingSpinner, SpinnerSize},
        resource_tab::ResourceTab,
    },
    i18n::{
        current::{admin as t, common},
        field_label, fill_one,
    },
    utils::event_value,
};

const SOCIAL_FIELDS: &[&str] = &["facebook", "instagram", "whatsapp"];

#[derive(Clone, Copy, PartialEq, Eq)]
enum SubTab {
    Messages,
    Info,
}

#[derive(Properties, PartialEq)]
pub struct ContactTabProps {
    pub api: Rc<AdminApi>,
}

/// Read-only message inbox plus the branch contact-info form. Saving the
/// form re-fetches both.
#[function_component(ContactTab)]
pub fn contact_tab(props: &ContactTabProps) -> Html {
    let sub_tab = use_state(|| SubTab::Messages);
    let message_count = use_state(|| 0_usize);
    let reload = use_state(|| 0_u32);

    let on_loaded = {
        let message_count = message_count.clone();
        Callback::from(move |count: usize| message_count.set(count))
    };
    let on_saved = {
        let reload = reload.clone();
        Callback::from(move |_: ()| reload.set(reload.wrapping_add(1)))
    };

    let select = |target: SubTab| {
        let sub_tab = sub_tab.clone();
        Callback::from(move |_: MouseEvent| sub_tab.set(target))
    };
    let tab_class = |target: SubTab| classes!("admin-subtab", (*sub_tab == target).then_some("active"));

    html! {
        <div class="contact-tab">
            <div class="admin-subtabs" role="tablist">
                <button type="button" class={tab_class(SubTab::Messages)} onclick={select(SubTab::Messages)}>
                    { fill_one(t::MESSAGES_TAB_TEMPLATE, *message_count) }
                </button>
                <button type="button" class={tab_class(SubTab::Info)} onclick={select(SubTab::Info)}>
                    { t::INFO_TAB }
                </button>
            </div>
            // Both panes stay mounted so the message count is known up front.
            <div hidden={*sub_tab != SubTab::Messages}>
                <ResourceTab
                    kind={ResourceKind::Contact}
                    api={props.api.clone()}
                    reload={*reload}
                    on_loaded={on_loaded}
                />
            </div>
            <div hidden={*sub_tab != SubTab::Info}>
                <ContactInfoForm api={props.api.clone()} reload={*reload} on_saved={on_saved} />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ContactInfoFormProps {
    api: Rc<AdminApi>,
    reload: u32,
    on_saved: Callback<()>,
}

#[function_component(ContactInfoForm)]
fn contact_info_form(props: &ContactInfoFormProps) -> Html {
    let current = use_state(|| None::<ContactInfo>);
    let form = use_state(FormState::new);
    let saving = use_state(|| false);
    let error = use_state(|| None::<String>);
    let saved = use_state(|| false);
    let load_seq = use_mut_ref(|| 0_u64);

    {
        let api = props.api.clone();
        let current = current.clone();
        let error = error.clone();
        let load_seq = load_seq.clone();
        use_effect_with(props.reload, move |_| {
            let request_id = {
                let mut seq = load_seq.borrow_mut();
                *seq += 1;
                *seq
            };
            wasm_bindgen_futures::spawn_local(async move {
                let result = load_contact_info(&*api).await;
                if *load_seq.borrow() != request_id {
                    return;
                }
                match result {
                    Ok(info) => current.set(Some(info)),
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("Failed to load contact info: {}", err).into(),
                        );
                        error.set(Some(err.user_message()));
                    },
                }
            });
            || ()
        });
    }

    let Some(info) = (*current).clone() else {
        return html! {
            <>
                if let Some(message) = (*error).clone() {
                    <ErrorBanner message={message} auto_dismiss={false} />
                }
                <LoadingSpinner size={SpinnerSize::Medium} label={AttrValue::from(common::LOADING)} />
            </>
        };
    };

    let on_field = |name: &'static str| {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let Some(value) = event_value(&event) else {
                return;
            };
            let mut next = (*form).clone();
            next.set(name, value);
            form.set(next);
        })
    };

    let on_submit = {
        let api = props.api.clone();
        let info = info.clone();
        let form = form.clone();
        let saving = saving.clone();
        let error = error.clone();
        let saved = saved.clone();
        let on_saved = props.on_saved.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *saving {
                return;
            }
            saving.set(true);
            error.set(None);
            saved.set(false);
            let api = api.clone();
            let info = info.clone();
            let form = form.clone();
            let saving = saving.clone();
            let error = error.clone();
            let saved = saved.clone();
            let on_saved = on_saved.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match save_contact_info(&*api, &info, &form).await {
                    Ok(_) => {
                        form.set(FormState::new());
                        saved.set(true);
                        on_saved.emit(());
                    },
                    Err(err) => error.set(Some(err.user_message())),
                }
                saving.set(false);
            });
        })
    };

    let input = |name: &'static str| {
        let input_type = match name {
            "email" => "email",
            "facebook" | "instagram" | "whatsapp" => "url",
            "phone" | "emergencyNumber" => "tel",
            _ => "text",
        };
        let id = format!("contact-info-{}", name);
        html! {
            <div class="form-group" key={name}>
                <label for={id.clone()}>{ field_label(name) }</label>
                <input
                    id={id}
                    type={input_type}
                    value={shown_value(&info, &form, name).to_string()}
                    disabled={*saving}
                    oninput={on_field(name)}
                />
            </div>
        }
    };

    let dismiss_error = {
        let error = error.clone();
        Callback::from(move |_: ()| error.set(None))
    };
    let dismiss_saved = {
        let saved = saved.clone();
        Callback::from(move |_: ()| saved.set(false))
    };

    html! {
        <form class="admin-form" onsubmit={on_submit}>
            <h3>{ t::INFO_HEADING }</h3>
            if let Some(message) = (*error).clone() {
                <ErrorBanner message={message} auto_dismiss={false} on_close={dismiss_error} />
            }
            if *saved {
                <ErrorBanner
                    message={t::INFO_SAVED.to_string()}
                    tone={BannerTone::Success}
                    on_close={dismiss_saved}
                />
            }
            { for CONTACT_INFO_FIELDS
                .iter()
                .filter(|name| !SOCIAL_FIELDS.contains(*name))
                .map(|name| input(*name)) }
            <h4>{ t::SOCIAL_HEADING }</h4>
            { for SOCIAL_FIELDS.iter().map(|name| input(*name)) }
            <div class="admin-form-actions">
                <button type="submit" class="admin-save" disabled={*saving}>
                    { if *saving { common::SAVING } else { common::SAVE } }
                </button>
            </div>
        </form>
    }
}
