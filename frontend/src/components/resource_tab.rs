//! One admin tab, driven by the shared `TabState` machine.
//!
//! The component owns a reducer over [`TabState`]; network steps run in
//! `spawn_local` and report back as [`TabEvent`]s. Load responses carry a
//! sequence number so an older list can never overwrite a newer one.

use std::rc::Rc;

use rescue_site_shared::{
    crud::{self, Notice, TabEvent, TabPhase, TabState},
    resource::{FieldKind, FieldSpec, Layout, Record, ResourceKind},
    Editing,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::{
    api::AdminApi,
    components::{
        error_banner::{BannerTone, ErrorBanner},
        loading_spinner::{LoadingSpinner, SpinnerSize},
    },
    i18n::{current::admin as t, current::common, field_label, status_label, tab_label},
    utils::{event_value, format_timestamp, status_badge_class, truncate},
};

const SUMMARY_CHARS: usize = 160;

#[derive(Clone, PartialEq)]
struct TabModel(TabState);

impl Reducible for TabModel {
    type Action = TabEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        next.apply(action);
        Rc::new(Self(next))
    }
}

fn ask_confirmation(message: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}

fn notice_text(notice: Notice) -> &'static str {
    match notice {
        Notice::Saved => t::SAVED,
        Notice::Deleted => t::DELETED,
        Notice::Uploaded => t::UPLOADED,
    }
}

fn heading(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Contact => t::MESSAGES_HEADING,
        _ => tab_label(kind),
    }
}

fn empty_text(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Contact => t::NO_MESSAGES,
        _ => common::EMPTY,
    }
}

#[derive(Properties, PartialEq)]
pub struct ResourceTabProps {
    pub kind: ResourceKind,
    pub api: Rc<AdminApi>,
    /// Bump to force a fresh list.
    #[prop_or_default]
    pub reload: u32,
    /// Called with the record count whenever the accepted list changes size.
    #[prop_or_default]
    pub on_loaded: Option<Callback<usize>>,
}

#[function_component(ResourceTab)]
pub fn resource_tab(props: &ResourceTabProps) -> Html {
    let kind = props.kind;
    let state = use_reducer(|| TabModel(TabState::new(kind)));
    let load_seq = use_mut_ref(|| 0_u64);

    let refresh = {
        let dispatcher = state.dispatcher();
        let api = props.api.clone();
        let load_seq = load_seq.clone();
        Callback::from(move |_: ()| {
            let seq = {
                let mut current = load_seq.borrow_mut();
                *current += 1;
                *current
            };
            dispatcher.dispatch(TabEvent::LoadStarted {
                seq,
            });
            let dispatcher = dispatcher.clone();
            let api = api.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match crud::load(&*api, kind).await {
                    Ok(records) => {
                        dispatcher.dispatch(TabEvent::Loaded {
                            seq,
                            records,
                        });
                    },
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("Failed to load {}: {}", kind.key(), err).into(),
                        );
                        dispatcher.dispatch(TabEvent::LoadFailed {
                            seq,
                            error: err,
                        });
                    },
                }
            });
        })
    };

    {
        let refresh = refresh.clone();
        use_effect_with((kind, props.reload), move |_| {
            refresh.emit(());
            || ()
        });
    }

    // Reports the accepted list only; stale responses never reach `records`.
    {
        let on_loaded = props.on_loaded.clone();
        use_effect_with(state.0.records.len(), move |count| {
            if let Some(on_loaded) = on_loaded {
                on_loaded.emit(*count);
            }
            || ()
        });
    }

    let on_save = {
        let dispatcher = state.dispatcher();
        let state = state.clone();
        let api = props.api.clone();
        let refresh = refresh.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if !state.0.can_save() {
                return;
            }
            let Some(editing) = state.0.editing.clone() else {
                return;
            };
            dispatcher.dispatch(TabEvent::SaveStarted);
            let dispatcher = dispatcher.clone();
            let api = api.clone();
            let refresh = refresh.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match crud::save(&*api, kind, &editing).await {
                    Ok(_) => {
                        dispatcher.dispatch(TabEvent::Saved);
                        refresh.emit(());
                    },
                    Err(err) => dispatcher.dispatch(TabEvent::SaveFailed(err)),
                }
            });
        })
    };

    let on_delete = {
        let dispatcher = state.dispatcher();
        let api = props.api.clone();
        let refresh = refresh.clone();
        Callback::from(move |id: String| {
            if !ask_confirmation(t::CONFIRM_DELETE) {
                return;
            }
            dispatcher.dispatch(TabEvent::DeleteStarted(id.clone()));
            let dispatcher = dispatcher.clone();
            let api = api.clone();
            let refresh = refresh.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match crud::remove(&*api, kind, &id).await {
                    Ok(()) => {
                        dispatcher.dispatch(TabEvent::Deleted);
                        refresh.emit(());
                    },
                    Err(err) => dispatcher.dispatch(TabEvent::DeleteFailed(err)),
                }
            });
        })
    };

    let on_upload = {
        let dispatcher = state.dispatcher();
        let api = props.api.clone();
        Callback::from(move |event: Event| {
            let input: Option<HtmlInputElement> = event.target_dyn_into();
            let Some(file) = input
                .as_ref()
                .and_then(HtmlInputElement::files)
                .and_then(|files| files.get(0))
            else {
                return;
            };
            if let Some(input) = input {
                input.set_value("");
            }
            dispatcher.dispatch(TabEvent::UploadStarted);
            let dispatcher = dispatcher.clone();
            let api = api.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match crud::upload(&*api, kind, file).await {
                    Ok(image) => dispatcher.dispatch(TabEvent::Uploaded(image)),
                    Err(err) => dispatcher.dispatch(TabEvent::UploadFailed(err)),
                }
            });
        })
    };

    let on_field = {
        let dispatcher = state.dispatcher();
        Callback::from(move |(field, value): (&'static str, String)| {
            dispatcher.dispatch(TabEvent::FieldChanged {
                field: field.to_string(),
                value,
            });
        })
    };

    let on_create = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(TabEvent::BeginCreate))
    };
    let on_edit = {
        let dispatcher = state.dispatcher();
        Callback::from(move |record: Record| dispatcher.dispatch(TabEvent::BeginEdit(record)))
    };
    let on_cancel = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(TabEvent::Cancel))
    };
    let on_dismiss = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(TabEvent::DismissMessages))
    };

    let tab = &state.0;
    let caps = kind.capabilities();

    let messages = html! {
        <>
            if let Some(error) = tab.error.clone() {
                <ErrorBanner message={error} auto_dismiss={false} on_close={on_dismiss.clone()} />
            }
            if let Some(notice) = tab.notice {
                <ErrorBanner
                    message={notice_text(notice).to_string()}
                    tone={BannerTone::Success}
                    on_close={on_dismiss.clone()}
                />
            }
        </>
    };

    let form = tab.editing.as_ref().map(|editing| {
        render_form(FormView {
            kind,
            editing,
            state: tab,
            on_field: on_field.clone(),
            on_submit: on_save.clone(),
            on_cancel: on_cancel.clone(),
            on_upload: on_upload.clone(),
        })
    });

    let body = match (tab.phase, kind.layout()) {
        (TabPhase::Idle | TabPhase::Loading, _) if tab.records.is_empty() => html! {
            <LoadingSpinner size={SpinnerSize::Medium} label={AttrValue::from(common::LOADING)} />
        },
        (_, Layout::Singleton) => match form {
            Some(form) => form,
            None if tab.phase == TabPhase::Errored => Html::default(),
            None => html! { <p class="admin-empty">{ t::NO_STATISTICS }</p> },
        },
        (_, Layout::List) => html! {
            <>
                { form.unwrap_or_default() }
                { render_list(kind, tab, &on_edit, &on_delete) }
            </>
        },
    };

    html! {
        <div class="admin-tab animate-[fadeIn_0.3s_ease]">
            <div class="admin-tab-header">
                <h2>{ heading(kind) }</h2>
                if caps.create && tab.editing.is_none() {
                    <button type="button" class="admin-add" onclick={on_create}>
                        { t::ADD }
                    </button>
                }
            </div>
            { messages }
            { body }
        </div>
    }
}

struct FormView<'a> {
    kind: ResourceKind,
    editing: &'a Editing,
    state: &'a TabState,
    on_field: Callback<(&'static str, String)>,
    on_submit: Callback<SubmitEvent>,
    on_cancel: Callback<MouseEvent>,
    on_upload: Callback<Event>,
}

fn render_form(view: FormView<'_>) -> Html {
    let FormView {
        kind,
        editing,
        state,
        on_field,
        on_submit,
        on_cancel,
        on_upload,
    } = view;
    let saving = state.phase == TabPhase::Saving;
    let heading = match (kind.layout(), editing.is_draft()) {
        (Layout::Singleton, _) => None,
        (Layout::List, true) => Some(t::NEW_ITEM),
        (Layout::List, false) => Some(t::EDIT_ITEM),
    };
    let image = kind
        .image_field()
        .map(|field| editing.form.value(kind, field))
        .filter(|url| !url.is_empty());

    html! {
        <form class="admin-form" onsubmit={on_submit}>
            if let Some(heading) = heading {
                <h3>{ heading }</h3>
            }
            { for kind.fields().iter().map(|spec| {
                render_field(kind, spec, &editing.form.value(kind, spec.name), saving, &on_field)
            }) }
            if kind.capabilities().upload_image {
                <div class="form-group">
                    <label for="admin-image-upload">{ t::UPLOAD_LABEL }</label>
                    <input
                        id="admin-image-upload"
                        type="file"
                        accept="image/*"
                        disabled={state.uploading || saving}
                        onchange={on_upload}
                    />
                    if state.uploading {
                        <p class="upload-status">{ t::UPLOADING }</p>
                    }
                    if let Some(url) = image {
                        <img class="admin-image-preview" src={url} alt="" />
                    }
                </div>
            }
            <div class="admin-form-actions">
                <button type="submit" class="admin-save" disabled={!state.can_save()}>
                    { if saving { common::SAVING } else { common::SAVE } }
                </button>
                <button type="button" class="admin-cancel" disabled={saving} onclick={on_cancel}>
                    { common::CANCEL }
                </button>
            </div>
        </form>
    }
}

fn render_field(
    kind: ResourceKind,
    spec: &'static FieldSpec,
    value: &str,
    disabled: bool,
    on_field: &Callback<(&'static str, String)>,
) -> Html {
    let name = spec.name;
    let id = format!("{}-{}", kind.key(), name);
    let onchange = on_field.reform(move |event: Event| (name, event_value(&event).unwrap_or_default()));
    let oninput = on_field.reform(move |event: InputEvent| (name, event_value(&event).unwrap_or_default()));

    let control = match spec.kind {
        FieldKind::LongText => html! {
            <textarea id={id.clone()} rows="4" value={value.to_string()} {disabled} required={spec.required} {oninput} />
        },
        FieldKind::Select(options) => html! {
            <select id={id.clone()} {disabled} {onchange}>
                { for options.iter().map(|option| html! {
                    <option key={*option} value={*option} selected={*option == value}>
                        { status_label(option) }
                    </option>
                }) }
            </select>
        },
        other => {
            let input_type = match other {
                FieldKind::Number => "number",
                FieldKind::Email => "email",
                FieldKind::Url => "url",
                _ => "text",
            };
            html! {
                <input
                    id={id.clone()}
                    type={input_type}
                    value={value.to_string()}
                    {disabled}
                    required={spec.required}
                    {oninput}
                />
            }
        },
    };

    html! {
        <div class="form-group" key={name}>
            <label for={id}>
                { field_label(name) }
                if spec.required { <span class="required">{" *"}</span> }
            </label>
            { control }
        </div>
    }
}

fn summary_value(field: &str, record: &Record) -> Html {
    let text = record.text(field);
    if text.is_empty() {
        return Html::default();
    }
    match field {
        "status" => html! { <span class={status_badge_class(&text)}>{ status_label(&text) }</span> },
        "createdAt" | "addedAt" => html! {
            <span class="admin-meta">{ format!("{}: {}", field_label(field), format_timestamp(&text)) }</span>
        },
        "amount" => html! { <span class="admin-amount">{ format!("₪{}", text) }</span> },
        "description" | "message" => html! { <p class="admin-summary">{ truncate(&text, SUMMARY_CHARS) }</p> },
        _ => html! { <span class="admin-meta">{ text }</span> },
    }
}

fn render_list(
    kind: ResourceKind,
    state: &TabState,
    on_edit: &Callback<Record>,
    on_delete: &Callback<String>,
) -> Html {
    if state.records.is_empty() {
        return match state.phase {
            TabPhase::Errored => Html::default(),
            _ => html! { <p class="admin-empty">{ empty_text(kind) }</p> },
        };
    }
    let caps = kind.capabilities();
    let busy = state.is_busy();

    html! {
        <ul class="admin-list">
            { for state.records.iter().enumerate().map(|(index, record)| {
                let id = record.id();
                let key = id.clone().unwrap_or_else(|| index.to_string());
                let deleting = id.is_some() && state.deleting == id;
                let image = kind
                    .image_field()
                    .map(|field| record.text(field))
                    .filter(|url| !url.is_empty());
                let edit = {
                    let record = record.clone();
                    on_edit.reform(move |_: MouseEvent| record.clone())
                };
                let delete = id.clone().map(|id| on_delete.reform(move |_: MouseEvent| id.clone()));
                html! {
                    <li class="admin-item" key={key}>
                        if let Some(url) = image {
                            <img class="admin-thumb" src={url} alt="" loading="lazy" />
                        }
                        <div class="admin-item-body">
                            <h4>{ record.text(kind.title_field()) }</h4>
                            { for kind.summary_fields().iter().map(|field| summary_value(field, record)) }
                        </div>
                        <div class="admin-item-actions">
                            if caps.edit {
                                <button type="button" disabled={busy} onclick={edit}>{ common::EDIT }</button>
                            }
                            if caps.delete {
                                if let Some(delete) = delete {
                                    <button type="button" class="admin-delete" disabled={busy} onclick={delete}>
                                        { if deleting { common::DELETING } else { common::DELETE } }
                                    </button>
                                }
                            }
                        </div>
                    </li>
                }
            }) }
        </ul>
    }
}
