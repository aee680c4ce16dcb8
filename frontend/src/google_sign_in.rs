//! Google Identity Services interop: loads the GSI script, renders its
//! button and hands the returned ID token to the caller.

use std::{cell::RefCell, rc::Rc};

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, HtmlElement, HtmlScriptElement};
use yew::prelude::*;

use crate::{config::GOOGLE_CLIENT_ID, i18n::current::login as t};

const GSI_SCRIPT_SRC: &str = "https://accounts.google.com/gsi/client";

/// `window.google.accounts.id`, once the script has loaded.
fn google_id_api() -> Option<JsValue> {
    let mut target: JsValue = window()?.into();
    for key in ["google", "accounts", "id"] {
        target = Reflect::get(&target, &JsValue::from_str(key)).ok()?;
        if target.is_undefined() || target.is_null() {
            return None;
        }
    }
    Some(target)
}

fn call(target: &JsValue, method: &str, args: &Array) -> Result<JsValue, JsValue> {
    let function: Function = Reflect::get(target, &JsValue::from_str(method))?.dyn_into()?;
    function.apply(target, args)
}

fn object(entries: &[(&str, JsValue)]) -> Result<Object, JsValue> {
    let object = Object::new();
    for (key, value) in entries {
        Reflect::set(&object, &JsValue::from_str(key), value)?;
    }
    Ok(object)
}

/// Drop Google's cached sign-in state. No-op when the script never loaded.
pub fn cancel() {
    if let Some(id) = google_id_api() {
        if let Err(err) = call(&id, "cancel", &Array::new()) {
            web_sys::console::warn_1(&err);
        }
    }
}

fn render_button(container: &HtmlElement, callback: &JsValue) -> Result<(), JsValue> {
    let id = google_id_api().ok_or_else(|| JsValue::from_str("google.accounts.id unavailable"))?;
    let config = object(&[
        ("client_id", JsValue::from_str(GOOGLE_CLIENT_ID)),
        ("callback", callback.clone()),
    ])?;
    call(&id, "initialize", &Array::of1(&config))?;

    let options = object(&[
        ("type", JsValue::from_str("standard")),
        ("size", JsValue::from_str("large")),
        ("theme", JsValue::from_str("outline")),
        ("text", JsValue::from_str("signin_with")),
        ("locale", JsValue::from_str("he")),
    ])?;
    call(&id, "renderButton", &Array::of2(container, &options))?;
    Ok(())
}

/// Everything that must stay alive while the button is on screen.
struct Mounted {
    script: HtmlScriptElement,
    _onload: Closure<dyn FnMut()>,
    _callback: Closure<dyn FnMut(JsValue)>,
}

impl Mounted {
    fn unmount(self) {
        self.script.remove();
    }
}

/// `on_credential` is read at call time, so the closure handed to GSI always
/// reaches the latest callback the parent rendered.
fn mount(
    container: NodeRef,
    on_credential: Rc<RefCell<Callback<String>>>,
) -> Result<Mounted, JsValue> {
    let document = window()
        .and_then(|win| win.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let callback = Closure::<dyn FnMut(JsValue)>::new(move |response: JsValue| {
        match Reflect::get(&response, &JsValue::from_str("credential"))
            .ok()
            .and_then(|value| value.as_string())
        {
            Some(credential) if !credential.is_empty() => on_credential.borrow().emit(credential),
            _ => web_sys::console::warn_1(&"Google sign-in returned no credential".into()),
        }
    });

    let callback_fn: JsValue = callback.as_ref().clone();
    let onload = Closure::<dyn FnMut()>::new(move || {
        let Some(element) = container.cast::<HtmlElement>() else {
            return;
        };
        if let Err(err) = render_button(&element, &callback_fn) {
            web_sys::console::error_1(&err);
        }
    });

    let script: HtmlScriptElement = document.create_element("script")?.dyn_into()?;
    script.set_src(GSI_SCRIPT_SRC);
    script.set_async(true);
    script.set_defer(true);
    script.set_onload(Some(onload.as_ref().unchecked_ref()));
    document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?
        .append_child(&script)?;

    Ok(Mounted {
        script,
        _onload: onload,
        _callback: callback,
    })
}

#[derive(Properties, PartialEq)]
pub struct GoogleSignInButtonProps {
    pub on_credential: Callback<String>,
    /// Blocks the rendered button while a credential is being verified.
    #[prop_or_default]
    pub disabled: bool,
}

/// The script is injected on mount and removed again on unmount.
#[function_component(GoogleSignInButton)]
pub fn google_sign_in_button(props: &GoogleSignInButtonProps) -> Html {
    let container = use_node_ref();
    let latest = use_mut_ref(|| props.on_credential.clone());
    *latest.borrow_mut() = props.on_credential.clone();

    {
        let container = container.clone();
        let on_credential = latest.clone();
        use_effect_with((), move |_| {
            let mounted = match mount(container, on_credential) {
                Ok(mounted) => Some(mounted),
                Err(err) => {
                    web_sys::console::error_1(&err);
                    None
                },
            };
            move || {
                if let Some(mounted) = mounted {
                    mounted.unmount();
                }
            }
        });
    }

    html! {
        <div
            ref={container}
            class={classes!("google-signin-button", props.disabled.then_some("disabled"))}
            aria-label={t::GOOGLE_BUTTON_ARIA}
            aria-disabled={props.disabled.to_string()}
            inert={props.disabled.then_some(AttrValue::Static(""))}
        />
    }
}
