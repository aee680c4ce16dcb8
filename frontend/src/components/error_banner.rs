use yew::{prelude::*, use_effect_with};
use yew_hooks::prelude::use_timeout;

use crate::i18n::current::error_banner as t;

const AUTO_DISMISS_MS: u32 = 3_000;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum BannerTone {
    #[default]
    Error,
    Success,
}

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
    #[prop_or_default]
    pub tone: BannerTone,
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
    #[prop_or(true)]
    pub auto_dismiss: bool,
}

/// Inline message strip. Errors carry a heading; success notices are a
/// single line. Both fade out after three seconds unless `auto_dismiss` is
/// off.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let is_open = use_state(|| true);

    let dismiss = {
        let is_open = is_open.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_| {
            if !*is_open {
                return;
            }
            is_open.set(false);
            if let Some(cb) = on_close.as_ref() {
                cb.emit(());
            }
        })
    };

    let auto_timeout = {
        let dismiss = dismiss.clone();
        use_timeout(move || dismiss.emit(()), if props.auto_dismiss { AUTO_DISMISS_MS } else { 0 })
    };

    {
        let is_open = is_open.clone();
        use_effect_with(props.message.clone(), move |_| {
            is_open.set(true);
        });
    }

    {
        let auto_timeout = auto_timeout.clone();
        use_effect_with(
            (*is_open, props.auto_dismiss, props.message.clone()),
            move |(visible, auto_dismiss, _message)| {
                if *auto_dismiss && *visible {
                    auto_timeout.reset();
                } else {
                    auto_timeout.cancel();
                }
            },
        );
    }

    if props.message.trim().is_empty() {
        return Html::default();
    }

    let mut wrapper_classes = classes!(
        "banner",
        "flex",
        "items-start",
        "gap-3",
        "rounded-xl",
        "px-5",
        "py-3",
        "text-sm",
        "transition-all",
        "duration-300",
        "overflow-hidden"
    );
    wrapper_classes.push(match props.tone {
        BannerTone::Error => "banner-error",
        BannerTone::Success => "banner-success",
    });
    if *is_open {
        wrapper_classes.push("opacity-100 max-h-48");
    } else {
        wrapper_classes.push("opacity-0 max-h-0 pointer-events-none");
    }

    let (icon, role) = match props.tone {
        BannerTone::Error => ("⚠️", "alert"),
        BannerTone::Success => ("✅", "status"),
    };

    html! {
        <div class={wrapper_classes} role={role} aria-live="polite">
            <span class="text-xl" aria-hidden="true">{ icon }</span>
            <div class="flex-1">
                if props.tone == BannerTone::Error {
                    <p class="font-semibold">{ t::TITLE }</p>
                }
                <p>{ props.message.clone() }</p>
            </div>
            <button
                type="button"
                class="banner-close"
                aria-label={t::CLOSE_ARIA}
                onclick={dismiss.reform(|_: MouseEvent| ())}
            >
                {"×"}
            </button>
        </div>
    }
}
