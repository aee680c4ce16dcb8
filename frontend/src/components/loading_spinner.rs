use yew::prelude::*;

use crate::i18n::current::loading_spinner as t;

#[derive(Clone, PartialEq)]
pub enum SpinnerSize {
    Small,
    Medium,
    Large,
}

impl SpinnerSize {
    fn dimension(&self) -> u32 {
        match self {
            SpinnerSize::Small => 20,
            SpinnerSize::Medium => 40,
            SpinnerSize::Large => 64,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    #[prop_or(SpinnerSize::Medium)]
    pub size: SpinnerSize,
    #[prop_or(false)]
    pub fullscreen: bool,
    /// Visible caption under the spinner.
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    let spinner_style = format!("--spinner-size:{}px;", props.size.dimension());

    let spinner = html! {
        <div class="spinner-wrap" role="status" aria-live="polite" aria-busy="true">
            <div style={spinner_style} class="spinner" />
            if let Some(label) = props.label.clone() {
                <p class="spinner-label">{ label }</p>
            } else {
                <span class="sr-only">{ t::ARIA_LABEL }</span>
            }
        </div>
    };

    if props.fullscreen {
        html! {
            <div class="loading-spinner-overlay">
                { spinner }
            </div>
        }
    } else {
        spinner
    }
}
