use js_sys::Date;
use wasm_bindgen::JsValue;
use yew::{classes, Classes};

/// Render an ISO timestamp as `DD/MM/YYYY HH:MM` in local time. Anything
/// that does not parse is shown unchanged.
pub fn format_timestamp(raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }
    let d = Date::new(&JsValue::from_str(raw));
    if d.get_time().is_nan() {
        return raw.to_string();
    }
    format!(
        "{:02}/{:02}/{:04} {:02}:{:02}",
        d.get_date(),
        d.get_month() + 1, // JS months are 0-indexed
        d.get_full_year(),
        d.get_hours(),
        d.get_minutes(),
    )
}

pub fn current_year() -> u32 {
    Date::new_0().get_full_year()
}

/// Cut `text` to `max_chars` characters, marking the cut with an ellipsis.
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}…", text[..cut].trim_end()),
        None => text.to_string(),
    }
}

pub fn status_badge_class(status: &str) -> Classes {
    let base = classes!(
        "inline-flex",
        "items-center",
        "rounded-full",
        "px-2",
        "py-0.5",
        "text-xs",
        "font-semibold"
    );
    match status {
        "pending" => classes!(base, "bg-amber-500/15", "text-amber-700"),
        "read" => classes!(base, "bg-sky-500/15", "text-sky-700"),
        "replied" | "completed" => classes!(base, "bg-emerald-500/15", "text-emerald-700"),
        "failed" => classes!(base, "bg-red-500/15", "text-red-700"),
        _ => classes!(base, "bg-slate-500/15", "text-slate-700"),
    }
}

/// Read the current value of an `<input>`, `<textarea>` or `<select>`
/// from its change event.
pub fn event_value(event: &web_sys::Event) -> Option<String> {
    use wasm_bindgen::JsCast;
    use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

    let target = event.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        return Some(area.value());
    }
    target
        .dyn_ref::<HtmlSelectElement>()
        .map(HtmlSelectElement::value)
}
