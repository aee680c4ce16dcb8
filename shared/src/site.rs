//! Behaviour of the public landing sections, kept free of any DOM types.

use thiserror::Error;

use crate::models::{ContactDraft, GalleryItem, Sponsor, StatItem, Story};

/// Interval between count-up frames, in milliseconds.
pub const COUNT_UP_TICK_MS: u32 = 30;
const COUNT_UP_STEPS: f64 = 50.0;

/// Preset donation amounts in shekels.
pub const PRESET_AMOUNTS: [u32; 4] = [50, 100, 250, 500];
/// How long the donation thank-you note stays up.
pub const DONATION_NOTE_MS: u32 = 3_000;

/// Animated counter that climbs from zero to `target` in fifty equal steps.
#[derive(Debug, Clone, PartialEq)]
pub struct CountUp {
    target: f64,
    step: f64,
    current: f64,
    displayed: f64,
    done: bool,
}

impl CountUp {
    pub fn new(target: f64) -> Self {
        let target = if target.is_finite() { target } else { 0.0 };
        Self {
            target,
            step: target / COUNT_UP_STEPS,
            current: 0.0,
            displayed: 0.0,
            done: false,
        }
    }

    /// Advance one frame and return the value to show.
    pub fn tick(&mut self) -> f64 {
        if self.done {
            return self.displayed;
        }
        self.current += self.step;
        if self.current >= self.target || self.step <= 0.0 {
            self.displayed = self.target;
            self.done = true;
        } else {
            self.displayed = self.current.floor();
        }
        self.displayed
    }

    pub fn value(&self) -> f64 {
        self.displayed
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Delay for the next frame; `0` stops the timer. Nothing runs until
    /// the counter has been scrolled into view.
    pub fn interval_ms(&self, visible: bool) -> u32 {
        if visible && !self.done {
            COUNT_UP_TICK_MS
        } else {
            0
        }
    }
}

/// Render `value` with thousands separators; fractional values keep one
/// decimal.
pub fn format_stat(value: f64) -> String {
    let negative = value < 0.0;
    // Round to one decimal first so 1.96 carries into "2".
    let tenths = (value.abs() * 10.0).round() as u64;
    let whole = tenths / 10;
    let fraction = tenths % 10;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if negative && tenths > 0 { "-" } else { "" };
    if fraction > 0 {
        format!("{sign}{grouped}.{fraction}")
    } else {
        format!("{sign}{grouped}")
    }
}

pub fn carousel_next(active: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (active + 1) % len
    }
}

pub fn carousel_prev(active: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (active % len + len - 1) % len
    }
}

/// Donation form state: a preset button or a typed amount, never both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DonationChoice {
    pub preset: Option<u32>,
    pub custom: String,
}

impl DonationChoice {
    pub fn select_preset(&mut self, amount: u32) {
        self.preset = Some(amount);
        self.custom.clear();
    }

    pub fn set_custom(&mut self, raw: impl Into<String>) {
        self.custom = raw.into();
        self.preset = None;
    }

    /// Submit button is enabled once anything has been chosen.
    pub fn can_submit(&self) -> bool {
        self.preset.is_some() || !self.custom.trim().is_empty()
    }

    /// Amount to donate, if positive.
    pub fn amount(&self) -> Option<f64> {
        let amount = match self.preset {
            Some(preset) => f64::from(preset),
            None => self.custom.trim().parse::<f64>().ok()?,
        };
        (amount.is_finite() && amount > 0.0).then_some(amount)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("missing field `{0}`")]
    Missing(&'static str),
    #[error("invalid email address")]
    InvalidEmail,
}

impl ContactDraft {
    /// All three fields are required and the email must look like one.
    pub fn validate(&self) -> Result<(), DraftError> {
        for (name, value) in [("name", &self.name), ("email", &self.email), ("message", &self.message)] {
            if value.trim().is_empty() {
                return Err(DraftError::Missing(name));
            }
        }
        let email = self.email.trim();
        let well_formed = email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.') && !domain.ends_with('.'));
        if !well_formed {
            return Err(DraftError::InvalidEmail);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Ascending by `order`; items without one sort as zero. Stable.
pub fn sort_stat_items(items: &mut [StatItem]) {
    items.sort_by_key(|item| item.order.unwrap_or(0));
}

/// Use `fallback` when the backend came back empty.
pub fn or_fallback<T>(items: Vec<T>, fallback: impl FnOnce() -> Vec<T>) -> Vec<T> {
    if items.is_empty() {
        fallback()
    } else {
        items
    }
}

pub fn stat_placeholders() -> Vec<StatItem> {
    [("placeholder-1", "מתנדבים פעילים"), ("placeholder-2", "קריאות חירום שטופלו")]
        .into_iter()
        .map(|(id, title)| StatItem {
            id: id.to_string(),
            title: title.to_string(),
            value: 0.0,
            unit: None,
            order: None,
        })
        .collect()
}

pub fn fallback_gallery() -> Vec<GalleryItem> {
    [
        ("קוד אחמר", "סדנה"),
        ("הכשרה בשטח", "הכשרה"),
        ("צוות חדש", "מתנדבים"),
        ("אמבולנס חדש", "ציוד"),
        ("פעילות קהילתית", "קהילה"),
        ("תרגיל הצלה", "הכשרה"),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (title, category))| GalleryItem {
        id: (i + 1).to_string(),
        title: title.to_string(),
        category: category.to_string(),
        image_url: None,
    })
    .collect()
}

pub fn fallback_stories() -> Vec<Story> {
    [
        (
            "הצלה במטבח",
            "אדם בן 62 נפל בחצר ביתו. המתנדבים שלנו הגיעו תוך 4 דקות, סיפקו עזרה ראשונה והעבירו אותו בטוח לבית החולים.",
            "15 בינואר 2024",
        ),
        (
            "נערה צעירה בחנק",
            "קריאה חירום לדירה בשכונת הדר. מתנדב עם הכשרה בעזרה ראשונה בצע טכניקת פרוק חנק וחציא חיי הנערה.",
            "8 בדצמבר 2023",
        ),
        (
            "גבר בהתקף לב",
            "קריאה בחצות הלילה לגבר בן 55 שסבול התקף לב. המתנדבים השתמשו במכשיר הדיפיברילציה וחזרו את הלב לקצב תקין.",
            "22 בנובמבר 2023",
        ),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (title, description, date))| Story {
        id: (i + 1).to_string(),
        title: title.to_string(),
        description: description.to_string(),
        image: None,
        date: date.to_string(),
    })
    .collect()
}

pub fn fallback_sponsors() -> Vec<Sponsor> {
    [
        ("תורם אחד", "תורם ראשי"),
        ("תורם שני", "תורם"),
        ("תורם שלישי", "תורם"),
        ("תורם רביעי", "תורם"),
        ("תורם חמישי", "תורם"),
        ("תורם שישי", "שותף"),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (name, category))| Sponsor {
        id: (i + 1).to_string(),
        name: name.to_string(),
        category: category.to_string(),
        logo: None,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_up_reaches_target_in_fifty_ticks() {
        let mut counter = CountUp::new(1000.0);
        let mut frames = Vec::new();
        while !counter.is_done() {
            frames.push(counter.tick());
        }
        assert_eq!(frames.len(), 50);
        assert_eq!(frames[0], 20.0);
        assert_eq!(*frames.last().unwrap_or(&0.0), 1000.0);
        assert!(frames.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn count_up_of_zero_finishes_immediately() {
        let mut counter = CountUp::new(0.0);
        assert_eq!(counter.tick(), 0.0);
        assert!(counter.is_done());
    }

    #[test]
    fn count_up_waits_until_visible_and_stops_when_done() {
        let mut counter = CountUp::new(100.0);
        assert_eq!(counter.interval_ms(false), 0);
        assert_eq!(counter.value(), 0.0);
        assert_eq!(counter.interval_ms(true), COUNT_UP_TICK_MS);

        while !counter.is_done() {
            counter.tick();
        }
        assert_eq!(counter.interval_ms(true), 0);
    }

    #[test]
    fn count_up_floors_intermediate_frames() {
        let mut counter = CountUp::new(7.0);
        assert_eq!(counter.tick(), 0.0);
        assert_eq!(counter.value(), 0.0);
    }

    #[test]
    fn stats_are_grouped_by_thousands() {
        assert_eq!(format_stat(0.0), "0");
        assert_eq!(format_stat(1234567.0), "1,234,567");
        assert_eq!(format_stat(99.5), "99.5");
        assert_eq!(format_stat(-1500.0), "-1,500");
    }

    #[test]
    fn rounding_carries_into_the_whole_part() {
        assert_eq!(format_stat(1.96), "2");
        assert_eq!(format_stat(99.96), "100");
        assert_eq!(format_stat(999.95), "1,000");
        assert_eq!(format_stat(12.34), "12.3");
    }

    #[test]
    fn carousel_wraps_both_ways() {
        assert_eq!(carousel_next(2, 3), 0);
        assert_eq!(carousel_prev(0, 3), 2);
        assert_eq!(carousel_prev(1, 3), 0);
        assert_eq!(carousel_next(0, 0), 0);
        assert_eq!(carousel_prev(0, 0), 0);
    }

    #[test]
    fn donation_preset_and_custom_are_exclusive() {
        let mut choice = DonationChoice::default();
        assert!(!choice.can_submit());

        choice.select_preset(250);
        assert_eq!(choice.amount(), Some(250.0));

        choice.set_custom("75.5");
        assert_eq!(choice.preset, None);
        assert_eq!(choice.amount(), Some(75.5));

        choice.set_custom("-3");
        assert!(choice.can_submit());
        assert_eq!(choice.amount(), None);

        choice.select_preset(50);
        assert!(choice.custom.is_empty());
        choice.reset();
        assert_eq!(choice, DonationChoice::default());
    }

    #[test]
    fn contact_draft_requires_every_field() {
        let mut draft = ContactDraft {
            name: "Dana".into(),
            email: "dana@example.org".into(),
            message: "  ".into(),
        };
        assert_eq!(draft.validate(), Err(DraftError::Missing("message")));

        draft.message = "Thanks!".into();
        assert_eq!(draft.validate(), Ok(()));

        draft.email = "dana@localhost".into();
        assert_eq!(draft.validate(), Err(DraftError::InvalidEmail));

        draft.clear();
        assert_eq!(draft.validate(), Err(DraftError::Missing("name")));
    }

    #[test]
    fn stat_items_sort_by_order_with_missing_as_zero() {
        let item = |id: &str, order: Option<i64>| StatItem {
            id: id.into(),
            title: id.into(),
            value: 1.0,
            unit: None,
            order,
        };
        let mut items = vec![item("c", Some(2)), item("a", None), item("b", Some(-1)), item("d", Some(0))];
        sort_stat_items(&mut items);
        let ids: Vec<_> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "d", "c"]);
    }

    #[test]
    fn empty_backend_lists_use_builtin_content() {
        assert_eq!(or_fallback(Vec::new(), fallback_gallery).len(), 6);
        assert_eq!(or_fallback(Vec::new(), fallback_stories).len(), 3);
        let sponsors = or_fallback(Vec::new(), fallback_sponsors);
        assert_eq!(sponsors[5].category, "שותף");
        assert_eq!(or_fallback(vec![1], Vec::new), vec![1]);
        assert_eq!(stat_placeholders().len(), 2);
    }
}
