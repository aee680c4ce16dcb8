// Reusable components and the landing-page sections live here.

pub mod about;
pub mod admin_guard;
pub mod contact;
pub mod contact_tab;
pub mod donation_section;
pub mod donors;
pub mod error_banner;
pub mod footer;
pub mod gallery;
pub mod hero;
pub mod loading_spinner;
pub mod resource_tab;
pub mod statistics;
pub mod stats_card;
pub mod stories;
