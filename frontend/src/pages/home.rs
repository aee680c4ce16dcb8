use yew::prelude::*;

use crate::{
    components::{
        about::About, contact::Contact, donation_section::DonationSection, donors::Donors,
        footer::Footer, gallery::Gallery, hero::Hero, statistics::Statistics, stories::Stories,
    },
    hooks::use_scroll_to_top,
};

/// The public landing page, one section after another.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    use_scroll_to_top();

    html! {
        <>
            <main class="site">
                <Hero />
                <About />
                <Statistics />
                <Stories />
                <Gallery />
                <Donors />
                <DonationSection />
                <Contact />
            </main>
            <Footer />
        </>
    }
}
