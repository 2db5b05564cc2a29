//! Pre-launch page with the waitlist signup.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::section::{Background, Section};
use crate::components::waitlist_form::WaitlistForm;

const EXPECTATIONS: &[&str] = &[
    "One-click form filling on any website",
    "Smart document matching with confidence scores",
    "Secure, encrypted storage of your documents",
    "Free plan with 30 documents and unlimited forms",
];

#[component]
pub fn ComingSoonPage() -> impl IntoView {
    view! {
        <Title text="Coming Soon - FillFlow"/>
        <Section background=Background::WarmSand>
            <div class="coming-soon">
                <h1 class="hero__title">"Chrome Extension Coming Soon!"</h1>
                <p class="hero__subtitle">
                    "We're putting the finishing touches on the FillFlow Chrome extension. Sign up to be notified when it launches!"
                </p>
                <WaitlistForm/>
                <div class="coming-soon__expect">
                    <h2>"What to expect:"</h2>
                    <ul class="checklist">
                        {EXPECTATIONS.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                    </ul>
                </div>
                <a class="button button--text" href="/">"\u{2190} Back to Home"</a>
            </div>
        </Section>
    }
}
