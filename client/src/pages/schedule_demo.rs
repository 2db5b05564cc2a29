use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::lead_form::LeadForm;
use crate::components::section::{FeatureGrid, PageHero, Section};
use crate::state::forms::DEMO_FORM;

const EXPECT: &[(&str, &str)] = &[
    ("Personalized Walkthrough", "See how FillFlow works with your team's specific forms and workflows"),
    ("Flexible Scheduling", "30-45 minute session at a time that works for you"),
    ("Quick Response", "We'll get back to you within 24 hours to schedule"),
];

#[component]
pub fn ScheduleDemoPage() -> impl IntoView {
    view! {
        <Title text="Schedule a Demo - FillFlow"/>
        <PageHero
            title="Schedule a Personalized Demo"
            subtitle="We'll show you exactly how it works with your use case."
        />
        <Section>
            <h2 class="section__title">"What to Expect"</h2>
            <FeatureGrid items=EXPECT/>
        </Section>
        <LeadForm spec=DEMO_FORM/>
    }
}
