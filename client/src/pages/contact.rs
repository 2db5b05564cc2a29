use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::layout::CONTACT_EMAIL;
use crate::components::lead_form::LeadForm;
use crate::components::section::{Background, PageHero, Section};
use crate::state::forms::CONTACT_FORM;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Title text="Contact - FillFlow"/>
        <PageHero title="Contact Us" subtitle="Have a question, feedback, or need support? We're here to help."/>
        <LeadForm spec=CONTACT_FORM/>
        <Section background=Background::WarmSand>
            <h2 class="section__title">"Other Ways to Reach Us"</h2>
            <div class="feature-grid">
                <div class="feature">
                    <h3 class="feature__title">"Email Us Directly"</h3>
                    <a href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a>
                </div>
                <div class="feature">
                    <h3 class="feature__title">"Check Our FAQ"</h3>
                    <p class="feature__text">"Find answers to common questions"</p>
                    <a href="/faq">"Visit FAQ"</a>
                </div>
            </div>
        </Section>
    }
}
