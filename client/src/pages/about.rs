use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::layout::CONTACT_EMAIL;
use crate::components::section::{Background, FeatureGrid, PageHero, Section};

const VALUES: &[(&str, &str)] = &[
    (
        "Innovation",
        "We leverage cutting-edge AI to solve real problems and make automation accessible to everyone.",
    ),
    (
        "User-First",
        "Every feature we build starts with understanding what frustrates our users and how we can help.",
    ),
    (
        "Simplicity",
        "Powerful automation shouldn't be complicated. We make it simple so you can focus on what matters.",
    ),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About - FillFlow"/>
        <PageHero
            title="About FillFlow"
            subtitle="We're on a mission to eliminate tedious form filling and give you back hours every week."
        />
        <Section>
            <div class="prose">
                <h2>"Our Story"</h2>
                <p>
                    "FillFlow was born from frustration. After spending countless hours filling out repetitive forms \
                     (job applications, government paperwork, medical intake forms) we realized there had to be a \
                     better way."
                </p>
                <p>
                    "Traditional form fillers just weren't smart enough. They'd fumble with field recognition, \
                     require complex setup, or only work on specific websites. We knew AI could do better."
                </p>
                <p>
                    "So we built FillFlow: an intelligent form-filling assistant that understands forms, learns \
                     from context, and works everywhere. What used to take 10 minutes now takes seconds."
                </p>
                <h3>"Beyond the Extension"</h3>
                <p>
                    "While FillFlow started as a Chrome extension for individuals, we've expanded to solve unique \
                     automation challenges for enterprises, building custom document pipelines for HR, finance, \
                     and healthcare workflows."
                </p>
            </div>
        </Section>
        <Section background=Background::WarmSand>
            <h2 class="section__title">"What Drives Us"</h2>
            <FeatureGrid items=VALUES/>
        </Section>
        <Section>
            <div class="cta-band">
                <h2>"Get in Touch"</h2>
                <p>"Have questions, feedback, or just want to say hello? We'd love to hear from you."</p>
                <a class="button button--primary" href="/contact">"Contact Us"</a>
                <a class="button button--secondary" href=format!("mailto:{CONTACT_EMAIL}")>"Email Us"</a>
            </div>
        </Section>
    }
}
