use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::lead_form::LeadForm;
use crate::components::section::{Background, FeatureGrid, PageHero, Section};
use crate::state::forms::CUSTOM_SOLUTION_FORM;

const CAPABILITIES: &[(&str, &str)] = &[
    ("Document Intelligence", "OCR, text extraction, and document classification for any file type or format"),
    ("Custom AI Pipelines", "LLM integration, natural language processing, and intelligent field mapping"),
    ("System Integration", "Connect to your existing tools, databases, and workflows seamlessly"),
];

const CASE_STEPS: &[&str] = &[
    "Captures images of prescription bottles through the mobile app camera",
    "Uses OCR to extract text from labels (medication names, dosages, instructions)",
    "Employs LLMs to interpret and structure the extracted information",
    "Automatically fills prescription transfer forms with verified data",
];

#[component]
pub fn CustomSolutionsPage() -> impl IntoView {
    view! {
        <Title text="Custom Solutions - FillFlow"/>
        <PageHero
            title="Custom Automation Solutions"
            subtitle="We build tailored automation pipelines for unique workflows that off-the-shelf tools can't handle."
        />
        <Section>
            <h2 class="section__title">"Example: BottleVision"</h2>
            <div class="case-study">
                <div>
                    <h3>"The Challenge"</h3>
                    <p>
                        "Patients needed to transfer prescriptions into a mobile app, but manually typing \
                         information from pill bottles was slow, error-prone, and frustrating."
                    </p>
                </div>
                <div>
                    <h3>"Our Solution"</h3>
                    <ol>{CASE_STEPS.iter().map(|s| view! { <li>{*s}</li> }).collect_view()}</ol>
                </div>
            </div>
            <ul class="stats">
                <li><strong>"30 sec"</strong>" down from 10 minutes per prescription"</li>
                <li><strong>"95%"</strong>" OCR accuracy rate on prescription labels"</li>
                <li><strong>"Zero"</strong>" manual entry errors in medication names"</li>
            </ul>
        </Section>
        <Section background=Background::WarmSand>
            <h2 class="section__title">"What We Can Build for You"</h2>
            <FeatureGrid items=CAPABILITIES/>
        </Section>
        <Section compact=true>
            <h2 class="section__title">"Tell Us About Your Challenge"</h2>
            <p class="section__lead">"We'll analyze your workflow and propose a custom solution tailored to your needs."</p>
        </Section>
        <LeadForm spec=CUSTOM_SOLUTION_FORM/>
    }
}
