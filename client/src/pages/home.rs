//! Landing page.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::pricing_cards::PRICING_TIERS;
use crate::components::section::{Background, FeatureGrid, Section};

const PROBLEMS: &[(&str, &str)] = &[
    ("Re-entering the same information is exhausting", ""),
    ("Admin work slows down real work", ""),
    ("Manual entry creates errors", ""),
];

const STEPS: &[(&str, &str)] = &[
    (
        "1. Upload your documents",
        "Add PDFs, receipts, resumes, or forms you've filled before. FillFlow learns from your data.",
    ),
    (
        "2. Open any form",
        "Works on any website: HR portals, job sites, government forms, expense systems. No integrations needed.",
    ),
    (
        "3. FillFlow fills it for you",
        "Click the extension, describe what you need, and watch it populate. Review, edit if needed, and submit.",
    ),
];

const DIFFERENTIATORS: &[(&str, &str)] = &[
    ("Works everywhere", "No integrations, no API setup, no software installs. Works on any website with forms."),
    (
        "Uses your existing data",
        "Upload documents you already have. FillFlow understands context and pulls the right information.",
    ),
    ("Smart, not just fast", "Matches fields intelligently. Shows confidence scores so you know what to review."),
    ("You stay in control", "Review every field before submitting. FillFlow suggests, you approve."),
    ("No complex setup", "Install the extension, upload a few docs, start saving time. No training required."),
    ("Built for humans", "Reduces cognitive load and errors. Lets you focus on decisions, not data entry."),
];

const TRUST: &[(&str, &str)] = &[
    ("Privacy by design", "Your documents are encrypted and stored securely. We never share or sell your data."),
    ("Isolated storage", "Each user gets their own secure space. Your information never mixes with others."),
    ("You choose what to share", "Control exactly which documents FillFlow can access. Delete your data anytime."),
    ("Enterprise-grade security", "Built with the same standards used by financial institutions."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let testimonials = PRICING_TIERS
        .iter()
        .map(|tier| {
            let t = tier.testimonial;
            view! {
                <blockquote class="testimonial">
                    <div class="testimonial__stars">{"\u{2605}".repeat(usize::from(t.rating))}</div>
                    <p>{format!("\"{}\"", t.quote)}</p>
                    <cite>{t.role}</cite>
                </blockquote>
            }
        })
        .collect_view();

    view! {
        <Title text="FillFlow - Stop filling out forms"/>
        <Section background=Background::WarmSand>
            <div class="hero">
                <h1 class="hero__title">"Stop filling out forms. Start getting work done."</h1>
                <p class="hero__subtitle">
                    "FillFlow uses your existing documents to complete forms in seconds so hours of busywork disappear every week."
                </p>
                <div class="hero__actions">
                    <a class="button button--primary button--lg" href="/coming-soon">"Try for Free"</a>
                    <a class="button button--secondary button--lg" href="/#how-it-works">"See How It Works"</a>
                </div>
                <ul class="hero__badges">
                    <li>"Your data stays private"</li>
                    <li>"Works in <10 seconds"</li>
                    <li>"99% accuracy"</li>
                </ul>
            </div>
        </Section>

        <Section>
            <h2 class="section__title">"Forms shouldn't feel like data entry"</h2>
            <FeatureGrid items=PROBLEMS/>
        </Section>

        <Section id="how-it-works" background=Background::LavenderMist>
            <h2 class="section__title">"Three steps to never copy-paste again"</h2>
            <FeatureGrid items=STEPS/>
            <div class="section__cta">
                <a class="button button--primary button--lg" href="/coming-soon">"Get Started Free"</a>
            </div>
        </Section>

        <Section id="individuals">
            <h2 class="section__title">"See FillFlow in action"</h2>
            <ol class="demo-steps">
                <li>"Open an expense report form"</li>
                <li>"Click the FillFlow extension"</li>
                <li>"Ask: \"Fill my Python training expense from May 17th\""</li>
                <li>"Watch fields populate with confidence colors"</li>
                <li>"Review and submit"</li>
            </ol>
            <p class="section__lead">"From blank form to filled in 10 seconds"</p>
        </Section>

        <Section id="enterprise" background=Background::WarmSand>
            <h2 class="section__title">"Form filling that fits your workflow"</h2>
            <FeatureGrid items=DIFFERENTIATORS/>
            <p class="section__lead">"Powered by AI that understands context, but you're always in charge."</p>
        </Section>

        <Section>
            <h2 class="section__title">"Trusted by professionals who value their time"</h2>
            <p class="section__lead">"Currently piloting with HR teams, finance professionals, and students."</p>
            <div class="testimonial-grid">{testimonials}</div>
        </Section>

        <Section background=Background::TealSoftwave>
            <h2 class="section__title">"Your data, your control"</h2>
            <FeatureGrid items=TRUST/>
            <div class="section__cta">
                <a class="button button--text" href="/security">"Read our Security Practices \u{2192}"</a>
            </div>
        </Section>
    }
}
