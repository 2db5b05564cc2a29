use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::layout::CONTACT_EMAIL;
use crate::components::section::{Background, FeatureGrid, PageHero, Section};

const MEASURES: &[(&str, &str)] = &[
    (
        "End-to-End Encryption",
        "All documents and data are encrypted both in transit (TLS 1.3) and at rest (AES-256).",
    ),
    (
        "Secure Cloud Infrastructure",
        "Enterprise-grade cloud infrastructure with automatic backups, redundancy, and 99.9% uptime.",
    ),
    (
        "Access Controls",
        "Multi-factor authentication, role-based access controls, and session management ensure only you can \
         access your account and documents.",
    ),
    (
        "Privacy by Design",
        "We collect only the minimum data necessary to provide our service. We never sell, share, or use your \
         documents for any purpose other than filling forms at your request.",
    ),
    (
        "Data Retention Controls",
        "Delete individual documents or your entire account at any time. Deleted data is permanently removed \
         from our systems within 30 days.",
    ),
    (
        "Regular Security Audits",
        "We conduct regular security assessments, penetration testing, and code reviews to address potential \
         vulnerabilities before they become issues.",
    ),
];

const COMMITMENTS: &[(&str, &str)] = &[
    (
        "We Never Sell Your Data",
        "Your documents and personal information will never be sold to third parties, used for advertising, or \
         shared with anyone without your explicit consent.",
    ),
    (
        "We Don't Train AI on Your Documents",
        "Your uploaded documents are used solely to fill forms you request.",
    ),
    (
        "Minimal Data Collection",
        "We only collect your email, the documents you upload, and basic usage information to improve \
         functionality.",
    ),
    (
        "No Surprise Policy Changes",
        "We'll notify you via email before making any material changes to our security practices or privacy \
         policy.",
    ),
];

#[component]
pub fn SecurityPage() -> impl IntoView {
    view! {
        <Title text="Security - FillFlow"/>
        <PageHero
            title="Security & Data Protection"
            subtitle="Your trust is our priority. FillFlow protects your documents and personal information with enterprise-grade security."
        />
        <Section>
            <h2 class="section__title">"How We Protect Your Data"</h2>
            <FeatureGrid items=MEASURES/>
        </Section>
        <Section background=Background::WarmSand>
            <h2 class="section__title">"Our Commitments to You"</h2>
            <FeatureGrid items=COMMITMENTS/>
        </Section>
        <Section>
            <div class="cta-band">
                <h2>"Questions About Security?"</h2>
                <p>"We're happy to answer any questions about how we protect your data."</p>
                <a class="button button--primary" href=format!("mailto:{CONTACT_EMAIL}")>"Contact Security Team"</a>
            </div>
        </Section>
    }
}
