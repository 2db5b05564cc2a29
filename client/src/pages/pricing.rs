//! Pricing page: tier cards plus billing questions.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::layout::CONTACT_EMAIL;
use crate::components::pricing_cards::PricingCards;
use crate::components::section::{Background, PageHero, Section};

const BILLING_FAQ: &[(&str, &str)] = &[
    (
        "What do I need to start with the Free plan?",
        "Nothing! No credit card required. Just install the extension and start using FillFlow immediately.",
    ),
    (
        "Does the Premium plan include a free trial?",
        "Yes, Premium includes a 14-day free trial. Plus, we offer a money-back guarantee if you're not satisfied.",
    ),
    (
        "What happens when I reach my limit on the Free plan?",
        "On the Free plan, you can store up to 30 documents. If you need more, you can upgrade to Premium for \
         unlimited storage. Your forms will continue to work with your existing documents.",
    ),
    (
        "Can I upgrade or downgrade anytime?",
        "Yes! You can upgrade to Premium or Enterprise at any time. If you downgrade, you'll keep access to \
         Premium features until the end of your billing period.",
    ),
    (
        "What's the difference between Premium and Enterprise?",
        "Premium unlocks unlimited document storage, priority support, and advanced features. Enterprise adds \
         team management, SSO, dedicated support, SLA guarantees, and custom onboarding for organizations.",
    ),
    (
        "Do you offer refunds?",
        "Yes, we offer a 14-day money-back guarantee on Premium plans. If you're not satisfied, contact us at \
         FillFlow@gmail.com for a full refund.",
    ),
    (
        "What payment methods do you accept?",
        "We accept all major credit cards (Visa, Mastercard, American Express) and PayPal. Enterprise customers \
         can also pay via invoice.",
    ),
];

#[component]
pub fn PricingPage() -> impl IntoView {
    let faq = BILLING_FAQ
        .iter()
        .map(|(q, a)| {
            view! {
                <div class="qa">
                    <h3 class="qa__question">{*q}</h3>
                    <p class="qa__answer">{*a}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <Title text="Pricing - FillFlow"/>
        <PageHero title="Plans that scale with your needs" subtitle="From individual professionals to enterprise teams"/>
        <Section>
            <PricingCards/>
        </Section>
        <Section background=Background::WarmSand>
            <h2 class="section__title">"Frequently Asked Questions"</h2>
            <div class="qa-list">{faq}</div>
        </Section>
        <Section>
            <div class="cta-band">
                <h2>"Still have questions?"</h2>
                <p>"Our team is here to help. Contact us for a personalized demo or custom pricing."</p>
                <a class="button button--secondary" href=format!("mailto:{CONTACT_EMAIL}")>"Email Us"</a>
                <a class="button button--primary" href="/schedule-demo">"Schedule a Demo"</a>
            </div>
        </Section>
    }
}
