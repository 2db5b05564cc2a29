//! Pricing tier data and the three-card pricing grid.

#[cfg(test)]
#[path = "pricing_cards_test.rs"]
mod pricing_cards_test;

use leptos::prelude::*;

use super::section::Card;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub role: &'static str,
    pub rating: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingTier {
    pub name: &'static str,
    pub price: &'static str,
    /// Billing period suffix, empty for custom pricing.
    pub period: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub testimonial: Testimonial,
    pub cta: &'static str,
    pub cta_href: &'static str,
    pub highlighted: bool,
    pub badge: Option<&'static str>,
}

pub const PRICING_TIERS: &[PricingTier] = &[
    PricingTier {
        name: "Free",
        price: "$0",
        period: "/month",
        description: "Perfect for individuals getting started",
        features: &[
            "Unlimited forms filled",
            "Up to 30 documents",
            "Basic support",
            "Works on all websites",
            "Chrome extension access",
            "Email support",
        ],
        testimonial: Testimonial {
            quote: "As a student applying to multiple opportunities, this tool has been helpful for managing repetitive forms.",
            role: "UT Austin Student",
            rating: 5,
        },
        cta: "Get Started Free",
        cta_href: "/coming-soon",
        highlighted: false,
        badge: None,
    },
    PricingTier {
        name: "Premium",
        price: "$20",
        period: "/month",
        description: "For professionals who need more",
        features: &[
            "Everything in Free, plus:",
            "Unlimited document storage",
            "Priority AI processing",
            "Priority support",
            "Early access to new features",
            "Usage analytics",
        ],
        testimonial: Testimonial {
            quote: "Our finance team has found FillFlow useful for handling expense reports more efficiently.",
            role: "Finance Analyst",
            rating: 5,
        },
        cta: "Start Free Trial",
        cta_href: "/coming-soon",
        highlighted: true,
        badge: Some("Most Popular"),
    },
    PricingTier {
        name: "Enterprise",
        price: "Custom",
        period: "",
        description: "For teams that need advanced features",
        features: &[
            "Everything in Premium, plus:",
            "Custom document limits",
            "Team management dashboard",
            "SSO & advanced security",
            "Dedicated support",
            "SLA guarantees",
            "Custom training & onboarding",
            "API access (coming soon)",
        ],
        testimonial: Testimonial {
            quote: "FillFlow has helped streamline our employee onboarding process. We've seen measurable time savings.",
            role: "HR Analyst",
            rating: 5,
        },
        cta: "Contact Sales",
        cta_href: "/custom-solutions",
        highlighted: false,
        badge: None,
    },
];

/// "Everything in X, plus:" rows introduce an inherited feature set.
pub fn is_inherited_feature(feature: &str) -> bool {
    feature.starts_with("Everything")
}

#[component]
fn TierCard(tier: PricingTier) -> impl IntoView {
    let features = tier
        .features
        .iter()
        .map(|f| {
            view! {
                <li class="tier__feature" class:tier__feature--inherited=is_inherited_feature(f)>
                    <span class="tier__check" aria-hidden="true">"\u{2713}"</span>
                    {*f}
                </li>
            }
        })
        .collect_view();
    let stars = "\u{2605}".repeat(usize::from(tier.testimonial.rating));
    let button_class = if tier.highlighted { "button button--primary" } else { "button button--secondary" };

    view! {
        <Card highlighted=tier.highlighted>
            {tier.badge.map(|b| view! { <div class="tier__badge">{b}</div> })}
            <h3 class="tier__name">{tier.name}</h3>
            <p class="tier__price">
                <span class="tier__amount">{tier.price}</span>
                <span class="tier__period">{tier.period}</span>
            </p>
            <p class="tier__description">{tier.description}</p>
            <ul class="tier__features">{features}</ul>
            <blockquote class="tier__testimonial">
                <div class="tier__stars" aria-label=format!("{} star rating", tier.testimonial.rating)>{stars}</div>
                <p>{format!("\"{}\"", tier.testimonial.quote)}</p>
                <cite>{tier.testimonial.role}</cite>
            </blockquote>
            <a class=button_class href=tier.cta_href>{tier.cta}</a>
        </Card>
    }
}

#[component]
pub fn PricingCards() -> impl IntoView {
    view! {
        <div class="pricing-grid">
            {PRICING_TIERS.iter().map(|tier| view! { <TierCard tier=*tier/> }).collect_view()}
        </div>
    }
}
