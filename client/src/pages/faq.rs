//! FAQ page: question/answer pairs grouped by category in an accordion.

#[cfg(test)]
#[path = "faq_test.rs"]
mod faq_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::layout::CONTACT_EMAIL;
use crate::components::section::{Background, Section};

pub struct FaqCategory {
    pub title: &'static str,
    pub entries: &'static [(&'static str, &'static str)],
}

pub const FAQ: &[FaqCategory] = &[
    FaqCategory {
        title: "Getting Started",
        entries: &[
            (
                "How do I install FillFlow?",
                "Simply visit the Chrome Web Store and search for \"FillFlow\" or use the download link on our \
                 homepage. Click \"Add to Chrome\" and the extension will be installed instantly. You can start \
                 using it immediately on any form.",
            ),
            (
                "Is FillFlow free to use?",
                "Yes! FillFlow offers a free tier that includes up to 30 documents and all basic form-filling \
                 features. For unlimited documents and advanced features, check out our Premium plan at $20/month.",
            ),
            (
                "What browsers does FillFlow support?",
                "Currently, FillFlow is available as a Chrome extension. Support for Firefox, Edge, and Safari is \
                 coming soon.",
            ),
        ],
    },
    FaqCategory {
        title: "How It Works",
        entries: &[
            (
                "How does FillFlow know what information to fill in?",
                "FillFlow uses AI to understand form fields and match them with your stored information. You \
                 upload your documents once, and our matching system figures out which information goes where on \
                 any form.",
            ),
            (
                "Can FillFlow handle complex forms?",
                "Yes! FillFlow works with all types of forms including job applications, government forms, \
                 medical intake forms, financial applications, and more.",
            ),
            (
                "How fast does it work?",
                "FillFlow fills most forms in under 10 seconds. Complex multi-page forms may take a bit longer, \
                 but you'll still save significant time compared to manual entry.",
            ),
            (
                "Do I need to review the filled information?",
                "Yes, we always recommend reviewing before submitting. FillFlow is highly accurate, but you should \
                 verify that all information is correct for each specific form.",
            ),
        ],
    },
    FaqCategory {
        title: "Privacy & Security",
        entries: &[
            (
                "Is my data secure?",
                "Absolutely. Your data is encrypted both in transit and at rest using industry-standard \
                 encryption. We never share or sell your personal information. Visit our Security page for \
                 details.",
            ),
            (
                "Where is my data stored?",
                "Your documents are stored in the cloud with enterprise-grade encryption. You can delete your \
                 data at any time from your account settings.",
            ),
            (
                "Does FillFlow store my form submissions?",
                "No, we do not store the actual form submissions or the content you submit to third-party \
                 websites. We only store the documents and information you explicitly provide to us.",
            ),
            (
                "Can I use FillFlow for sensitive information?",
                "Yes, FillFlow uses bank-level encryption to protect your data. However, we recommend not storing \
                 highly sensitive information like full credit card numbers or passwords.",
            ),
        ],
    },
    FaqCategory {
        title: "Pricing & Plans",
        entries: &[
            (
                "What's included in the free plan?",
                "The free plan includes up to 30 documents, basic form filling, Chrome extension access, email \
                 support, and works on all websites.",
            ),
            (
                "Can I cancel my Premium subscription anytime?",
                "Yes, you can cancel anytime with no penalties. You'll continue to have access to Premium \
                 features until the end of your billing period.",
            ),
            (
                "Do you offer team or enterprise plans?",
                "Yes! We offer custom Enterprise plans with team management, SSO, dedicated support, and API \
                 access. Contact us at FillFlow@gmail.com or schedule a demo to learn more.",
            ),
        ],
    },
    FaqCategory {
        title: "Troubleshooting",
        entries: &[
            (
                "FillFlow isn't working on a specific website. What should I do?",
                "First, try refreshing the page. If that doesn't work, please email us at FillFlow@gmail.com with \
                 the website URL, and we'll investigate.",
            ),
            (
                "Can I have multiple profiles?",
                "Currently, each account supports one profile. If you need several, contact us about our \
                 Enterprise plan which supports team members with individual profiles.",
            ),
            (
                "I found a bug. How do I report it?",
                "Please email FillFlow@gmail.com with a description of the issue, the website where it occurred, \
                 and any screenshots if possible.",
            ),
        ],
    },
];

/// Position of one question: (category index, entry index).
pub type FaqKey = (usize, usize);

/// Accordion transition: clicking the open item closes it, any other opens it.
pub fn toggle_open(current: Option<FaqKey>, clicked: FaqKey) -> Option<FaqKey> {
    if current == Some(clicked) { None } else { Some(clicked) }
}

#[component]
pub fn FaqPage() -> impl IntoView {
    let open = RwSignal::new(None::<FaqKey>);

    let categories = FAQ
        .iter()
        .enumerate()
        .map(|(ci, category)| {
            let entries = category
                .entries
                .iter()
                .enumerate()
                .map(|(qi, (question, answer))| {
                    let key = (ci, qi);
                    let is_open = move || open.get() == Some(key);
                    view! {
                        <div class="accordion__item" class:accordion__item--open=is_open>
                            <button
                                class="accordion__question"
                                type="button"
                                aria-expanded=move || is_open().to_string()
                                on:click=move |_| open.update(|o| *o = toggle_open(*o, key))
                            >
                                {*question}
                            </button>
                            <Show when=is_open>
                                <p class="accordion__answer">{*answer}</p>
                            </Show>
                        </div>
                    }
                })
                .collect_view();
            view! {
                <div class="accordion">
                    <h2 class="accordion__category">{category.title}</h2>
                    {entries}
                </div>
            }
        })
        .collect_view();

    view! {
        <Title text="FAQ - FillFlow"/>
        <Section background=Background::WarmSand compact=true>
            <div class="hero hero--page">
                <h1 class="hero__title">"Frequently Asked Questions"</h1>
                <p class="hero__subtitle">
                    "Everything you need to know about FillFlow. Can't find your answer? Email us at "
                    <a href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a>
                </p>
            </div>
        </Section>
        <Section>{categories}</Section>
        <Section background=Background::LavenderMist>
            <div class="cta-band">
                <h2>"Still Have Questions?"</h2>
                <p>"We're here to help! Reach out to our support team and we'll get back to you within 24 hours."</p>
                <a class="button button--primary" href="/contact">"Contact Support"</a>
            </div>
        </Section>
    }
}
