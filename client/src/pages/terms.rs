use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::legal_document::{Block, Clause, LegalDocument};

const CLAUSES: &[Clause] = &[
    Clause {
        heading: "1. Acceptance of Terms",
        blocks: &[Block::Para(
            "By creating an account or using FillFlow, you agree to these Terms of Service and our Privacy \
             Policy. If you do not agree, you may not use the service.",
        )],
    },
    Clause {
        heading: "2. Description of Service",
        blocks: &[
            Block::Para(
                "FillFlow is a browser extension and web service that uses AI to fill online forms using \
                 information from documents you upload. The service includes:",
            ),
            Block::List(&[
                "Document upload and secure storage",
                "AI-powered extraction of information from documents",
                "Automatic form filling based on extracted data",
                "Confidence scoring and review interfaces",
            ]),
            Block::Para("We reserve the right to modify, suspend, or discontinue any aspect of the service at any time."),
        ],
    },
    Clause {
        heading: "3. Account Registration and Eligibility",
        blocks: &[
            Block::Term("Age Requirement", "You must be at least 18 years old to use FillFlow."),
            Block::Term(
                "Account Information",
                "You agree to provide accurate, current, and complete information during registration.",
            ),
            Block::Term(
                "Account Security",
                "You are responsible for maintaining the confidentiality of your password and account.",
            ),
            Block::Term("One Account Per User", "You may not create multiple accounts or share accounts with others."),
        ],
    },
    Clause {
        heading: "4. Acceptable Use",
        blocks: &[
            Block::Para("You agree NOT to:"),
            Block::List(&[
                "Use the service for any illegal purpose or to violate any laws",
                "Upload documents you don't own or have permission to use",
                "Fill forms fraudulently or with false information",
                "Attempt to bypass security measures or access other users' data",
                "Reverse engineer, decompile, or extract the source code of our software",
                "Use the service to send spam or engage in phishing",
                "Overload our systems through excessive automated requests",
                "Resell or redistribute the service without permission",
            ]),
            Block::Para("Violation of these terms may result in immediate account termination."),
        ],
    },
    Clause {
        heading: "5. Your Content and Data",
        blocks: &[
            Block::Term("Ownership", "You retain all ownership rights to the documents and data you upload."),
            Block::Term(
                "License to Use",
                "By uploading content, you grant us a limited license to store and process your documents solely \
                 to provide the FillFlow service to you.",
            ),
            Block::Term(
                "Responsibility",
                "You are solely responsible for the content you upload and the forms you fill.",
            ),
        ],
    },
    Clause {
        heading: "6. Payment and Subscriptions",
        blocks: &[
            Block::Term("Free Plan", "No payment information is required for the free plan."),
            Block::Term(
                "Paid Plans",
                "Premium and Enterprise plans require payment and are charged on a recurring basis.",
            ),
            Block::Term(
                "Cancellation",
                "You may cancel at any time and retain access until the end of your billing period.",
            ),
            Block::Term(
                "Refunds",
                "We offer a 14-day money-back guarantee for Premium plans. Contact us at FillFlow@gmail.com.",
            ),
        ],
    },
    Clause {
        heading: "7. Disclaimers and Limitations",
        blocks: &[
            Block::Term("No Warranty", "FillFlow is provided \"as is\" without warranties of any kind."),
            Block::Term(
                "Accuracy",
                "AI-based form filling may contain errors. You are responsible for reviewing all filled \
                 information before submitting forms.",
            ),
            Block::Term(
                "Third-Party Sites",
                "We are not responsible for the content or practices of third-party websites where you use \
                 FillFlow.",
            ),
        ],
    },
    Clause {
        heading: "8. Termination",
        blocks: &[
            Block::Term("By You", "You may terminate your account at any time."),
            Block::Term("By Us", "We may suspend or terminate accounts that violate these terms."),
        ],
    },
    Clause {
        heading: "9. Changes to Terms",
        blocks: &[Block::Para(
            "We may modify these Terms of Service at any time. We'll notify you of material changes via email \
             and by updating the \"Last Updated\" date.",
        )],
    },
    Clause {
        heading: "10. Contact Information",
        blocks: &[
            Block::Term("Email", "FillFlow@gmail.com"),
            Block::Term("Response Time", "We aim to respond to inquiries within 48 hours."),
        ],
    },
];

#[component]
pub fn TermsPage() -> impl IntoView {
    view! {
        <Title text="Terms of Service - FillFlow"/>
        <LegalDocument
            title="Terms of Service"
            updated="December 14, 2024"
            intro="Please read these Terms of Service carefully before using FillFlow. By accessing or using our service, you agree to be bound by these terms."
            clauses=CLAUSES
        />
    }
}
