use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::legal_document::{Block, Clause, LegalDocument};

const CLAUSES: &[Clause] = &[
    Clause {
        heading: "Information We Collect",
        blocks: &[
            Block::Term(
                "Account Information",
                "When you create an account, we collect your email address and password (encrypted). This is \
                 required to provide access to your account and to communicate with you about the service.",
            ),
            Block::Term(
                "Uploaded Documents",
                "We store the documents you upload to use for form filling. These documents are encrypted and \
                 accessible only to you.",
            ),
            Block::Term(
                "Usage Information",
                "We collect basic usage data such as which features you use, forms filled, and error logs to \
                 improve our service. This data is anonymized and aggregated.",
            ),
            Block::Term(
                "Technical Information",
                "We automatically collect browser type, IP address, device information, and cookies to ensure the \
                 service functions properly and to detect security issues.",
            ),
        ],
    },
    Clause {
        heading: "How We Use Your Information",
        blocks: &[Block::List(&[
            "To provide and maintain the FillFlow service",
            "To fill forms with data from your uploaded documents when you request",
            "To communicate with you about your account, updates, and support",
            "To improve our service through aggregated, anonymized usage analytics",
            "To detect and prevent fraud, security incidents, and technical issues",
            "To comply with legal obligations and enforce our Terms of Service",
        ])],
    },
    Clause {
        heading: "How We Protect Your Information",
        blocks: &[
            Block::Term("Encryption", "All data is encrypted in transit (TLS 1.3) and at rest (AES-256)."),
            Block::Term("Access Controls", "Only you can access your documents. Our team cannot view your uploaded files."),
            Block::Term(
                "Secure Infrastructure",
                "We use enterprise-grade cloud infrastructure with regular security audits.",
            ),
            Block::Term("Data Minimization", "We collect only what's necessary to provide the service."),
        ],
    },
    Clause {
        heading: "Information Sharing and Disclosure",
        blocks: &[
            Block::Para("We do NOT sell your data. Ever."),
            Block::Para("We may share your information only in these limited circumstances:"),
            Block::Term(
                "Service Providers",
                "Trusted third-party services (hosting, email, payment processing) who are contractually bound to \
                 protect your data.",
            ),
            Block::Term("Legal Requirements", "When required by law, court order, or to protect our rights and safety."),
            Block::Term(
                "Business Transfers",
                "In the event of a merger or acquisition, your data may be transferred. You'll be notified and \
                 have the option to delete your account.",
            ),
            Block::Term(
                "With Your Consent",
                "We'll ask for explicit permission before sharing your data for any other reason.",
            ),
        ],
    },
    Clause {
        heading: "Your Privacy Rights",
        blocks: &[
            Block::Term("Access", "Request a copy of all data we have about you"),
            Block::Term("Correction", "Update or correct inaccurate information"),
            Block::Term("Deletion", "Delete your account and all associated data at any time"),
            Block::Term("Export", "Download your documents and data in a portable format"),
            Block::Term("Opt-Out", "Unsubscribe from marketing emails (account-related emails are required)"),
            Block::Term("Object", "Object to certain data processing activities"),
            Block::Para("To exercise these rights, email us at FillFlow@gmail.com."),
        ],
    },
    Clause {
        heading: "Data Retention",
        blocks: &[Block::Para(
            "We retain your account data and uploaded documents as long as your account is active. When you \
             delete your account, all your data is permanently removed from our systems within 30 days. Backup \
             copies are deleted within 90 days.",
        )],
    },
    Clause {
        heading: "Cookies and Tracking",
        blocks: &[
            Block::Para("We use cookies to maintain your session, remember your preferences, and analyze site usage."),
            Block::Term("Essential Cookies", "Required for the service to function (login, security)"),
            Block::Term(
                "Analytics Cookies",
                "Help us understand how users interact with our service (anonymized)",
            ),
        ],
    },
    Clause {
        heading: "Children's Privacy",
        blocks: &[Block::Para(
            "FillFlow is not intended for users under 18 years old. We do not knowingly collect data from \
             children.",
        )],
    },
    Clause {
        heading: "Changes to This Policy",
        blocks: &[Block::Para(
            "We may update this Privacy Policy from time to time. We'll notify you of material changes via email \
             and by updating the \"Last Updated\" date at the top of this page.",
        )],
    },
    Clause {
        heading: "Contact Us",
        blocks: &[
            Block::Term("Email", "FillFlow@gmail.com"),
            Block::Term("Response Time", "We aim to respond to privacy inquiries within 48 hours."),
        ],
    },
];

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <Title text="Privacy Policy - FillFlow"/>
        <LegalDocument
            title="Privacy Policy"
            updated="December 14, 2024"
            intro="FillFlow is committed to protecting your privacy. This policy explains how we collect, use, and safeguard your personal information."
            clauses=CLAUSES
        />
    }
}
