//! Lead-capture form definitions and their ephemeral state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Contact, demo-request, and custom-solution forms never leave the browser:
//! submitting logs the collected fields and flips the page into its thank-you
//! view. Each form is described by a static [`FormSpec`] so one component can
//! render all three.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use std::collections::BTreeMap;

/// One `<option>` of a select field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn opt(value: &'static str, label: &'static str) -> SelectOption {
    SelectOption { value, label }
}

/// Input widget of a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    TextArea { rows: u32 },
    /// Select with a leading empty prompt option.
    Select { prompt: &'static str, options: &'static [SelectOption] },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name; also the element id and the key in [`FormState`].
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: &'static str,
}

const fn field(name: &'static str, label: &'static str, kind: FieldKind, required: bool) -> FieldSpec {
    FieldSpec { name, label, kind, required, placeholder: "" }
}

impl FieldSpec {
    const fn hint(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Label text with the required marker appended.
    pub fn display_label(&self) -> String {
        if self.required { format!("{} *", self.label) } else { self.label.to_owned() }
    }
}

/// Static description of a lead form and its thank-you view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormSpec {
    pub id: &'static str,
    pub fields: &'static [FieldSpec],
    pub submit_label: &'static str,
    /// Thank-you text before and after the submitted email address.
    pub thanks_lead: &'static str,
    pub thanks_tail: &'static str,
}

impl FormSpec {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

// =============================================================================
// FORM DEFINITIONS
// =============================================================================

pub const INQUIRY_TYPES: &[SelectOption] = &[
    opt("support", "Technical Support"),
    opt("billing", "Billing Question"),
    opt("feature", "Feature Request"),
    opt("partnership", "Partnership Inquiry"),
    opt("press", "Press & Media"),
    opt("feedback", "General Feedback"),
    opt("other", "Other"),
];

pub const TEAM_SIZES: &[SelectOption] = &[
    opt("1-10", "1-10 employees"),
    opt("11-50", "11-50 employees"),
    opt("51-200", "51-200 employees"),
    opt("201-500", "201-500 employees"),
    opt("501+", "501+ employees"),
];

pub const USE_CASES: &[SelectOption] = &[
    opt("hr-onboarding", "Employee Onboarding"),
    opt("expense-reports", "Expense Reports"),
    opt("vendor-management", "Vendor Management"),
    opt("compliance-forms", "Compliance Forms"),
    opt("data-entry", "General Data Entry"),
    opt("other", "Other"),
];

pub const INDUSTRIES: &[SelectOption] = &[
    opt("healthcare", "Healthcare"),
    opt("finance", "Finance"),
    opt("hr", "HR & Recruiting"),
    opt("legal", "Legal"),
    opt("retail", "Retail"),
    opt("manufacturing", "Manufacturing"),
    opt("government", "Government"),
    opt("other", "Other"),
];

pub const TIMELINES: &[SelectOption] = &[
    opt("urgent", "Urgent (1-2 weeks)"),
    opt("soon", "Soon (1 month)"),
    opt("planning", "Planning (2-3 months)"),
    opt("exploring", "Exploring options"),
];

pub const CONTACT_FORM: FormSpec = FormSpec {
    id: "contact",
    fields: &[
        field("name", "Full Name", FieldKind::Text, true),
        field("email", "Email Address", FieldKind::Email, true),
        field(
            "inquiryType",
            "Inquiry Type",
            FieldKind::Select { prompt: "Select inquiry type", options: INQUIRY_TYPES },
            true,
        ),
        field("subject", "Subject", FieldKind::Text, true).hint("Brief description of your inquiry"),
        field("message", "Message", FieldKind::TextArea { rows: 6 }, true).hint("Tell us more about your inquiry..."),
    ],
    submit_label: "Send Message",
    thanks_lead: "We've received your message and will get back to you at",
    thanks_tail: "within 24 hours.",
};

pub const DEMO_FORM: FormSpec = FormSpec {
    id: "schedule-demo",
    fields: &[
        field("name", "Full Name", FieldKind::Text, true).hint("John Smith"),
        field("email", "Work Email", FieldKind::Email, true).hint("john@company.com"),
        field("company", "Company Name", FieldKind::Text, true).hint("Acme Corp"),
        field("role", "Your Role", FieldKind::Text, true).hint("HR Manager, Finance Director, etc."),
        field("teamSize", "Team Size", FieldKind::Select { prompt: "Select team size", options: TEAM_SIZES }, true),
        field(
            "useCase",
            "Primary Use Case",
            FieldKind::Select { prompt: "Select a use case", options: USE_CASES },
            true,
        ),
        field("message", "Additional Information (Optional)", FieldKind::TextArea { rows: 4 }, false)
            .hint("Tell us more about your needs, specific forms you work with, or questions you have..."),
    ],
    submit_label: "Request Demo",
    thanks_lead: "We've received your demo request and will contact you at",
    thanks_tail: "within 24 hours to schedule a time.",
};

pub const CUSTOM_SOLUTION_FORM: FormSpec = FormSpec {
    id: "custom-solutions",
    fields: &[
        field("name", "Full Name", FieldKind::Text, true),
        field("email", "Work Email", FieldKind::Email, true),
        field("company", "Company", FieldKind::Text, true),
        field("role", "Your Role", FieldKind::Text, true),
        field("industry", "Industry", FieldKind::Select { prompt: "Select your industry", options: INDUSTRIES }, true),
        field("challenge", "What's Your Automation Challenge?", FieldKind::TextArea { rows: 4 }, true)
            .hint("Describe the forms, documents, and workflow you need to automate..."),
        field("currentProcess", "Current Process", FieldKind::TextArea { rows: 3 }, false)
            .hint("How do you currently handle this? How long does it take?"),
        field("volume", "Volume", FieldKind::Text, false).hint("e.g., 100 forms per week"),
        field("timeline", "Timeline", FieldKind::Select { prompt: "Select timeline", options: TIMELINES }, false),
        field("systems", "Systems/Tools Involved", FieldKind::Text, false).hint("e.g., Salesforce, SAP, custom database"),
    ],
    submit_label: "Submit Request",
    thanks_lead: "We've received your custom solution request and will contact you at",
    thanks_tail: "within 24 hours to discuss your project.",
};

// =============================================================================
// FORM STATE
// =============================================================================

/// Field values of one form plus whether it has been submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub values: BTreeMap<String, String>,
    pub submitted: bool,
}

impl FormState {
    /// Empty values for every field of `spec`.
    pub fn new(spec: &FormSpec) -> Self {
        let values = spec.fields.iter().map(|f| (f.name.to_owned(), String::new())).collect();
        Self { values, submitted: false }
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map_or("", String::as_str)
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_owned(), value.into());
    }

    /// Names of required fields that are still blank.
    pub fn missing_required(&self, spec: &FormSpec) -> Vec<&'static str> {
        spec.fields
            .iter()
            .filter(|f| f.required && self.value(f.name).trim().is_empty())
            .map(|f| f.name)
            .collect()
    }

    /// Log the collected fields and switch to the thank-you view.
    ///
    /// Returns `false` (and stays editable) while required fields are blank.
    pub fn submit(&mut self, spec: &FormSpec) -> bool {
        let missing = self.missing_required(spec);
        if !missing.is_empty() {
            log::warn!("{} form missing required fields: {missing:?}", spec.id);
            return false;
        }
        log::info!("{} form submission: {:?}", spec.id, self.values);
        self.submitted = true;
        true
    }
}
