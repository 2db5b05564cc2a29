//! Authenticated dashboard placeholder.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted behind `ProtectedRoute`, so the auth signal always carries a user
//! here. Shows account details, upcoming features, and sign-out actions.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::section::{Background, Card, Section};
use crate::net::types::User;
use crate::state::auth::AuthState;

const UPCOMING: &[(&str, &str)] = &[
    ("Document Management", "Upload, view, and manage your documents stored in AWS S3"),
    ("Usage Analytics", "Track your form fills, document usage, and storage metrics"),
    ("Account Settings", "Manage your subscription, preferences, and security settings"),
];

const NEXT_STEPS: &[(&str, &str)] = &[
    ("Install the Chrome Extension", "Download from the Chrome Web Store to start auto-filling forms"),
    ("Upload Your Documents", "Use the extension or dashboard to upload PDFs, resumes, and other documents"),
    ("Start Filling Forms", "Navigate to any web form and click the FillFlow extension to auto-fill"),
];

pub fn welcome_heading(state: &AuthState) -> String {
    match state.user.as_ref().and_then(User::display_name) {
        Some(name) => format!("Welcome back, {name}!"),
        None => "Welcome back!".to_owned(),
    }
}

/// Label/value pairs for the account card; storage fields only when set.
pub fn account_rows(user: &User) -> Vec<(&'static str, String)> {
    let mut rows = vec![("Email", user.email.clone()), ("User ID", user.id.clone())];
    if let Some(prefix) = user.s3_bucket_prefix.as_deref().filter(|p| !p.is_empty()) {
        rows.push(("S3 Prefix", prefix.to_owned()));
    }
    if let Some(ns) = user.pinecone_namespace.as_deref().filter(|n| !n.is_empty()) {
        rows.push(("Pinecone Namespace", ns.to_owned()));
    }
    rows
}

#[derive(Clone, Copy)]
enum SignOut {
    ThisDevice,
    Everywhere,
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let signing_out = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let session = crate::state::session::use_browser_session();

    let sign_out = move |scope: SignOut| {
        if signing_out.get_untracked() {
            return;
        }
        signing_out.set(true);
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let session = session.get_value();
            leptos::task::spawn_local(async move {
                match scope {
                    SignOut::ThisDevice => session.logout().await,
                    SignOut::Everywhere => session.logout_all().await,
                }
                signing_out.set(false);
                navigate("/", NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = scope;
            navigate("/", NavigateOptions::default());
        }
    };
    let sign_out_here = sign_out.clone();

    let rows = move || {
        auth.with(|s| s.user.as_ref().map(account_rows).unwrap_or_default())
            .into_iter()
            .map(|(label, value)| {
                view! {
                    <div class="account__row">
                        <span class="account__label">{label}":"</span>
                        <span class="account__value">{value}</span>
                    </div>
                }
            })
            .collect_view()
    };

    let upcoming = UPCOMING
        .iter()
        .map(|(title, text)| {
            view! {
                <Card>
                    <div class="upcoming">
                        <h3 class="upcoming__title">{*title}</h3>
                        <p class="upcoming__text">{*text}</p>
                        <span class="badge badge--amber">"Coming Soon"</span>
                    </div>
                </Card>
            }
        })
        .collect_view();

    let steps = NEXT_STEPS
        .iter()
        .enumerate()
        .map(|(i, (title, text))| {
            view! {
                <li class="steps__item">
                    <span class="steps__number">{format!("{}.", i + 1)}</span>
                    <div>
                        <p class="steps__title">{*title}</p>
                        <p class="steps__text">{*text}</p>
                    </div>
                </li>
            }
        })
        .collect_view();

    view! {
        <Title text="Dashboard - FillFlow"/>
        <Section background=Background::White>
            <div class="dashboard">
                <header class="dashboard__header">
                    <div>
                        <h1 class="dashboard__title">{move || auth.with(welcome_heading)}</h1>
                        <p class="dashboard__subtitle">"Your FillFlow dashboard is coming soon"</p>
                    </div>
                    <div class="dashboard__actions">
                        <button
                            class="button button--secondary"
                            disabled=move || signing_out.get()
                            on:click=move |_| sign_out_here(SignOut::ThisDevice)
                        >
                            "Log Out"
                        </button>
                        <button
                            class="button button--text"
                            disabled=move || signing_out.get()
                            on:click=move |_| sign_out(SignOut::Everywhere)
                        >
                            "Log Out All Devices"
                        </button>
                    </div>
                </header>

                <div class="card card--lavender account">
                    <h2 class="account__title">"Account Information"</h2>
                    <div class="account__grid">{rows}</div>
                </div>

                <div class="grid grid--three">{upcoming}</div>

                <div class="card card--warm-sand steps">
                    <h2 class="steps__heading">"Get Started with FillFlow"</h2>
                    <ol class="steps__list">{steps}</ol>
                    <a class="button button--primary" href="/faq">"View FAQ"</a>
                </div>
            </div>
        </Section>
    }
}
