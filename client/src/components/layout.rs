//! Site chrome: header navigation, footer link groups, and the page frame.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header reads the auth signal from context so the account link follows
//! the session; everything else here is static.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Public contact address shown in the footer and on content pages.
pub const CONTACT_EMAIL: &str = "FillFlow@gmail.com";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

const fn link(name: &'static str, href: &'static str) -> NavLink {
    NavLink { name, href }
}

pub const NAV_LINKS: &[NavLink] = &[
    link("Home", "/"),
    link("Pricing", "/pricing"),
    link("Blog", "/blog"),
    link("FAQ", "/faq"),
    link("Contact", "/contact"),
];

/// Footer column titles with their links.
pub const FOOTER_GROUPS: &[(&str, &[NavLink])] = &[
    (
        "Product",
        &[
            link("How It Works", "/#how-it-works"),
            link("For Individuals", "/#individuals"),
            link("For Teams", "/#enterprise"),
            link("Pricing", "/pricing"),
            link("Security", "/security"),
        ],
    ),
    (
        "Company",
        &[
            link("About Us", "/about"),
            link("Blog", "/blog"),
            link("Schedule Demo", "/schedule-demo"),
            link("Contact Us", "/contact"),
        ],
    ),
    (
        "Resources",
        &[link("FAQ & Help", "/faq"), link("Custom Solutions", "/custom-solutions")],
    ),
    (
        "Legal",
        &[
            link("Terms of Service", "/terms"),
            link("Privacy Policy", "/privacy"),
            link("Security Practices", "/security"),
        ],
    ),
];

/// Account link for the header: the dashboard once signed in, else login.
pub fn account_link(state: &AuthState) -> NavLink {
    if state.is_authenticated() { link("Dashboard", "/dashboard") } else { link("Log In", "/login") }
}

#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let menu_open = RwSignal::new(false);
    let account = move || account_link(&auth.get());

    let nav_items = NAV_LINKS
        .iter()
        .map(|l| {
            view! {
                <a class="site-header__link" href=l.href on:click=move |_| menu_open.set(false)>
                    {l.name}
                </a>
            }
        })
        .collect_view();

    view! {
        <header class="site-header">
            <nav class="site-header__nav" aria-label="Global">
                <a class="site-header__brand" href="/">
                    <img class="site-header__logo" src="/images/logo.svg" alt="FillFlow Logo"/>
                    <span>"FillFlow"</span>
                </a>
                <button
                    class="site-header__menu-toggle"
                    type="button"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    <span class="sr-only">"Open main menu"</span>
                    {move || if menu_open.get() { "\u{2715}" } else { "\u{2630}" }}
                </button>
                <div class="site-header__links" class:site-header__links--open=move || menu_open.get()>
                    {nav_items}
                    <div class="site-header__actions">
                        <a class="button button--text button--sm" href=move || account().href>
                            {move || account().name}
                        </a>
                        <a class="button button--primary button--sm" href="/coming-soon">"Try for Free"</a>
                    </div>
                </div>
            </nav>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let groups = FOOTER_GROUPS
        .iter()
        .map(|(title, links)| {
            let items = links
                .iter()
                .map(|l| view! { <li><a class="site-footer__link" href=l.href>{l.name}</a></li> })
                .collect_view();
            view! {
                <div class="site-footer__group">
                    <h3 class="site-footer__title">{*title}</h3>
                    <ul>{items}</ul>
                </div>
            }
        })
        .collect_view();

    view! {
        <footer class="site-footer">
            <div class="site-footer__grid">
                <div class="site-footer__about">
                    <span class="site-footer__brand">"FillFlow"</span>
                    <p>"Automatically fill forms using your existing data. Stop copy-pasting. Start saving time."</p>
                    <a class="site-footer__link" href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a>
                </div>
                {groups}
            </div>
            <p class="site-footer__legal">"\u{a9} 2025 FillFlow. All rights reserved."</p>
        </footer>
    }
}

/// Header, routed content, and footer.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="site">
            <Header/>
            <main class="site__main">{children()}</main>
            <Footer/>
        </div>
    }
}
