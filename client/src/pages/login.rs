//! Login / registration page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submits through the session store and, once the shared auth signal reports
//! an authenticated session, replaces the route with the destination carried
//! in `?redirect=` (see `util::auth`).

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::section::{Background, Card, Section};
use crate::state::auth::AuthState;
use crate::util::auth::post_login_destination;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginMode {
    #[default]
    Login,
    Register,
}

impl LoginMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Self::Login => "Welcome Back",
            Self::Register => "Create Account",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Self::Login => "Log in to access your FillFlow dashboard",
            Self::Register => "Start automating your forms today",
        }
    }

    pub fn submit_label(self, busy: bool) -> &'static str {
        match (busy, self) {
            (true, _) => "Please wait...",
            (false, Self::Login) => "Log In",
            (false, Self::Register) => "Create Account",
        }
    }

    pub fn password_autocomplete(self) -> &'static str {
        match self {
            Self::Login => "current-password",
            Self::Register => "new-password",
        }
    }

    /// Prompt and link text of the mode switch under the form.
    pub fn switch_prompt(self) -> (&'static str, &'static str) {
        match self {
            Self::Login => ("Don't have an account? ", "Sign up"),
            Self::Register => ("Already have an account? ", "Log in"),
        }
    }
}

/// Trimmed email plus password, or the message to show.
pub fn validate_credentials(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();

    let mode = RwSignal::new(LoginMode::Login);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let session = crate::state::session::use_browser_session();

    Effect::new(move || {
        if auth.with(AuthState::is_authenticated) {
            let search = location.search.get_untracked();
            let destination = post_login_destination(Some(&search));
            navigate(&destination, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, password_value) = match validate_credentials(&email.get_untracked(), &password.get_untracked())
        {
            Ok(values) => values,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        error.set(String::new());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let current_mode = mode.get_untracked();
            let name = full_name.get_untracked();
            let session = session.get_value();
            leptos::task::spawn_local(async move {
                let result = match current_mode {
                    LoginMode::Login => session.login(&email_value, &password_value).await,
                    LoginMode::Register => session.register(&email_value, &password_value, Some(&name)).await,
                };
                if let Err(e) = result {
                    error.set(e.to_string());
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (email_value, password_value);
    };

    let on_toggle = move |_| {
        mode.update(|m| *m = m.toggled());
        error.set(String::new());
        email.set(String::new());
        password.set(String::new());
        full_name.set(String::new());
    };

    let registering = move || mode.get() == LoginMode::Register;

    view! {
        <Title text="Log In - FillFlow"/>
        <Section background=Background::WarmSand>
            <div class="login">
                <h1 class="login__heading">{move || mode.get().heading()}</h1>
                <p class="login__subtitle">{move || mode.get().subtitle()}</p>
                <Card>
                    <Show when=move || !error.get().is_empty()>
                        <div class="alert alert--error" role="alert">{move || error.get()}</div>
                    </Show>
                    <form class="login__form" on:submit=on_submit>
                        <Show when=registering>
                            <label class="lead-form__label" for="fullName">"Full Name (Optional)"</label>
                            <input
                                class="input"
                                id="fullName"
                                name="fullName"
                                type="text"
                                placeholder="John Doe"
                                prop:value=move || full_name.get()
                                on:input=move |ev| full_name.set(event_target_value(&ev))
                            />
                        </Show>
                        <label class="lead-form__label" for="email">"Email Address"</label>
                        <input
                            class="input"
                            id="email"
                            name="email"
                            type="email"
                            autocomplete="email"
                            required
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <label class="lead-form__label" for="password">"Password"</label>
                        <input
                            class="input"
                            id="password"
                            name="password"
                            type="password"
                            autocomplete=move || mode.get().password_autocomplete()
                            required
                            placeholder="\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <Show when=registering>
                            <p class="login__hint">"Password must be at least 8 characters long"</p>
                        </Show>
                        <button
                            class="button button--primary button--block"
                            type="submit"
                            disabled=move || busy.get()
                        >
                            {move || mode.get().submit_label(busy.get())}
                        </button>
                    </form>
                    <p class="login__switch">
                        {move || mode.get().switch_prompt().0}
                        <button class="button button--text" type="button" on:click=on_toggle>
                            {move || mode.get().switch_prompt().1}
                        </button>
                    </p>
                    <Show when=registering>
                        <ul class="checklist login__perks">
                            <li>"Free tier includes 30 documents and unlimited forms"</li>
                            <li>"Your data is encrypted and stored securely"</li>
                            <li>"Use the same account across extension and dashboard"</li>
                        </ul>
                    </Show>
                </Card>
                <p class="login__legal">
                    "By continuing, you agree to our "
                    <a href="/terms">"Terms of Service"</a>
                    " and "
                    <a href="/privacy">"Privacy Policy"</a>
                </p>
            </div>
        </Section>
    }
}
