//! Email capture form posting to the waitlist endpoint.

use leptos::prelude::*;

use crate::state::waitlist::{WaitlistState, WaitlistStatus};

#[component]
pub fn WaitlistForm() -> impl IntoView {
    let state = RwSignal::new(WaitlistState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if state.with_untracked(WaitlistState::locked) {
            return;
        }
        let mut email = None;
        state.update(|s| email = s.begin());
        let Some(email) = email else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let url = crate::config::waitlist_url();
            let outcome = crate::net::api::submit_waitlist(&url, &email).await;
            state.update(|s| s.finish(outcome));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = email;
    };

    let message_class = move || match state.with(|s| s.status) {
        WaitlistStatus::Success => "waitlist__message waitlist__message--success",
        WaitlistStatus::Error => "waitlist__message waitlist__message--error",
        WaitlistStatus::Idle | WaitlistStatus::Loading => "waitlist__message",
    };

    view! {
        <div class="waitlist">
            <form class="waitlist__form" on:submit=on_submit>
                <div class="waitlist__row">
                    <input
                        class="input waitlist__input"
                        type="email"
                        placeholder="Enter your email"
                        required
                        prop:value=move || state.with(|s| s.email.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.email = value);
                        }
                        disabled=move || state.with(WaitlistState::locked)
                    />
                    <button
                        class="button button--primary"
                        type="submit"
                        disabled=move || state.with(WaitlistState::locked)
                    >
                        {move || state.with(WaitlistState::button_label)}
                    </button>
                </div>
                <Show when=move || state.with(|s| !s.message.is_empty())>
                    <div class=message_class role="status">
                        {move || state.with(|s| s.message.clone())}
                    </div>
                </Show>
            </form>
            <Show when=move || state.with(|s| s.status != WaitlistStatus::Success)>
                <p class="waitlist__note">"We'll notify you when we launch. No spam, ever."</p>
            </Show>
        </div>
    }
}
