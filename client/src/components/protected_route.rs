//! Wrapper that only renders its children for an authenticated session.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::AuthState;
use crate::util::auth::{GuardDecision, guard_decision};

/// Shows "Loading..." while the session restores, the children once signed
/// in, and otherwise replaces the route with `/login?redirect=<path>`.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| {
        let path = location.pathname.get();
        let search = location.search.get();
        let search = search.trim_start_matches('?');
        let requested = if search.is_empty() { path } else { format!("{path}?{search}") };
        auth.with(|state| guard_decision(state, &requested))
    });

    Effect::new(move || {
        if let GuardDecision::Redirect(target) = decision.get() {
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || match decision.get() {
        GuardDecision::Allow => children().into_any(),
        GuardDecision::Pending | GuardDecision::Redirect(_) => {
            view! { <div class="route-pending">"Loading..."</div> }.into_any()
        }
    }
}
