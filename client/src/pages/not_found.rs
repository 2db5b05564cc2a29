use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::section::Section;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Page Not Found - FillFlow"/>
        <Section>
            <div class="not-found">
                <h1 class="not-found__code">"404"</h1>
                <h2>"Page Not Found"</h2>
                <p>"The page you're looking for doesn't exist or has been moved."</p>
                <a class="button button--primary" href="/">"Return to Home"</a>
            </div>
        </Section>
    }
}
