//! Single blog article rendered from a sanitized HTML fragment.
//!
//! SYSTEM CONTEXT
//! ==============
//! The slug comes from the route. The body is fetched from `/posts/`, passed
//! through `util::sanitize`, injected as markup, and then every `<pre>` gets a
//! copy button once the markup is in the DOM.

#[cfg(test)]
#[path = "blog_post_test.rs"]
mod blog_post_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::components::section::{Background, Section};
use crate::net::types::BlogPost;
use crate::state::blog::PostView;
use crate::util::format::format_post_date;

/// A load started for `requested` may only publish while the route still shows it.
pub fn is_current_load(requested: &str, current: &str) -> bool {
    requested == current
}

#[component]
pub fn BlogPostPage() -> impl IntoView {
    let params = use_params_map();
    let view_state = RwSignal::new(PostView::Loading);
    let slug = move || params.read().get("slug").unwrap_or_default();

    Effect::new(move || {
        let slug = slug();
        view_state.set(PostView::Loading);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let loaded = crate::net::blog::BlogLoader::from_site().load_post(&slug).await;
            if is_current_load(&slug, &params.read_untracked().get("slug").unwrap_or_default()) {
                view_state.set(loaded);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = slug;
    });

    let body = move || match view_state.get() {
        PostView::Loading => view! {
            <Section background=Background::White>
                <p class="blog__status">"Loading..."</p>
            </Section>
        }
        .into_any(),
        PostView::NotFound(message) => view! {
            <Section background=Background::White>
                <div class="blog__missing">
                    <p class="text--error">{message}</p>
                    <a class="button button--primary" href="/blog">"Back to Blog"</a>
                </div>
            </Section>
        }
        .into_any(),
        PostView::Ready { post, html } => view! { <Article post=*post html=html/> }.into_any(),
    };

    view! { {body} }
}

#[component]
fn Article(post: BlogPost, html: String) -> impl IntoView {
    let content_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let Some(container) = content_ref.get() else {
            return;
        };
        // Run after the injected markup has been attached.
        gloo_timers::callback::Timeout::new(0, move || {
            crate::util::code_copy::enhance_code_blocks(&container);
        })
        .forget();
    });

    let badge = format!("badge badge--{}", post.audience.label().to_ascii_lowercase());
    let tags = post.tags.into_iter().map(|tag| view! { <span class="tag">{tag}</span> }).collect_view();

    view! {
        <Title text=format!("{} - FillFlow Blog", post.title)/>
        <Section background=Background::WarmSand compact=true>
            <a class="back-link" href="/blog">"\u{2190} Back to Blog"</a>
        </Section>
        <Section background=Background::White>
            <article class="article">
                <header class="article__header">
                    <div class="article__meta">
                        <span class=badge>{post.audience.label()}</span>
                        <span>{post.reading_time}</span>
                        <span>"\u{2022}"</span>
                        <span>{format_post_date(&post.date)}</span>
                    </div>
                    <h1 class="article__title">{post.title}</h1>
                    <p class="article__excerpt">{post.excerpt}</p>
                    <div class="article__tags">{tags}</div>
                </header>
                <div class="prose" node_ref=content_ref inner_html=html></div>
            </article>
        </Section>
    }
}
