//! Blog index with an audience filter.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_query_map;

use crate::components::layout::CONTACT_EMAIL;
use crate::components::section::{Background, Card, PageHero, Section};
use crate::net::types::BlogPost;
use crate::state::blog::{AudienceFilter, filter_by_audience};
use crate::util::format::format_post_date;

#[component]
pub fn BlogPage() -> impl IntoView {
    let query = use_query_map();
    let initial = query
        .with_untracked(|q| q.get("audience"))
        .and_then(|raw| AudienceFilter::parse(&raw))
        .unwrap_or_default();
    let filter = RwSignal::new(initial);
    // None until the index request settles.
    let posts = RwSignal::new(None::<Vec<BlogPost>>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let loaded = crate::net::blog::BlogLoader::from_site().list_posts().await;
        posts.set(Some(loaded));
    });

    let filter_buttons = AudienceFilter::CHOICES
        .into_iter()
        .map(|choice| {
            view! {
                <button
                    class="filter__button"
                    class:filter__button--active=move || filter.get() == choice
                    type="button"
                    on:click=move |_| filter.set(choice)
                >
                    {choice.label()}
                </button>
            }
        })
        .collect_view();

    let listing = move || match posts.get() {
        None => view! { <p class="blog__status">"Loading..."</p> }.into_any(),
        Some(all) if all.is_empty() => view! { <EmptyBlog/> }.into_any(),
        Some(all) => {
            let visible = filter_by_audience(&all, filter.get());
            if visible.is_empty() {
                return view! { <p class="blog__status">"No posts for this audience yet."</p> }.into_any();
            }
            let cards = visible.into_iter().map(|post| view! { <PostCard post=post/> }).collect_view();
            view! { <div class="blog__grid">{cards}</div> }.into_any()
        }
    };

    view! {
        <Title text="Blog - FillFlow"/>
        <PageHero
            title="FillFlow Blog"
            subtitle="Insights on automation, productivity, and the future of form filling."
        />
        <Section background=Background::White>
            <div class="filter" role="group" aria-label="Filter by audience">{filter_buttons}</div>
            {listing}
        </Section>
        <Section background=Background::LavenderMist>
            <div class="cta">
                <h2 class="cta__title">"Get Notified"</h2>
                <p class="cta__text">
                    "Want to know when we publish new articles? Drop us a line at "
                    <a class="link--strong" href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a>
                </p>
            </div>
        </Section>
    }
}

#[component]
fn PostCard(post: BlogPost) -> impl IntoView {
    let href = format!("/blog/{}", post.slug);
    let badge = format!("badge badge--{}", post.audience.label().to_ascii_lowercase());
    view! {
        <a class="post-card" href=href>
            <div class="post-card__meta">
                <span class=badge>{post.audience.label()}</span>
                <span>{post.reading_time}</span>
            </div>
            <h2 class="post-card__title">{post.title}</h2>
            <p class="post-card__excerpt">{post.excerpt}</p>
            <span class="post-card__date">{format_post_date(&post.date)}</span>
        </a>
    }
}

#[component]
fn EmptyBlog() -> impl IntoView {
    view! {
        <Card>
            <div class="empty-state">
                <h2 class="empty-state__title">"Articles Coming Soon"</h2>
                <p class="empty-state__text">
                    "We're working on helpful content about form automation, productivity tips, and how to make the most of FillFlow. Check back soon for our first posts!"
                </p>
                <span class="empty-state__note">"New articles publishing soon"</span>
            </div>
        </Card>
    }
}
