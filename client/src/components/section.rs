//! Page section and card wrappers shared by every marketing page.

use leptos::prelude::*;

/// Background band of a [`Section`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Background {
    #[default]
    White,
    WarmSand,
    LavenderMist,
    TealSoftwave,
}

impl Background {
    pub fn class(self) -> &'static str {
        match self {
            Self::White => "section--white",
            Self::WarmSand => "section--warm-sand",
            Self::LavenderMist => "section--lavender-mist",
            Self::TealSoftwave => "section--teal-softwave",
        }
    }
}

/// Full-width band with a centered content column.
#[component]
pub fn Section(
    #[prop(optional)] background: Background,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] compact: bool,
    children: Children,
) -> impl IntoView {
    let class = format!("section {}", background.class());
    view! {
        <section id=id class=class class:section--compact=compact>
            <div class="section__container">{children()}</div>
        </section>
    }
}

#[component]
pub fn Card(#[prop(optional)] highlighted: bool, children: Children) -> impl IntoView {
    view! {
        <div class="card" class:card--highlighted=highlighted>
            {children()}
        </div>
    }
}

/// Hero band used at the top of content pages.
#[component]
pub fn PageHero(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    #[prop(optional)] background: Option<Background>,
) -> impl IntoView {
    view! {
        <Section background=background.unwrap_or(Background::WarmSand) compact=true>
            <div class="hero hero--page">
                <h1 class="hero__title">{title}</h1>
                <p class="hero__subtitle">{subtitle}</p>
            </div>
        </Section>
    }
}

/// Grid of title/description cards.
#[component]
pub fn FeatureGrid(items: &'static [(&'static str, &'static str)]) -> impl IntoView {
    let cards = items
        .iter()
        .map(|(title, description)| {
            view! {
                <div class="feature">
                    <h3 class="feature__title">{*title}</h3>
                    {(!description.is_empty()).then(|| view! { <p class="feature__text">{*description}</p> })}
                </div>
            }
        })
        .collect_view();
    view! { <div class="feature-grid">{cards}</div> }
}
