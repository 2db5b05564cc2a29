//! Renderer for the long-form legal pages (privacy policy, terms).

use leptos::prelude::*;

use super::section::{Background, Section};

/// One block of legal text.
#[derive(Clone, Copy, Debug)]
pub enum Block {
    Para(&'static str),
    /// Bold lead-in followed by its explanation.
    Term(&'static str, &'static str),
    List(&'static [&'static str]),
}

#[derive(Clone, Copy, Debug)]
pub struct Clause {
    pub heading: &'static str,
    pub blocks: &'static [Block],
}

fn render_block(block: Block) -> AnyView {
    match block {
        Block::Para(text) => view! { <p>{text}</p> }.into_any(),
        Block::Term(term, text) => view! { <p><strong>{format!("{term}:")}</strong>" "{text}</p> }.into_any(),
        Block::List(items) => {
            view! { <ul>{items.iter().map(|i| view! { <li>{*i}</li> }).collect_view()}</ul> }.into_any()
        }
    }
}

#[component]
pub fn LegalDocument(
    title: &'static str,
    updated: &'static str,
    intro: &'static str,
    clauses: &'static [Clause],
) -> impl IntoView {
    let body = clauses
        .iter()
        .map(|clause| {
            view! {
                <section class="legal__clause">
                    <h2>{clause.heading}</h2>
                    {clause.blocks.iter().copied().map(render_block).collect_view()}
                </section>
            }
        })
        .collect_view();

    view! {
        <Section background=Background::WarmSand compact=true>
            <div class="hero hero--page">
                <h1 class="hero__title">{title}</h1>
                <p class="legal__updated">{format!("Last Updated: {updated}")}</p>
            </div>
        </Section>
        <Section>
            <article class="legal prose">
                <p class="legal__intro">{intro}</p>
                {body}
            </article>
        </Section>
    }
}
