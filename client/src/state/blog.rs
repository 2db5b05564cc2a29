//! Blog page view state and the audience filter.

#[cfg(test)]
#[path = "blog_test.rs"]
mod blog_test;

use crate::net::types::{Audience, BlogPost};

/// What the article page shows for the current slug.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PostView {
    #[default]
    Loading,
    Ready { post: Box<BlogPost>, html: String },
    /// Unknown slug or failed load, with the message to display.
    NotFound(String),
}

/// Audience selection on the blog index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AudienceFilter {
    #[default]
    All,
    Only(Audience),
}

impl AudienceFilter {
    pub const CHOICES: [Self; 3] = [Self::All, Self::Only(Audience::Executive), Self::Only(Audience::Technical)];

    /// Parse a filter value as used in `?audience=`; unknown values are `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "all" | "" => Some(Self::All),
            "executive" => Some(Self::Only(Audience::Executive)),
            "technical" => Some(Self::Only(Audience::Technical)),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(Audience::Executive) => "executive",
            Self::Only(Audience::Technical) => "technical",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Posts",
            Self::Only(audience) => audience.label(),
        }
    }

    pub fn matches(self, post: &BlogPost) -> bool {
        match self {
            Self::All => true,
            Self::Only(audience) => post.audience == audience,
        }
    }
}

/// Posts matching `filter`, in their original order.
pub fn filter_by_audience(posts: &[BlogPost], filter: AudienceFilter) -> Vec<BlogPost> {
    posts.iter().filter(|p| filter.matches(p)).cloned().collect()
}
