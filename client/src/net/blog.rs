//! Blog content loading: the static JSON index plus per-post HTML fragments.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both the index and the fragments are static files served next to the app.
//! Missing or broken content degrades to empty/not-found states; nothing here
//! returns an error the page has to handle beyond [`PostView::NotFound`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "blog_test.rs"]
mod blog_test;

use async_trait::async_trait;

use super::api::ApiError;
use super::types::{BlogMetadata, BlogPost};
use crate::state::blog::PostView;
use crate::util::sanitize::sanitize_fragment;

/// Location of the blog index document.
pub const BLOG_METADATA_PATH: &str = "/blog-metadata.json";

/// Directory holding the pre-rendered post fragments.
pub const POSTS_DIR: &str = "/posts";

pub const POST_NOT_FOUND: &str = "Blog post not found";
pub const POST_LOAD_FAILED: &str = "Failed to load blog post";

/// Read-only access to static site files.
#[async_trait(?Send)]
pub trait ContentSource {
    /// Fetch `path` as text; non-2xx responses are errors.
    async fn fetch_text(&self, path: &str) -> Result<String, ApiError>;
}

/// [`ContentSource`] backed by same-origin HTTP requests.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticContent;

#[async_trait(?Send)]
impl ContentSource for StaticContent {
    async fn fetch_text(&self, path: &str) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(path).send().await?;
            if !resp.ok() {
                return Err(ApiError::Status { status: resp.status(), detail: None });
            }
            resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ApiError::Unavailable)
        }
    }
}

/// Fragment file backing `post`: the explicit `html_file`, else `<slug>.html`.
pub fn resolve_html_file(post: &BlogPost) -> String {
    post.html_file
        .as_deref()
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map_or_else(|| format!("{}.html", post.slug), ToOwned::to_owned)
}

/// URL path of the fragment backing `post`.
pub fn post_body_path(post: &BlogPost) -> String {
    format!("{POSTS_DIR}/{}", resolve_html_file(post))
}

/// Loads the blog index and post bodies from a [`ContentSource`].
pub struct BlogLoader<C> {
    source: C,
}

impl BlogLoader<StaticContent> {
    /// Loader reading from the site origin.
    pub fn from_site() -> Self {
        Self::new(StaticContent)
    }
}

impl<C: ContentSource> BlogLoader<C> {
    pub fn new(source: C) -> Self {
        Self { source }
    }

    async fn fetch_metadata(&self) -> Result<BlogMetadata, ApiError> {
        let raw = self.source.fetch_text(BLOG_METADATA_PATH).await?;
        serde_json::from_str(&raw).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// All posts in index order; empty when the index cannot be loaded.
    pub async fn list_posts(&self) -> Vec<BlogPost> {
        match self.fetch_metadata().await {
            Ok(meta) => meta.posts,
            Err(e) => {
                log::warn!("blog index unavailable: {e}");
                Vec::new()
            }
        }
    }

    /// Fetch and sanitize the article body of `post`.
    ///
    /// # Errors
    ///
    /// Returns an error if the fragment cannot be fetched.
    pub async fn load_post_body(&self, post: &BlogPost) -> Result<String, ApiError> {
        let raw = self.source.fetch_text(&post_body_path(post)).await?;
        Ok(sanitize_fragment(&raw))
    }

    /// Resolve `slug` against the index and load its body.
    pub async fn load_post(&self, slug: &str) -> PostView {
        let meta = match self.fetch_metadata().await {
            Ok(meta) => meta,
            Err(e) => {
                log::error!("error loading post {slug}: {e}");
                return PostView::NotFound(POST_LOAD_FAILED.to_owned());
            }
        };
        let Some(post) = meta.posts.into_iter().find(|p| p.slug == slug) else {
            return PostView::NotFound(POST_NOT_FOUND.to_owned());
        };
        match self.load_post_body(&post).await {
            Ok(html) => PostView::Ready { post: Box::new(post), html },
            Err(e) => {
                log::error!("error loading post body {slug}: {e}");
                PostView::NotFound(POST_LOAD_FAILED.to_owned())
            }
        }
    }
}
