use std::cell::RefCell;
use std::collections::HashMap;

use futures::executor::block_on;

use super::*;
use crate::net::types::Audience;

// =============================================================
// Helpers
// =============================================================

#[derive(Default)]
struct FakeContent {
    files: HashMap<String, String>,
    requested: RefCell<Vec<String>>,
}

impl FakeContent {
    fn with(mut self, path: &str, body: &str) -> Self {
        self.files.insert(path.to_owned(), body.to_owned());
        self
    }
}

#[async_trait(?Send)]
impl ContentSource for FakeContent {
    async fn fetch_text(&self, path: &str) -> Result<String, ApiError> {
        self.requested.borrow_mut().push(path.to_owned());
        self.files
            .get(path)
            .cloned()
            .ok_or(ApiError::Status { status: 404, detail: None })
    }
}

const INDEX: &str = r#"{
    "posts": [
        {"id":"1","title":"Why autofill","slug":"why-autofill","audience":"executive",
         "date":"2025-02-01","reading_time":"3 min read","html_file":"why-autofill-v2.html"},
        {"id":"2","title":"Matching fields","slug":"matching-fields","audience":"technical",
         "date":"2025-02-10","reading_time":"8 min read"}
    ]
}"#;

fn post(slug: &str, html_file: Option<&str>) -> BlogPost {
    BlogPost {
        id: slug.to_owned(),
        title: slug.to_owned(),
        slug: slug.to_owned(),
        audience: Audience::Technical,
        content_type: None,
        date: "2025-01-01".to_owned(),
        reading_time: "1 min read".to_owned(),
        author: None,
        excerpt: String::new(),
        tags: Vec::new(),
        keywords: Vec::new(),
        html_file: html_file.map(ToOwned::to_owned),
    }
}

// =============================================================
// File resolution
// =============================================================

#[test]
fn resolve_html_file_prefers_explicit_field() {
    assert_eq!(resolve_html_file(&post("a", Some("custom.html"))), "custom.html");
}

#[test]
fn resolve_html_file_derives_from_slug() {
    assert_eq!(resolve_html_file(&post("form-tips", None)), "form-tips.html");
    assert_eq!(resolve_html_file(&post("form-tips", Some("  "))), "form-tips.html");
}

#[test]
fn post_body_path_is_under_posts_dir() {
    assert_eq!(post_body_path(&post("x", None)), "/posts/x.html");
}

// =============================================================
// list_posts
// =============================================================

#[test]
fn list_posts_returns_index_in_order() {
    let loader = BlogLoader::new(FakeContent::default().with(BLOG_METADATA_PATH, INDEX));
    let posts = block_on(loader.list_posts());
    let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, ["why-autofill", "matching-fields"]);
}

#[test]
fn list_posts_fetch_failure_yields_empty_list() {
    let loader = BlogLoader::new(FakeContent::default());
    assert!(block_on(loader.list_posts()).is_empty());
}

#[test]
fn list_posts_malformed_index_yields_empty_list() {
    let loader = BlogLoader::new(FakeContent::default().with(BLOG_METADATA_PATH, "<html>oops</html>"));
    assert!(block_on(loader.list_posts()).is_empty());
}

// =============================================================
// load_post
// =============================================================

#[test]
fn load_post_uses_explicit_html_file_and_sanitizes() {
    let content = FakeContent::default()
        .with(BLOG_METADATA_PATH, INDEX)
        .with("/posts/why-autofill-v2.html", r#"<style>h1{color:red}</style><h1 style="x">Hi</h1>"#);
    let loader = BlogLoader::new(content);

    match block_on(loader.load_post("why-autofill")) {
        PostView::Ready { post, html } => {
            assert_eq!(post.title, "Why autofill");
            assert_eq!(html, "<h1>Hi</h1>");
        }
        other => panic!("expected ready post, got {other:?}"),
    }
    assert_eq!(
        *loader.source.requested.borrow(),
        vec![BLOG_METADATA_PATH.to_owned(), "/posts/why-autofill-v2.html".to_owned()]
    );
}

#[test]
fn load_post_derives_file_from_slug() {
    let content = FakeContent::default()
        .with(BLOG_METADATA_PATH, INDEX)
        .with("/posts/matching-fields.html", "<p>body</p>");
    let loader = BlogLoader::new(content);
    assert!(matches!(block_on(loader.load_post("matching-fields")), PostView::Ready { .. }));
}

#[test]
fn load_post_unknown_slug_is_not_found() {
    let loader = BlogLoader::new(FakeContent::default().with(BLOG_METADATA_PATH, INDEX));
    assert_eq!(block_on(loader.load_post("nope")), PostView::NotFound(POST_NOT_FOUND.to_owned()));
}

#[test]
fn load_post_missing_fragment_is_not_found() {
    let loader = BlogLoader::new(FakeContent::default().with(BLOG_METADATA_PATH, INDEX));
    assert_eq!(
        block_on(loader.load_post("matching-fields")),
        PostView::NotFound(POST_LOAD_FAILED.to_owned())
    );
}

#[test]
fn load_post_missing_index_is_not_found() {
    let loader = BlogLoader::new(FakeContent::default());
    assert_eq!(
        block_on(loader.load_post("why-autofill")),
        PostView::NotFound(POST_LOAD_FAILED.to_owned())
    );
}
