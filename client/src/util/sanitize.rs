//! Styling sanitizer for pre-rendered blog fragments.
//!
//! Post fragments are authored elsewhere and may carry their own `<style>`
//! blocks or inline `style` attributes. Both are removed before injection so
//! the site theme always wins; every other element and attribute is kept.
//! Comments and script bodies are copied through as-is, even when their text
//! looks like styling markup.

#[cfg(test)]
#[path = "sanitize_test.rs"]
mod sanitize_test;

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

static BODY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<body\b[^>]*>(.*?)(?:</body\s*>|\z)").expect("valid body regex"));

/// Comments and `<script>` bodies, which are passed through untouched.
const RAW_TEXT: &str = r"<!--.*?(?:-->|\z)|<script\b[^>]*>.*?(?:</script\s*>|\z)";

static STYLE_ELEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?is)(?P<raw>{RAW_TEXT})|<style\b[^>]*>.*?(?:</style\s*>|\z)")).expect("valid style regex")
});

/// An opening (or self-closing) tag; quoted attribute values may contain `>`.
static OPEN_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r#"(?is)(?P<raw>{RAW_TEXT})|<[a-z][^\s/>]*(?:"[^"]*"|'[^']*'|[^'">])*>"#))
        .expect("valid tag regex")
});

/// One attribute inside a tag, with its optional value.
static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\s+([^\s"'=<>/]+)(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s"'>]+))?"#).expect("valid attribute regex")
});

/// Inner markup of `<body>` when `html` is a full document, else `html` itself.
pub fn body_inner(html: &str) -> &str {
    BODY.captures(html)
        .and_then(|caps| caps.get(1))
        .map_or(html, |m| m.as_str())
}

fn strip_style_attribute(tag: &str) -> Cow<'_, str> {
    ATTRIBUTE.replace_all(tag, |caps: &Captures<'_>| {
        if caps[1].eq_ignore_ascii_case("style") {
            String::new()
        } else {
            caps[0].to_owned()
        }
    })
}

/// Remove `<style>` elements and inline `style` attributes from a fragment.
pub fn sanitize_fragment(html: &str) -> String {
    let body = body_inner(html);
    let without_blocks = STYLE_ELEMENT.replace_all(body, |caps: &Captures<'_>| {
        caps.name("raw").map_or_else(String::new, |raw| raw.as_str().to_owned())
    });
    let cleaned = OPEN_TAG.replace_all(&without_blocks, |caps: &Captures<'_>| match caps.name("raw") {
        Some(raw) => raw.as_str().to_owned(),
        None => strip_style_attribute(&caps[0]).into_owned(),
    });
    cleaned.trim().to_owned()
}
