use super::*;

#[test]
fn strips_style_elements_and_attributes_keeping_other_markup() {
    let html = r#"<style>.post { color: red; }</style>
<h2 class="title" style="font-size: 40px">Intro</h2>
<p id="lead" style='margin:0'>Read <a href="/pricing" style=color:blue>pricing</a>.</p>"#;
    let out = sanitize_fragment(html);
    assert_eq!(
        out,
        "<h2 class=\"title\">Intro</h2>\n<p id=\"lead\">Read <a href=\"/pricing\">pricing</a>.</p>"
    );
}

#[test]
fn strips_multiline_and_uppercase_style_blocks() {
    let html = "<STYLE type=\"text/css\">\nbody {\n  background: black;\n}\n</STYLE><p>ok</p><style media=\"print\">p{}</style >";
    assert_eq!(sanitize_fragment(html), "<p>ok</p>");
}

#[test]
fn strips_unterminated_style_block() {
    assert_eq!(sanitize_fragment("<p>a</p><style>p { color: red }"), "<p>a</p>");
}

#[test]
fn strips_uppercase_and_valueless_style_attributes() {
    assert_eq!(sanitize_fragment(r#"<div STYLE="x" hidden>t</div>"#), "<div hidden>t</div>");
    assert_eq!(sanitize_fragment("<span style>t</span>"), "<span>t</span>");
}

#[test]
fn keeps_lookalike_attributes_and_text() {
    let html = r#"<div data-style="compact" class="style">style="inline" in prose</div>"#;
    assert_eq!(sanitize_fragment(html), html);
}

#[test]
fn keeps_quoted_values_containing_angle_brackets() {
    let html = r#"<img alt="a > b" style="width:10px" src="/x.png">"#;
    assert_eq!(sanitize_fragment(html), r#"<img alt="a > b" src="/x.png">"#);
}

#[test]
fn keeps_self_closing_tags_intact() {
    assert_eq!(sanitize_fragment(r#"<br style="clear:both" />"#), "<br />");
}

#[test]
fn extracts_body_of_full_documents() {
    let html = r"<!DOCTYPE html><html><head><title>x</title><style>h1{}</style></head>
<body class='post'><h1>Title</h1><pre><code>let x = 1;</code></pre></body></html>";
    assert_eq!(sanitize_fragment(html), "<h1>Title</h1><pre><code>let x = 1;</code></pre>");
}

#[test]
fn body_inner_returns_fragment_unchanged() {
    assert_eq!(body_inner("<p>plain</p>"), "<p>plain</p>");
}

#[test]
fn comment_mentioning_style_keeps_following_markup() {
    let html = "<!-- removed the old <style> block --><h2>Intro</h2><p>Body text</p>";
    assert_eq!(sanitize_fragment(html), html);
}

#[test]
fn comments_and_scripts_pass_through_verbatim() {
    let html = r#"<!-- <p style="x"> --><script>const tag = "<style>";</script><p style="y">t</p>"#;
    assert_eq!(
        sanitize_fragment(html),
        r#"<!-- <p style="x"> --><script>const tag = "<style>";</script><p>t</p>"#
    );
}

#[test]
fn style_block_after_comment_is_still_removed() {
    let html = "<!-- note --><style>p { color: red }</style><p>ok</p>";
    assert_eq!(sanitize_fragment(html), "<!-- note --><p>ok</p>");
}
