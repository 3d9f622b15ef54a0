use std::collections::{HashMap, HashSet};

/// Render the learner's draft for the live preview pane.
///
/// Output is always passed through `sanitize_html` before it reaches the DOM.
#[must_use]
pub fn markdown_to_html(input: &str) -> String {
    let mut options = pulldown_cmark::Options::empty();
    options.insert(pulldown_cmark::Options::ENABLE_STRIKETHROUGH);
    options.insert(pulldown_cmark::Options::ENABLE_TABLES);

    let parser = pulldown_cmark::Parser::new_ext(input, options);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    sanitize_html(&html)
}

#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "h1", "h2", "h3", "h4", "h5", "h6", "p", "br", "hr", "em", "strong", "del", "code",
        "pre", "blockquote", "ul", "ol", "li", "a", "table", "thead", "tbody", "tr", "th", "td",
    ]
    .into_iter()
    .collect();

    let mut attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    attributes.insert("a", ["href"].into_iter().collect());
    attributes.insert("ol", ["start"].into_iter().collect());

    ammonia::Builder::new()
        .tags(tags)
        .tag_attributes(attributes)
        .clean(html)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::markdown_to_html;

    #[test]
    fn headings_render_at_their_level() {
        assert!(markdown_to_html("# Heading").contains("<h1>Heading</h1>"));
        assert!(markdown_to_html("## My Pets").contains("<h2>My Pets</h2>"));
    }

    #[test]
    fn emphasis_and_strikethrough_render() {
        let html = markdown_to_html("**magic** *wand* ~~homework~~");
        assert!(html.contains("<strong>magic</strong>"));
        assert!(html.contains("<em>wand</em>"));
        assert!(html.contains("<del>homework</del>"));
    }

    #[test]
    fn lists_and_quotes_render() {
        assert!(markdown_to_html("- apple\n- banana").contains("<li>banana</li>"));
        assert!(markdown_to_html("> Practice makes perfect").contains("<blockquote>"));
    }

    #[test]
    fn scripts_and_javascript_links_are_stripped() {
        let html = markdown_to_html("<script>alert(1)</script>[Link](javascript:alert(1))");
        assert!(!html.contains("<script"));
        assert!(!html.contains("javascript:"));
        assert!(html.contains("Link"));
    }
}
