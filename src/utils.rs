//! Text helpers shared by the extractor, aggregator and reporter.

use scraper::ElementRef;

/// Truncate a string for logging purposes.
///
/// Long strings are cut to `max` characters with an ellipsis and a count of
/// the dropped bytes appended. Cuts always land on a character boundary, so
/// Cyrillic headlines are safe to pass in.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}…(+{} bytes)", &s[..cut], s.len() - cut),
    }
}

/// Join text fragments, trimming each and skipping the empty ones.
pub fn join_fragments<'a, I>(fragments: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    fragments
        .into_iter()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Rendered text of an element: all descendant text, whitespace-normalized.
pub fn element_text(element: ElementRef<'_>) -> String {
    join_fragments(element.text())
}

/// Like [`element_text`], but skips anything inside `script` or `style`.
pub fn visible_text(element: ElementRef<'_>) -> String {
    let mut fragments = Vec::new();
    collect_visible(element, &mut fragments);
    join_fragments(fragments)
}

fn collect_visible<'a>(element: ElementRef<'a>, out: &mut Vec<&'a str>) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push(&**text);
        } else if let Some(child_element) = ElementRef::wrap(child) {
            if matches!(child_element.value().name(), "script" | "style") {
                continue;
            }
            collect_visible(child_element, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    #[test]
    fn test_truncate_for_log_short_string() {
        let s = "Hello, world!";
        assert_eq!(truncate_for_log(s, 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_multibyte() {
        let result = truncate_for_log("дизайн", 3);
        assert_eq!(result, "диз…(+6 bytes)");
    }

    #[test]
    fn test_join_fragments() {
        assert_eq!(join_fragments(["  Hello ", "\n", "world\t"]), "Hello world");
        assert_eq!(join_fragments(Vec::<&str>::new()), "");
    }

    #[test]
    fn test_visible_text_skips_script_and_style() {
        let html = Html::parse_fragment(
            r#"<div id="body"><p>First <b>bold</b></p>
            <script>var web = 1;</script><style>.web { color: red }</style>
            <p>Second</p></div>"#,
        );
        let selector = Selector::parse("#body").unwrap();
        let body = html.select(&selector).next().unwrap();

        assert_eq!(visible_text(body), "First bold Second");
        assert!(element_text(body).contains("var web = 1;"));
    }
}
