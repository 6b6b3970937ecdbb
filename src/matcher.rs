//! Case-insensitive keyword counting and the ANY/ALL inclusion decision.
//!
//! Counting is a plain substring count, not a word or token count. After each
//! hit the scan resumes one character past where the hit started, so
//! occurrences that overlap are all counted: `"aa"` occurs twice in `"aaa"`.

use crate::models::{KeywordMatchResult, SearchMode};
use itertools::Itertools;

/// Result of matching one search text against the configured keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    pub result: KeywordMatchResult,
    pub should_include: bool,
}

/// Fold text for comparison. Applied identically to search text and keywords.
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// Count occurrences of `needle` in `haystack`, advancing one character past
/// the start of each hit. An empty needle never matches.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }

    let mut count = 0;
    let mut cursor = 0;
    while let Some(offset) = haystack[cursor..].find(needle) {
        let hit = cursor + offset;
        count += 1;
        let step = haystack[hit..].chars().next().map_or(1, char::len_utf8);
        cursor = hit + step;
    }
    count
}

/// Match `search_text` against `keywords` and decide inclusion under `mode`.
///
/// Matched keywords are reported in the order they appear in `keywords`.
/// Under [`SearchMode::All`] every distinct keyword must occur; an empty
/// keyword list is never included.
///
/// # Arguments
///
/// * `search_text` - Text to search; case-folded again before counting
/// * `keywords` - Needles, used exactly as given apart from case folding
/// * `mode` - Inclusion policy
///
/// # Returns
///
/// A [`MatchOutcome`] with the keywords found, their overlapping occurrence
/// counts, and whether the article should be included.
pub fn match_keywords(search_text: &str, keywords: &[String], mode: SearchMode) -> MatchOutcome {
    let folded = fold_case(search_text);
    let mut result = KeywordMatchResult::default();

    for keyword in keywords {
        let count = count_occurrences(&folded, &fold_case(keyword));
        result.record(keyword, count);
    }

    let configured = keywords.iter().unique().count();
    let should_include = mode.accepts(result.matched_count(), configured);
    tracing::trace!(
        matched = result.matched_count(),
        configured,
        %mode,
        should_include,
        "Keyword match computed"
    );

    MatchOutcome {
        result,
        should_include,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_single_keyword_case_insensitive() {
        let outcome = match_keywords("Web development guide", &kw(&["web"]), SearchMode::Any);
        assert!(outcome.should_include);
        assert_eq!(outcome.result.matched_keywords, vec!["web"]);
        assert_eq!(outcome.result.count("web"), Some(1));
    }

    #[test]
    fn test_all_mode_requires_every_keyword() {
        let outcome = match_keywords(
            "a design about design",
            &kw(&["design", "photo"]),
            SearchMode::All,
        );
        assert!(!outcome.should_include);
        assert_eq!(outcome.result.matched_keywords, vec!["design"]);
        assert_eq!(outcome.result.count("design"), Some(2));
        assert_eq!(outcome.result.count("photo"), None);
    }

    #[test]
    fn test_all_mode_includes_when_everything_matches() {
        let outcome = match_keywords(
            "A photo essay on design",
            &kw(&["design", "photo"]),
            SearchMode::All,
        );
        assert!(outcome.should_include);
        // configured order, not order of appearance in the text
        assert_eq!(outcome.result.matched_keywords, vec!["design", "photo"]);
    }

    #[test]
    fn test_overlapping_occurrences_are_counted() {
        assert_eq!(count_occurrences("aaa", "aa"), 2);
        let outcome = match_keywords("aaa", &kw(&["aa"]), SearchMode::Any);
        assert_eq!(outcome.result.count("aa"), Some(2));
    }

    #[test]
    fn test_substring_semantics_not_whole_words() {
        assert_eq!(count_occurrences("webinar about web3 and cobweb", "web"), 3);
    }

    #[test]
    fn test_cyrillic_keywords_fold_case() {
        let outcome = match_keywords(
            "ДИЗАЙН интерфейсов и Фото: дизайн",
            &kw(&["дизайн", "фото", "python"]),
            SearchMode::Any,
        );
        assert!(outcome.should_include);
        assert_eq!(outcome.result.matched_keywords, vec!["дизайн", "фото"]);
        assert_eq!(outcome.result.count("дизайн"), Some(2));
        assert_eq!(outcome.result.count("фото"), Some(1));
    }

    #[test]
    fn test_multibyte_overlap_advances_by_character() {
        assert_eq!(count_occurrences("ааа", "аа"), 2);
    }

    #[test]
    fn test_uppercase_keyword_matches_lowercase_text() {
        let outcome = match_keywords("learning python", &kw(&["Python"]), SearchMode::Any);
        assert_eq!(outcome.result.matched_keywords, vec!["Python"]);
        assert_eq!(outcome.result.count("Python"), Some(1));
    }

    #[test]
    fn test_empty_keyword_list() {
        let any = match_keywords("anything", &[], SearchMode::Any);
        let all = match_keywords("anything", &[], SearchMode::All);
        assert!(!any.should_include);
        assert!(!all.should_include);
        assert!(all.result.is_empty());
    }

    #[test]
    fn test_empty_text_matches_nothing() {
        let outcome = match_keywords("", &kw(&["web", "python"]), SearchMode::Any);
        assert!(!outcome.should_include);
        assert!(outcome.result.occurrence_counts.is_empty());
    }

    #[test]
    fn test_empty_keyword_never_matches() {
        assert_eq!(count_occurrences("abc", ""), 0);
    }

    #[test]
    fn test_duplicate_keywords_counted_once() {
        let outcome = match_keywords("web web", &kw(&["web", "web"]), SearchMode::All);
        assert!(outcome.should_include);
        assert_eq!(outcome.result.matched_keywords, vec!["web"]);
        assert_eq!(outcome.result.count("web"), Some(2));
    }

    #[test]
    fn test_mode_invariants_hold() {
        let keywords = kw(&["rust", "go", "zig"]);
        for text in ["rust and go", "nothing here", "zig go rust", "RUST"] {
            let any = match_keywords(text, &keywords, SearchMode::Any);
            let all = match_keywords(text, &keywords, SearchMode::All);
            assert_eq!(any.result, all.result);
            assert_eq!(any.should_include, any.result.matched_count() > 0);
            assert_eq!(
                all.should_include,
                all.result.matched_count() == keywords.len()
            );
            for k in &any.result.matched_keywords {
                assert!(any.result.count(k).unwrap() >= 1);
            }
        }
    }

    #[test]
    fn test_matching_is_idempotent() {
        let keywords = kw(&["web", "python"]);
        let first = match_keywords("Python web python", &keywords, SearchMode::Any);
        let second = match_keywords("Python web python", &keywords, SearchMode::Any);
        assert_eq!(first, second);
    }
}
