//! Context retrieval for the household assistant
//!
//! Turns a free-text question into a grounding context document built from
//! three read-only corpora: appliances, wiki pages and pending reminders.
//! Sections appear in that fixed order; a corpus that contributes nothing
//! is omitted entirely, and an all-empty household yields an empty string.

use crate::formatting::{appliance_summary, long_form_date};
use crate::home::HomeData;

/// Keyword tokens shorter than this never trigger a wiki match
const MIN_KEYWORD_LEN: usize = 3;
/// Cap on wiki pages included in the context
const WIKI_PAGE_LIMIT: usize = 10;
/// Cap on upcoming reminders included in the context
const UPCOMING_REMINDER_LIMIT: usize = 10;

/// Extract search keywords from a question
///
/// Splits on whitespace, lowercases, and drops tokens shorter than three
/// characters (counted as characters, not bytes). The surviving tokens are
/// matched as substrings against wiki titles and bodies.
pub fn question_keywords(question: &str) -> Vec<String> {
    question
        .split_whitespace()
        .map(|w| w.to_lowercase())
        .filter(|w| w.chars().count() >= MIN_KEYWORD_LEN)
        .collect()
}

/// Build the grounding context document for a question
///
/// The output is a markdown document with up to three labeled sections,
/// non-empty sections joined by a blank line:
/// 1. `## Appliances` - every appliance, one summary line each (the corpus
///    is small enough that no filtering applies)
/// 2. `## Wiki Pages` - the first ten keyword-matching pages in corpus
///    order, unranked
/// 3. `## Upcoming Reminders` - pending reminders by ascending due date,
///    capped at ten
///
/// Retrieval is read-only and idempotent for a fixed data snapshot.
pub fn gather_context(data: &HomeData, question: &str) -> String {
    let mut context_parts: Vec<String> = Vec::new();

    let appliances = data.appliances();
    if !appliances.is_empty() {
        let lines: Vec<String> = appliances.iter().map(appliance_summary).collect();
        context_parts.push(format!("## Appliances\n{}", lines.join("\n")));
    }

    let keywords = question_keywords(question);
    let wiki_pages = data.matching_wiki_pages(&keywords, WIKI_PAGE_LIMIT);
    if !wiki_pages.is_empty() {
        let entries: Vec<String> = wiki_pages
            .iter()
            .map(|p| format!("### {}\n{}", p.title, p.body))
            .collect();
        context_parts.push(format!("## Wiki Pages\n{}", entries.join("\n\n")));
    }

    let reminders = data.upcoming_reminders(UPCOMING_REMINDER_LIMIT);
    if !reminders.is_empty() {
        let bullets: Vec<String> = reminders
            .iter()
            .map(|r| format!("- {} (due: {})", r.title, long_form_date(r.due_date)))
            .collect();
        context_parts.push(format!("## Upcoming Reminders\n{}", bullets.join("\n")));
    }

    context_parts.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_lowercase_and_drop_short_tokens() {
        assert_eq!(
            question_keywords("How do I reset my Furnace"),
            vec!["how", "reset", "furnace"]
        );
    }

    #[test]
    fn test_keywords_all_short_tokens() {
        assert!(question_keywords("is it ok").is_empty());
        assert!(question_keywords("").is_empty());
    }

    #[test]
    fn test_keyword_length_counts_characters_not_bytes() {
        // "où" and "ça" are two characters but more than two bytes
        assert_eq!(question_keywords("où est ça"), vec!["est"]);
    }

    #[test]
    fn test_empty_household_yields_empty_context() {
        let data = HomeData::new();
        assert_eq!(gather_context(&data, "anything at all"), "");
    }
}
