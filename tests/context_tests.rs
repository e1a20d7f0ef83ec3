//! Context retrieval integration tests
//!
//! Exercises keyword matching, section ordering and omission, caps, and
//! idempotence of the assistant's grounding-context document.

mod common;

use common::get_test_handler;
use homekeeper::assistant::gather_context;

#[test]
fn test_full_context_document_layout() {
    let (handler, _temp_file) = get_test_handler();

    handler
        .handle_add_appliance(
            "Furnace",
            Some("Basement".to_string()),
            Some("Carrier".to_string()),
            None,
            None,
        )
        .unwrap();
    handler
        .handle_add_wiki_page("Furnace Manual", "Hold reset for 5 seconds.", "local")
        .unwrap();
    handler
        .handle_add_reminder("Replace filter", "2025-01-01", Some("monthly"), None, "local")
        .unwrap();

    let context = gather_context(&handler.data_snapshot(), "how do I reset my furnace");

    assert_eq!(
        context,
        "## Appliances\nFurnace, Location: Basement, Brand: Carrier\n\n\
         ## Wiki Pages\n### Furnace Manual\nHold reset for 5 seconds.\n\n\
         ## Upcoming Reminders\n- Replace filter (due: January 01, 2025)"
    );
}

#[test]
fn test_wiki_matching_is_case_insensitive() {
    let (handler, _temp_file) = get_test_handler();
    handler
        .handle_add_wiki_page("Furnace Manual", "Reset instructions.", "local")
        .unwrap();

    let context = gather_context(&handler.data_snapshot(), "how do I reset my furnace");
    assert!(context.contains("### Furnace Manual"));
}

#[test]
fn test_short_tokens_never_match() {
    let (handler, _temp_file) = get_test_handler();
    handler
        .handle_add_wiki_page("OK Guide", "it is ok", "local")
        .unwrap();

    // All tokens are shorter than 3 characters
    let context = gather_context(&handler.data_snapshot(), "is it ok");
    assert_eq!(context, "");
}

#[test]
fn test_wiki_section_omitted_when_nothing_matches() {
    let (handler, _temp_file) = get_test_handler();
    handler
        .handle_add_appliance("Dishwasher", None, None, None, None)
        .unwrap();
    handler
        .handle_add_wiki_page("Garden Notes", "Tomatoes need sun.", "local")
        .unwrap();

    let context = gather_context(&handler.data_snapshot(), "where is the thermostat");
    assert_eq!(context, "## Appliances\nDishwasher");
}

#[test]
fn test_body_matches_count_too() {
    let (handler, _temp_file) = get_test_handler();
    handler
        .handle_add_wiki_page("HVAC", "The furnace filter size is 16x25x1.", "local")
        .unwrap();

    let context = gather_context(&handler.data_snapshot(), "what filter do we need");
    assert!(context.contains("### HVAC"));
}

#[test]
fn test_wiki_matches_capped_at_ten_in_corpus_order() {
    let (handler, _temp_file) = get_test_handler();
    for i in 1..=12 {
        handler
            .handle_add_wiki_page(
                &format!("Furnace Note {}", i),
                "furnace maintenance",
                "local",
            )
            .unwrap();
    }

    let context = gather_context(&handler.data_snapshot(), "furnace");
    assert!(context.contains("### Furnace Note 1\n"));
    assert!(context.contains("### Furnace Note 10\n"));
    assert!(!context.contains("### Furnace Note 11"));
    assert!(!context.contains("### Furnace Note 12"));
}

#[test]
fn test_upcoming_reminders_sorted_and_capped_at_ten() {
    let (handler, _temp_file) = get_test_handler();

    // Insert in reverse due-date order; days 12 down to 1
    for day in (1..=12).rev() {
        handler
            .handle_add_reminder(
                &format!("Chore {}", day),
                &format!("2025-03-{:02}", day),
                None,
                None,
                "local",
            )
            .unwrap();
    }

    let context = gather_context(&handler.data_snapshot(), "what chores are coming up");
    let section = context
        .split("## Upcoming Reminders\n")
        .nth(1)
        .expect("reminders section present");
    let bullets: Vec<&str> = section.lines().collect();

    assert_eq!(bullets.len(), 10);
    assert_eq!(bullets[0], "- Chore 1 (due: March 01, 2025)");
    assert_eq!(bullets[9], "- Chore 10 (due: March 10, 2025)");
}

#[test]
fn test_completed_reminders_excluded_from_context() {
    let (handler, _temp_file) = get_test_handler();
    handler
        .handle_add_reminder("Done chore", "2025-03-01", None, None, "local")
        .unwrap();
    handler.handle_complete("#1").unwrap();

    let context = gather_context(&handler.data_snapshot(), "what chores are coming up");
    assert_eq!(context, "");
}

#[test]
fn test_retrieval_is_idempotent() {
    let (handler, _temp_file) = get_test_handler();
    handler
        .handle_add_appliance("Furnace", Some("Basement".to_string()), None, None, None)
        .unwrap();
    handler
        .handle_add_wiki_page("Furnace Manual", "Reset instructions.", "local")
        .unwrap();

    let data = handler.data_snapshot();
    let first = gather_context(&data, "furnace reset");
    let second = gather_context(&data, "furnace reset");
    assert_eq!(first, second);
}
