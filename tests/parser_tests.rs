//! Tests for section extraction.

use easel::parser::{BoundaryRule, ParsedResponse, SectionLabels, SectionParser, DEFAULT_LABELS};
use pretty_assertions::assert_eq;
use regex::Regex;

fn values(parsed: &ParsedResponse) -> Vec<(&str, Option<&str>)> {
    parsed.iter().collect()
}

#[test]
fn example_with_two_of_four_sections() {
    let parsed = SectionParser::default().parse("Thinking Role: X\nFinal Answer: Y");
    assert_eq!(
        values(&parsed),
        vec![
            ("Thinking Role", Some("X")),
            ("Problem Definition", None),
            ("Task Execution", None),
            ("Final Answer", Some("Y")),
        ]
    );
}

#[test]
fn text_without_markers_leaves_every_label_absent() {
    let parser = SectionParser::default();
    for raw in [
        "",
        "   \n\t",
        "just a plain answer",
        "Thinking role: wrong case",
        "line one\nline two\n",
    ] {
        let parsed = parser.parse(raw);
        assert_eq!(parsed.len(), DEFAULT_LABELS.len(), "input {raw:?}");
        assert!(parsed.is_blank(), "input {raw:?}");
    }
}

#[test]
fn empty_input_keeps_every_label_as_key() {
    let parsed = SectionParser::default().parse("");
    for label in DEFAULT_LABELS {
        assert!(parsed.contains_label(label));
        assert_eq!(parsed.get(label), None);
    }
}

#[test]
fn well_formed_response_has_no_bleed() {
    let raw = "Thinking Role: A senior engineer\n\
               Problem Definition:   Sum two numbers.  \n\
               Task Execution: 2 + 2\nthen check the result\n\
               Final Answer: 4\n";
    let parsed = SectionParser::default().parse(raw);
    assert_eq!(
        values(&parsed),
        vec![
            ("Thinking Role", Some("A senior engineer")),
            ("Problem Definition", Some("Sum two numbers.")),
            ("Task Execution", Some("2 + 2\nthen check the result")),
            ("Final Answer", Some("4")),
        ]
    );
}

#[test]
fn parsing_is_idempotent() {
    let parser = SectionParser::default();
    let raw = "Thinking Role: r\nTask Execution: t\n\nFinal Answer:  f ";
    assert_eq!(parser.parse(raw), parser.parse(raw));
}

#[test]
fn first_marker_wins_for_duplicate_labels() {
    let parsed = SectionParser::default().parse("Final Answer: first\nFinal Answer: second");
    assert_eq!(parsed.get("Final Answer"), Some("first"));
}

#[test]
fn mid_line_label_text_is_not_a_boundary() {
    let raw = "Task Execution: compute, then write Final Answer: later\nFinal Answer: 7";
    let parsed = SectionParser::default().parse(raw);
    assert_eq!(
        parsed.get("Task Execution"),
        Some("compute, then write Final Answer: later")
    );
}

#[test]
fn first_occurrence_may_be_mid_line() {
    // The marker search is not anchored; only the end boundary is.
    let parsed = SectionParser::default().parse("Answer below. Final Answer: 12");
    assert_eq!(parsed.get("Final Answer"), Some("12"));
}

#[test]
fn sections_may_appear_out_of_order() {
    let parsed = SectionParser::default().parse("Final Answer: y\nThinking Role: x");
    assert_eq!(parsed.get("Final Answer"), Some("y"));
    assert_eq!(parsed.get("Thinking Role"), Some("x"));
}

#[test]
fn whitespace_only_content_is_absent() {
    let parsed = SectionParser::default().parse("Thinking Role:   \nFinal Answer: done");
    assert_eq!(parsed.get("Thinking Role"), None);
    assert_eq!(parsed.get("Final Answer"), Some("done"));
}

#[test]
fn prose_ending_in_a_colon_stays_in_the_section() {
    let raw = "Task Execution: I will add the numbers.\nHere are the steps:\n1. 1 + 2 = 3\nFinal Answer: 3";
    let parsed = SectionParser::default().parse(raw);
    assert_eq!(
        parsed.get("Task Execution"),
        Some("I will add the numbers.\nHere are the steps:\n1. 1 + 2 = 3")
    );
    assert_eq!(parsed.get("Final Answer"), Some("3"));
}

#[test]
fn numbered_step_lines_stay_in_the_section() {
    let raw = "Task Execution:\nStep 1: gather\nStep 2: sum\nFinal Answer: 3";
    let parsed = SectionParser::default().parse(raw);
    assert_eq!(parsed.get("Task Execution"), Some("Step 1: gather\nStep 2: sum"));
    assert_eq!(parsed.get("Final Answer"), Some("3"));
}

#[test]
fn unrelated_line_start_word_colon_ends_a_section() {
    // Known limitation of the line-start heading rule: a content line that
    // starts with a single word and a colon ("Note: ...") is read as a new
    // heading and cuts the section short.
    let raw = "Task Execution: step one\nNote: careful\nFinal Answer: 3";
    let parsed = SectionParser::default().parse(raw);
    assert_eq!(parsed.get("Task Execution"), Some("step one"));
}

#[test]
fn labels_only_rule_keeps_unrelated_headings_in_content() {
    let parser = SectionParser::with_boundary(SectionLabels::default(), BoundaryRule::LabelsOnly);
    let raw = "Task Execution: step one\nNote: careful\nFinal Answer: 3";
    let parsed = parser.parse(raw);
    assert_eq!(parsed.get("Task Execution"), Some("step one\nNote: careful"));
    assert_eq!(parsed.get("Final Answer"), Some("3"));
}

#[test]
fn custom_labels_and_pattern() {
    let labels = SectionLabels::new(["Summary", "Details"]);
    let boundary = Regex::new(r"(?m)^## ").unwrap();
    let parser = SectionParser::with_boundary(labels, BoundaryRule::Pattern(boundary));

    let parsed = parser.parse("## Summary: short\nmore: words\n## Details: long");
    assert_eq!(parsed.get("Summary"), Some("short\nmore: words"));
    assert_eq!(parsed.get("Details"), Some("long"));
    assert_eq!(parsed.get("Final Answer"), None);
    assert!(!parsed.contains_label("Final Answer"));
}

#[test]
fn labels_are_case_sensitive() {
    let parsed = SectionParser::default().parse("final answer: no\nFINAL ANSWER: no");
    assert_eq!(parsed.get("Final Answer"), None);
}

#[test]
fn populated_lists_only_found_sections_in_label_order() {
    let parsed = SectionParser::default().parse("Final Answer: b\nThinking Role: a");
    let found: Vec<_> = parsed.populated().collect();
    assert_eq!(found, vec![("Thinking Role", "a"), ("Final Answer", "b")]);
    assert_eq!(parsed.populated_count(), 2);
}

#[test]
fn parsed_response_serializes_sections_in_order() {
    let parsed = SectionParser::new(SectionLabels::new(["A", "B"])).parse("A: one");
    let json = serde_json::to_value(&parsed).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "sections": [{ "label": "A", "content": "one" }, { "label": "B" }] })
    );
}
