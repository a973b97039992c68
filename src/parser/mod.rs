//! Section extraction for free-text model responses.
//!
//! A response such as
//!
//! ```text
//! Thinking Role: Senior analyst
//! Problem Definition: ...
//! Final Answer: 42
//! ```
//!
//! is split into one optional value per configured label. Parsing never
//! fails: a missing or malformed section simply comes back as `None`.
//!
//! ```
//! use easel::parser::SectionParser;
//!
//! let parsed = SectionParser::default().parse("Thinking Role: X\nFinal Answer: Y");
//! assert_eq!(parsed.get("Thinking Role"), Some("X"));
//! assert_eq!(parsed.get("Problem Definition"), None);
//! assert_eq!(parsed.get("Final Answer"), Some("Y"));
//! ```

pub mod response;

pub use response::{ParsedResponse, Section};

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Labels used when nothing else is configured.
pub const DEFAULT_LABELS: [&str; 4] = [
    "Thinking Role",
    "Problem Definition",
    "Task Execution",
    "Final Answer",
];

// A single word followed by a colon, at the start of a line.
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\w+:").expect("heading boundary regex must compile"));

/// Ordered, de-duplicated set of section labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SectionLabels(Vec<String>);

impl SectionLabels {
    /// Build a label set. Labels are trimmed; blanks and repeats are dropped,
    /// keeping the first occurrence's position.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for label in labels {
            let label = label.into().trim().to_string();
            if !label.is_empty() && !out.contains(&label) {
                out.push(label);
            }
        }
        Self(out)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for SectionLabels {
    fn default() -> Self {
        Self::new(DEFAULT_LABELS)
    }
}

impl From<Vec<String>> for SectionLabels {
    fn from(labels: Vec<String>) -> Self {
        Self::new(labels)
    }
}

impl From<SectionLabels> for Vec<String> {
    fn from(labels: SectionLabels) -> Self {
        labels.0
    }
}

impl<S: Into<String>> FromIterator<S> for SectionLabels {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::new(iter)
    }
}

/// Where a section's content stops.
#[derive(Debug, Clone, Default)]
pub enum BoundaryRule {
    /// A single `Word:` or one of the configured `<label>:` markers at the
    /// start of a line.
    ///
    /// Prose such as `Here are the steps:` or `Step 1:` stays inside the
    /// section. A content line that starts with a lone `Word:` (`Note: ...`)
    /// still ends the section early.
    #[default]
    LineStartHeading,
    /// Only one of the configured `<label>:` markers at the start of a line.
    LabelsOnly,
    /// A caller-supplied regex; should be compiled with `(?m)` when it
    /// anchors on `^`.
    Pattern(Regex),
}

impl BoundaryRule {
    fn compile(&self, labels: &SectionLabels) -> Regex {
        match self {
            Self::LineStartHeading => match label_alternatives(labels) {
                Some(alternatives) => Regex::new(&format!(r"(?m)^(?:\w+|{alternatives}):"))
                    .unwrap_or_else(|_| HEADING_RE.clone()),
                None => HEADING_RE.clone(),
            },
            Self::LabelsOnly => match label_alternatives(labels) {
                Some(alternatives) => Regex::new(&format!("(?m)^(?:{alternatives}):"))
                    .unwrap_or_else(|_| HEADING_RE.clone()),
                None => HEADING_RE.clone(),
            },
            Self::Pattern(re) => re.clone(),
        }
    }
}

fn label_alternatives(labels: &SectionLabels) -> Option<String> {
    (!labels.is_empty()).then(|| {
        labels
            .iter()
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join("|")
    })
}

/// Extracts labelled sections from raw response text.
#[derive(Debug, Clone)]
pub struct SectionParser {
    labels: SectionLabels,
    boundary: Regex,
}

impl Default for SectionParser {
    fn default() -> Self {
        Self::new(SectionLabels::default())
    }
}

impl SectionParser {
    /// Parser with the default line-start heading boundary.
    pub fn new(labels: SectionLabels) -> Self {
        Self::with_boundary(labels, BoundaryRule::default())
    }

    pub fn with_boundary(labels: SectionLabels, rule: BoundaryRule) -> Self {
        let boundary = rule.compile(&labels);
        Self { labels, boundary }
    }

    pub fn labels(&self) -> &SectionLabels {
        &self.labels
    }

    /// Parse `raw` into one entry per configured label.
    pub fn parse(&self, raw: &str) -> ParsedResponse {
        let sections = self
            .labels
            .iter()
            .map(|label| Section {
                label: label.to_string(),
                content: self.extract(raw, label),
            })
            .collect();
        ParsedResponse::new(sections)
    }

    fn extract(&self, raw: &str, label: &str) -> Option<String> {
        let marker = format!("{label}:");
        let start = raw.find(&marker)? + marker.len();
        let end = self
            .boundary
            .find_at(raw, start)
            .map(|m| m.start())
            .unwrap_or(raw.len());
        let content = raw[start..end].trim();
        (!content.is_empty()).then(|| content.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_trimmed_and_deduplicated() {
        let labels = SectionLabels::new([" Summary ", "Steps", "Summary", ""]);
        assert_eq!(labels.iter().collect::<Vec<_>>(), vec!["Summary", "Steps"]);
    }

    #[test]
    fn labels_round_trip_through_plain_string_list() {
        let labels: SectionLabels = serde_json::from_str(r#"["A", "B", "A"]"#).unwrap();
        assert_eq!(labels.len(), 2);
        assert_eq!(serde_json::to_string(&labels).unwrap(), r#"["A","B"]"#);
    }

    #[test]
    fn heading_boundary_is_a_single_word_or_a_label() {
        let boundary = BoundaryRule::LineStartHeading.compile(&SectionLabels::default());
        assert!(boundary.is_match("Problem Definition: x"));
        assert!(boundary.is_match("intro\nNote: x"));
        assert!(!boundary.is_match("see the Note: x"));
        assert!(!boundary.is_match("Here are the steps:"));
        assert!(!boundary.is_match("Step 1: gather"));
    }

    #[test]
    fn heading_boundary_without_labels_is_single_word() {
        let no_labels = SectionLabels::new(Vec::<String>::new());
        let boundary = BoundaryRule::LineStartHeading.compile(&no_labels);
        assert!(boundary.is_match("Note: x"));
        assert!(!boundary.is_match("Final Answer: x"));
    }

    #[test]
    fn labels_only_ignores_unknown_headings() {
        let parser = SectionParser::with_boundary(
            SectionLabels::new(["Final Answer", "Summary"]),
            BoundaryRule::LabelsOnly,
        );
        let parsed = parser.parse("Final Answer: 42\nNote: checked twice\nSummary: done");
        assert_eq!(parsed.get("Final Answer"), Some("42\nNote: checked twice"));
        assert_eq!(parsed.get("Summary"), Some("done"));
    }

    #[test]
    fn labels_with_regex_metacharacters_are_escaped() {
        let parser = SectionParser::with_boundary(
            SectionLabels::new(["Q(1)", "Q(2)"]),
            BoundaryRule::LabelsOnly,
        );
        let parsed = parser.parse("Q(1): first\nQ(2): second");
        assert_eq!(parsed.get("Q(1)"), Some("first"));
        assert_eq!(parsed.get("Q(2)"), Some("second"));
    }

    #[test]
    fn custom_pattern_boundary() {
        let parser = SectionParser::with_boundary(
            SectionLabels::new(["Answer"]),
            BoundaryRule::Pattern(Regex::new(r"(?m)^---$").unwrap()),
        );
        let parsed = parser.parse("Answer: yes\nReason: obvious\n---\nfooter");
        assert_eq!(parsed.get("Answer"), Some("yes\nReason: obvious"));
    }
}
