//! Structured result of parsing one model response.

use serde::{Deserialize, Serialize};

/// One labelled section of a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub label: String,
    /// Trimmed, non-empty text, or `None` when the section was missing or blank.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Every configured label mapped to its (optional) content, in label order.
///
/// A label that did not appear in the response is still present, with
/// `content == None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedResponse {
    sections: Vec<Section>,
}

impl ParsedResponse {
    pub(crate) fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Content for `label`, if the label is declared and was populated.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.label == label)
            .and_then(|s| s.content.as_deref())
    }

    /// Whether `label` is one of the declared labels (populated or not).
    pub fn contains_label(&self, label: &str) -> bool {
        self.sections.iter().any(|s| s.label == label)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Iterate `(label, content)` pairs in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.sections
            .iter()
            .map(|s| (s.label.as_str(), s.content.as_deref()))
    }

    /// Iterate only the sections that have content.
    pub fn populated(&self) -> impl Iterator<Item = (&str, &str)> {
        self.sections
            .iter()
            .filter_map(|s| s.content.as_deref().map(|c| (s.label.as_str(), c)))
    }

    /// Number of sections with content.
    pub fn populated_count(&self) -> usize {
        self.populated().count()
    }

    /// True when no section has content.
    pub fn is_blank(&self) -> bool {
        self.populated_count() == 0
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
