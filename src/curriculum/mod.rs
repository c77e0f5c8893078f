//! Curriculum tree - sections and topics addressed by dotted codes
//!
//! The tree is built once at startup from a static table and is read-only
//! afterwards. Code uniqueness is checked when the tree is constructed, so
//! lookups never have to deal with ambiguity.

mod catalog;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// A single addressable unit of learning content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Dotted hierarchical code, e.g. "2.1"
    pub code: String,
    /// Name shown in the menu
    pub display_name: String,
    /// Key used to look up the content handler
    pub content_key: String,
}

impl Topic {
    pub fn new(code: impl Into<String>, display_name: impl Into<String>, content_key: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            display_name: display_name.into(),
            content_key: content_key.into(),
        }
    }
}

/// A named group of topics sharing a top-level code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub code: String,
    pub title: String,
    pub topics: Vec<Topic>,
}

impl Section {
    pub fn new(code: impl Into<String>, title: impl Into<String>, topics: Vec<Topic>) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            topics,
        }
    }

    /// Find a topic of this section by its full code
    pub fn topic(&self, full_code: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.code == full_code)
    }
}

/// Reasons a curriculum table is rejected at construction time
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurriculumError {
    #[error("duplicate section code '{0}'")]
    DuplicateSection(String),
    #[error("duplicate topic code '{0}'")]
    DuplicateTopic(String),
    #[error("topic '{topic}' does not belong to section '{section}'")]
    MisplacedTopic { section: String, topic: String },
    #[error("empty code in section '{0}'")]
    EmptyCode(String),
}

/// Ordered sections with globally unique codes
#[derive(Debug, Clone, Serialize)]
pub struct Curriculum {
    sections: Vec<Section>,
    #[serde(skip)]
    section_index: HashMap<String, usize>,
}

/// The part of a code before the first `.`, or the whole code if it has none
pub fn section_prefix(code: &str) -> &str {
    code.split_once('.').map_or(code, |(section, _)| section)
}

impl Curriculum {
    /// Build a curriculum, rejecting duplicate or misplaced codes
    pub fn new(sections: Vec<Section>) -> Result<Self, CurriculumError> {
        let mut section_index = HashMap::with_capacity(sections.len());
        let mut seen_topics = std::collections::HashSet::new();

        for (idx, section) in sections.iter().enumerate() {
            if section.code.is_empty() {
                return Err(CurriculumError::EmptyCode(section.title.clone()));
            }
            if section_index.insert(section.code.clone(), idx).is_some() {
                return Err(CurriculumError::DuplicateSection(section.code.clone()));
            }

            for topic in &section.topics {
                if topic.code.is_empty() {
                    return Err(CurriculumError::EmptyCode(section.code.clone()));
                }
                // topic_for() finds topics through their prefix, anything else is unreachable
                if section_prefix(&topic.code) != section.code {
                    return Err(CurriculumError::MisplacedTopic {
                        section: section.code.clone(),
                        topic: topic.code.clone(),
                    });
                }
                if !seen_topics.insert(topic.code.as_str()) {
                    return Err(CurriculumError::DuplicateTopic(topic.code.clone()));
                }
            }
        }

        Ok(Self { sections, section_index })
    }

    /// The built-in Fundamentals → Advanced Data Structures curriculum
    pub fn standard() -> Result<Self, CurriculumError> {
        Self::new(catalog::standard_sections())
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section_for(&self, section_code: &str) -> Option<&Section> {
        self.section_index
            .get(section_code)
            .map(|&idx| &self.sections[idx])
    }

    /// Look up a topic by its full code ("2.1" → section "2", then topic "2.1")
    pub fn topic_for(&self, full_code: &str) -> Option<&Topic> {
        self.section_for(section_prefix(full_code))?.topic(full_code)
    }

    /// Every topic, section order then topic order
    pub fn all_topics(&self) -> impl Iterator<Item = &Topic> {
        self.sections.iter().flat_map(|s| s.topics.iter())
    }

    pub fn total_topics(&self) -> usize {
        self.sections.iter().map(|s| s.topics.len()).sum()
    }

    pub fn contains_topic(&self, full_code: &str) -> bool {
        self.topic_for(full_code).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Curriculum {
        Curriculum::new(vec![
            Section::new("1", "Basics", vec![
                Topic::new("1.1", "One", "one"),
                Topic::new("1.2", "Two", "two"),
            ]),
            Section::new("9", "Nine", vec![Topic::new("9.1", "Ninety-one", "nine_one")]),
        ])
        .unwrap()
    }

    #[test]
    fn test_standard_curriculum_builds() {
        let curriculum = Curriculum::standard().unwrap();
        assert_eq!(curriculum.sections().len(), 12);
        assert_eq!(curriculum.total_topics(), 72);
        assert_eq!(curriculum.all_topics().count(), 72);
    }

    #[test]
    fn test_topic_for_every_code() {
        let curriculum = Curriculum::standard().unwrap();
        for topic in curriculum.all_topics() {
            let found = curriculum.topic_for(&topic.code).unwrap();
            assert_eq!(found, topic);
        }
    }

    #[test]
    fn test_topic_for_missing_codes() {
        let curriculum = Curriculum::standard().unwrap();
        for code in ["", "0", "2", "2.", "2.99", "13.1", "99", "9.9.9", ".1", "2.1.1", " 2.1"] {
            assert!(curriculum.topic_for(code).is_none(), "unexpected hit for {:?}", code);
        }
    }

    #[test]
    fn test_known_topics() {
        let curriculum = Curriculum::standard().unwrap();
        let arrays = curriculum.topic_for("2.1").unwrap();
        assert_eq!(arrays.display_name, "Arrays");
        assert_eq!(arrays.content_key, "array");

        let union_find = curriculum.topic_for("12.1").unwrap();
        assert_eq!(union_find.content_key, "union_find");

        assert_eq!(curriculum.section_for("10").unwrap().title, "Advanced Algorithms");
    }

    #[test]
    fn test_all_topics_order() {
        let codes: Vec<_> = small().all_topics().map(|t| t.code.clone()).collect();
        assert_eq!(codes, vec!["1.1", "1.2", "9.1"]);
    }

    #[test]
    fn test_section_prefix() {
        assert_eq!(section_prefix("2.1"), "2");
        assert_eq!(section_prefix("9.9.9"), "9");
        assert_eq!(section_prefix("99"), "99");
        assert_eq!(section_prefix(".5"), "");
    }

    #[test]
    fn test_rejects_duplicate_topic() {
        let err = Curriculum::new(vec![
            Section::new("1", "A", vec![Topic::new("1.1", "x", "x")]),
            Section::new("2", "B", vec![Topic::new("2.1", "y", "y"), Topic::new("2.1", "z", "z")]),
        ])
        .unwrap_err();
        assert_eq!(err, CurriculumError::DuplicateTopic("2.1".into()));
    }

    #[test]
    fn test_rejects_duplicate_section() {
        let err = Curriculum::new(vec![
            Section::new("1", "A", vec![]),
            Section::new("1", "B", vec![]),
        ])
        .unwrap_err();
        assert_eq!(err, CurriculumError::DuplicateSection("1".into()));
    }

    #[test]
    fn test_rejects_misplaced_topic() {
        let err = Curriculum::new(vec![Section::new("1", "A", vec![Topic::new("2.1", "x", "x")])])
            .unwrap_err();
        assert!(matches!(err, CurriculumError::MisplacedTopic { .. }));
    }
}
