//! Input resolver - raw menu input to an action
//!
//! Resolution is a pure function of the trimmed input and the curriculum.

use crate::curriculum::{section_prefix, Curriculum};

/// What the session should do with one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Exit,
    ShowProgress,
    ShowNotes,
    /// A topic code known to exist in the curriculum
    RunTopic(String),
    /// The part before the first `.` is not a section
    InvalidSection(String),
    /// The section exists but has no topic with this code
    InvalidTopic(String),
}

/// Command words accepted at the prompt besides topic codes
pub const COMMANDS: &[&str] = &["progress", "notes", "0"];

pub fn resolve(raw: &str, curriculum: &Curriculum) -> Action {
    let input = raw.trim();

    if input == "0" {
        return Action::Exit;
    }
    if input.eq_ignore_ascii_case("progress") {
        return Action::ShowProgress;
    }
    if input.eq_ignore_ascii_case("notes") {
        return Action::ShowNotes;
    }

    let code = input.to_string();
    if curriculum.section_for(section_prefix(input)).is_none() {
        Action::InvalidSection(code)
    } else if !curriculum.contains_topic(input) {
        Action::InvalidTopic(code)
    } else {
        Action::RunTopic(code)
    }
}
