//! Menu rendering
//!
//! Pure formatting over the curriculum and the completion set. Every
//! `render_*` function returns the finished text; [`print_colored`] is the
//! one place that decides how that text looks on a terminal.

use std::io;

use crossterm::style::Color;

use crate::curriculum::Curriculum;
use crate::progress::CompletionSet;
use crate::ui::Canvas;

/// Cells in the progress bar
pub const BAR_WIDTH: usize = 50;

const RULE_WIDTH: usize = 80;
const BANNER_WIDTH: usize = 78;

/// Boxed title shown above the menu
pub fn render_header() -> String {
    let mut out = String::new();
    out.push_str(&format!("╔{}╗\n", "═".repeat(BANNER_WIDTH)));
    out.push_str(&format!("║{}║\n", crate::ui::center(" DSA VISUALIZER - Zero to Hero ", BANNER_WIDTH)));
    out.push_str(&format!(
        "║{}║\n",
        crate::ui::center(" Rust vs C++ Implementation Comparison ", BANNER_WIDTH)
    ));
    out.push_str(&format!("╚{}╝\n", "═".repeat(BANNER_WIDTH)));
    out
}

/// Every section header followed by its topics, in curriculum order
pub fn render_curriculum(curriculum: &Curriculum) -> String {
    render_menu(curriculum, None)
}

/// Same as [`render_curriculum`] with a check mark after completed topics
pub fn render_curriculum_marked(curriculum: &Curriculum, completed: &CompletionSet) -> String {
    render_menu(curriculum, Some(completed))
}

fn render_menu(curriculum: &Curriculum, completed: Option<&CompletionSet>) -> String {
    let mut out = String::from("📚 CURRICULUM\n");
    out.push_str(&rule('─'));
    for section in curriculum.sections() {
        out.push('\n');
        out.push_str(&format!("{}. {}\n", section.code, section.title));
        for topic in &section.topics {
            let done = completed.is_some_and(|set| set.contains(&topic.code));
            let mark = if done { " ✓" } else { "" };
            out.push_str(&format!("   {}. {}{}\n", topic.code, topic.display_name, mark));
        }
    }
    out
}

/// Static list of recognised commands
pub fn render_command_help() -> String {
    let mut out = String::from("\n");
    out.push_str(&rule('─'));
    out.push_str("Commands:\n");
    out.push_str("  • Enter topic number (e.g., 2.1 for Arrays)\n");
    out.push_str("  • Type 'progress' to see your learning progress\n");
    out.push_str("  • Type 'notes' to view saved notes\n");
    out.push_str("  • Type '0' to exit\n");
    out.push_str(&rule('─'));
    out
}

/// `█` for each filled cell, `░` for the rest
pub fn progress_bar(filled: usize, width: usize) -> String {
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Completed/total, bar, percentage and the list of completed codes
pub fn render_progress_summary(completed: &CompletionSet, curriculum: &Curriculum) -> String {
    let summary = completed.summarize(curriculum);
    let mut out = String::from("📊 YOUR LEARNING PROGRESS\n");
    out.push_str(&rule('═'));
    out.push('\n');
    out.push_str(&format!("Completed: {}/{} topics\n", summary.completed_count(), summary.total));
    out.push_str(&format!(
        "Progress: {} {}%\n",
        progress_bar(summary.filled(BAR_WIDTH), BAR_WIDTH),
        summary.percent()
    ));

    if summary.completed.is_empty() && summary.stale.is_empty() {
        return out;
    }

    out.push_str("\n✅ Completed Topics:\n");
    for code in &summary.completed {
        match curriculum.topic_for(code) {
            Some(topic) => out.push_str(&format!("   • {} {}\n", code, topic.display_name)),
            None => out.push_str(&format!("   • {}\n", code)),
        }
    }
    for code in &summary.stale {
        out.push_str(&format!("   • {} (no longer in curriculum)\n", code));
    }
    out
}

fn rule(ch: char) -> String {
    format!("{}\n", ch.to_string().repeat(RULE_WIDTH))
}

/// Print rendered menu text, colouring titles and section headers
pub fn print_colored(canvas: &mut Canvas<'_>, text: &str) -> io::Result<()> {
    for line in text.lines() {
        match line.chars().next() {
            Some('📚') | Some('📊') => canvas.strong_line(line, Color::Green)?,
            Some('✅') => canvas.colored_line(line, Color::Green)?,
            Some(c) if c.is_ascii_digit() => canvas.strong_line(line, Color::Yellow)?,
            _ if line == "Commands:" => canvas.colored_line(line, Color::Cyan)?,
            _ => canvas.line(line)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curriculum() -> Curriculum {
        Curriculum::standard().unwrap()
    }

    #[test]
    fn test_curriculum_lists_sections_in_order() {
        let text = render_curriculum(&curriculum());
        let first = text.find("\n1. Fundamentals").unwrap();
        let arrays = text.find("   2.1. Arrays").unwrap();
        let last = text.find("\n12. Advanced Data Structures").unwrap();
        assert!(first < arrays && arrays < last);
        assert!(!text.contains('✓'));
    }

    #[test]
    fn test_every_topic_is_listed() {
        let c = curriculum();
        let text = render_curriculum(&c);
        for topic in c.all_topics() {
            assert!(text.contains(&format!("   {}. {}", topic.code, topic.display_name)));
        }
    }

    #[test]
    fn test_marked_menu() {
        let done: CompletionSet = ["2.1"].into_iter().collect();
        let text = render_curriculum_marked(&curriculum(), &done);
        assert!(text.contains("   2.1. Arrays ✓"));
        assert!(text.contains("   2.2. Strings\n"));
    }

    #[test]
    fn test_command_help() {
        let help = render_command_help();
        assert!(help.contains("'progress'"));
        assert!(help.contains("'notes'"));
        assert!(help.contains("'0' to exit"));
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(12, 50).chars().filter(|&c| c == '█').count(), 12);
        assert_eq!(progress_bar(12, 50).chars().count(), 50);
        assert_eq!(progress_bar(99, 10), "█".repeat(10));
    }

    #[test]
    fn test_progress_summary_counts() {
        let done: CompletionSet = ["2.1", "1.1", "77.7"].into_iter().collect();
        let text = render_progress_summary(&done, &curriculum());
        assert!(text.contains("Completed: 2/72 topics"));
        // 2 * 50 / 72 = 1 filled, 2 * 100 / 72 = 2%
        assert!(text.contains(&format!("Progress: {} 2%", progress_bar(1, BAR_WIDTH))));
        assert!(text.contains("   • 2.1 Arrays"));
        assert!(text.contains("   • 77.7 (no longer in curriculum)"));
    }

    #[test]
    fn test_empty_progress() {
        let text = render_progress_summary(&CompletionSet::new(), &curriculum());
        assert!(text.contains("Completed: 0/72 topics"));
        assert!(text.contains(" 0%"));
        assert!(!text.contains("Completed Topics"));
    }

    #[test]
    fn test_print_colored_styles_headers_only_with_color() {
        let text = render_progress_summary(&["2.1"].into_iter().collect(), &curriculum());

        let mut plain = Vec::new();
        print_colored(&mut Canvas::new(&mut plain, false), &text).unwrap();
        assert_eq!(String::from_utf8(plain).unwrap(), text);

        let mut styled = Vec::new();
        print_colored(&mut Canvas::new(&mut styled, true), &text).unwrap();
        let styled = String::from_utf8(styled).unwrap();
        assert!(styled.contains('\x1b'));
        assert!(styled.contains("YOUR LEARNING PROGRESS"));
    }

    #[test]
    fn test_header_box_width() {
        for line in render_header().lines() {
            assert_eq!(line.chars().count(), BANNER_WIDTH + 2);
        }
    }
}
