//! Declarative lessons
//!
//! Most topics are a fixed arrangement of prose, a Rust/C++ comparison and a
//! handful of summary blocks. A [`Lesson`] holds those pieces as static data
//! and renders them in a fixed order; anything that needs to run code (a toy
//! heap, a sort trace) goes in the optional demo routine.

use std::io;

use crossterm::style::Color;

use super::ContentHandler;
use crate::ui::{Application, Canvas, Problem};

/// Demo routine run between the comparisons and the summary blocks
pub type Demo = fn(&mut Canvas<'_>) -> io::Result<()>;

/// One titled Rust vs C++ comparison
#[derive(Debug, Clone, Copy)]
pub struct Comparison {
    pub heading: &'static str,
    pub rust: &'static str,
    pub cpp: &'static str,
    pub explanation: &'static str,
}

#[derive(Clone, Copy)]
pub struct Lesson {
    /// Short name used in the notes banner
    pub name: &'static str,
    pub title: &'static str,
    pub concept: &'static [&'static str],
    /// Placeholder lines for lessons that are still being written
    pub coming_soon: &'static [&'static str],
    pub comparisons: &'static [Comparison],
    pub demo: Option<Demo>,
    pub complexity: &'static [(&'static str, &'static str)],
    pub space: Option<(&'static str, &'static str)>,
    pub notes: &'static [&'static str],
    pub key_points: &'static [&'static str],
    pub use_when: &'static [&'static str],
    pub avoid_when: &'static [&'static str],
    pub applications: &'static [Application],
    pub mistakes: &'static [&'static str],
    pub practice: &'static [Problem],
}

impl Lesson {
    pub const EMPTY: Lesson = Lesson {
        name: "",
        title: "",
        concept: &[],
        coming_soon: &[],
        comparisons: &[],
        demo: None,
        complexity: &[],
        space: None,
        notes: &[],
        key_points: &[],
        use_when: &[],
        avoid_when: &[],
        applications: &[],
        mistakes: &[],
        practice: &[],
    };

    pub fn render_to(&self, canvas: &mut Canvas<'_>) -> io::Result<()> {
        canvas.header(self.title)?;

        if !self.concept.is_empty() {
            canvas.blank()?;
            canvas.strong_line("📖 CONCEPT:", Color::Cyan)?;
            canvas.rule('─', crate::ui::WIDTH)?;
            for line in self.concept {
                canvas.line(line)?;
            }
        }

        if !self.coming_soon.is_empty() {
            canvas.blank()?;
            for line in self.coming_soon {
                canvas.line(&format!("📚 {}", line))?;
            }
        }

        let mut section = 0;
        for cmp in self.comparisons {
            section += 1;
            canvas.section(&format!("{}. {}", section, cmp.heading))?;
            canvas.comparison(cmp.rust, cmp.cpp, cmp.explanation)?;
        }

        if let Some(demo) = self.demo {
            section += 1;
            canvas.section(&format!("{}. Walkthrough", section))?;
            demo(canvas)?;
        }

        if !self.complexity.is_empty() {
            canvas.time_complexity(self.complexity)?;
        }
        if let Some((complexity, explanation)) = self.space {
            canvas.space_complexity(complexity, explanation)?;
        }
        if !self.notes.is_empty() {
            canvas.notes(self.name, self.notes)?;
        }
        if !self.key_points.is_empty() {
            canvas.key_points(self.key_points)?;
        }
        if !self.use_when.is_empty() {
            canvas.when_to_use(self.use_when)?;
        }
        if !self.avoid_when.is_empty() {
            canvas.when_not_to_use(self.avoid_when)?;
        }
        if !self.applications.is_empty() {
            canvas.applications(self.applications)?;
        }
        if !self.mistakes.is_empty() {
            canvas.common_mistakes(self.mistakes)?;
        }
        if !self.practice.is_empty() {
            canvas.practice_problems(self.practice)?;
        }
        Ok(())
    }
}

impl ContentHandler for Lesson {
    fn render(&self, canvas: &mut Canvas<'_>) -> io::Result<()> {
        self.render_to(canvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walkthrough(canvas: &mut Canvas<'_>) -> io::Result<()> {
        canvas.line("demo ran")
    }

    const SAMPLE: Lesson = Lesson {
        name: "Sample",
        title: "SAMPLE - A Lesson",
        concept: &["First concept line"],
        comparisons: &[Comparison {
            heading: "Implementation Comparison",
            rust: "let v = vec![1];",
            cpp: "std::vector<int> v{1};",
            explanation: "Both grow on the heap.",
        }],
        demo: Some(walkthrough),
        complexity: &[("Access", "O(1)")],
        notes: &["Remember this"],
        ..Lesson::EMPTY
    };

    fn render(lesson: &Lesson) -> String {
        let mut buf = Vec::new();
        {
            let mut canvas = Canvas::new(&mut buf, false);
            lesson.render(&mut canvas).unwrap();
        }
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_render_order() {
        let out = render(&SAMPLE);
        let positions: Vec<usize> = [
            "SAMPLE - A Lesson",
            "First concept line",
            "1. Implementation Comparison",
            "2. Walkthrough",
            "demo ran",
            "Access",
            "IMPORTANT NOTES - Sample",
        ]
        .iter()
        .map(|needle| out.find(needle).unwrap_or_else(|| panic!("missing {:?}", needle)))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "out of order: {}", out);
    }

    #[test]
    fn test_empty_blocks_are_skipped() {
        let out = render(&SAMPLE);
        assert!(!out.contains("WHEN NOT TO USE"));
        assert!(!out.contains("PRACTICE PROBLEMS"));
        assert!(!out.contains("SPACE COMPLEXITY"));
    }
}
