//! Terminal presentation helpers
//!
//! Everything that draws goes through [`Canvas`], which wraps any writer and
//! applies crossterm colours only when colour output is enabled. Lessons,
//! the menu and the session all share it, so a test can render into a
//! `Vec<u8>` and inspect plain text.

use crossterm::style::{Color, Stylize};
use std::io::{self, Write};

/// Full width of banners and comparison boxes
pub const WIDTH: usize = 80;

/// A practice problem shown at the end of a lesson
#[derive(Debug, Clone, Copy)]
pub struct Problem {
    pub title: &'static str,
    pub difficulty: &'static str,
    pub description: &'static str,
}

/// A real-world application of a structure or algorithm
#[derive(Debug, Clone, Copy)]
pub struct Application {
    pub title: &'static str,
    pub description: &'static str,
}

/// Styled writer over an arbitrary output stream
pub struct Canvas<'a> {
    out: &'a mut dyn Write,
    color: bool,
}

impl<'a> Canvas<'a> {
    pub fn new(out: &'a mut dyn Write, color: bool) -> Self {
        Self { out, color }
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    /// Write text without a trailing newline
    pub fn text(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{}", text)
    }

    /// Write a full line
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    /// Write coloured text without a trailing newline
    pub fn colored(&mut self, text: &str, color: Color) -> io::Result<()> {
        if self.color {
            write!(self.out, "{}", text.with(color))
        } else {
            write!(self.out, "{}", text)
        }
    }

    /// Write a coloured, bold line
    pub fn strong_line(&mut self, text: &str, color: Color) -> io::Result<()> {
        if self.color {
            writeln!(self.out, "{}", text.with(color).bold())
        } else {
            writeln!(self.out, "{}", text)
        }
    }

    pub fn colored_line(&mut self, text: &str, color: Color) -> io::Result<()> {
        self.colored(text, color)?;
        self.blank()
    }

    pub fn success(&mut self, text: &str) -> io::Result<()> {
        self.colored_line(text, Color::Green)
    }

    pub fn info(&mut self, text: &str) -> io::Result<()> {
        self.colored_line(text, Color::Cyan)
    }

    pub fn error(&mut self, text: &str) -> io::Result<()> {
        self.colored_line(text, Color::Red)
    }

    pub fn warning(&mut self, text: &str) -> io::Result<()> {
        self.colored_line(text, Color::Yellow)
    }

    pub fn dim(&mut self, text: &str) -> io::Result<()> {
        self.colored_line(text, Color::DarkGrey)
    }

    pub fn rule(&mut self, ch: char, width: usize) -> io::Result<()> {
        writeln!(self.out, "{}", ch.to_string().repeat(width))
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Big lesson banner
    pub fn header(&mut self, title: &str) -> io::Result<()> {
        self.blank()?;
        self.rule('=', WIDTH)?;
        self.strong_line(&center(title, WIDTH), Color::Cyan)?;
        self.rule('=', WIDTH)
    }

    /// Numbered sub-heading inside a lesson
    pub fn section(&mut self, title: &str) -> io::Result<()> {
        self.blank()?;
        self.strong_line(title, Color::Yellow)?;
        self.rule('-', 60)
    }

    pub fn step(&mut self, number: usize, description: &str) -> io::Result<()> {
        self.blank()?;
        self.colored(&format!("[Step {}] ", number), Color::Green)?;
        self.line(description)
    }

    /// Side-by-side (stacked) Rust and C++ implementations with the core difference
    pub fn comparison(&mut self, rust_code: &str, cpp_code: &str, explanation: &str) -> io::Result<()> {
        self.code_box("Rust Implementation", rust_code)?;
        self.code_box("C++ Implementation", cpp_code)?;
        self.blank()?;
        self.colored_line("💡 Core Difference:", Color::Blue)?;
        self.line(&format!("   {}", explanation))
    }

    fn code_box(&mut self, label: &str, code: &str) -> io::Result<()> {
        self.blank()?;
        let top = format!("┌─ {} ", label);
        self.line(&format!("{:─<w$}┐", top, w = WIDTH - 1))?;
        for line in code.lines() {
            let body = format!("│ {}", line);
            self.line(&format!("{:<w$}│", body, w = WIDTH - 1))?;
        }
        self.line(&format!("{:─<w$}┘", "└", w = WIDTH - 1))
    }

    /// `[ 1 | 2 | 3 ]` with an optional highlighted cell
    pub fn array<T: std::fmt::Display>(&mut self, values: &[T], highlight: Option<usize>) -> io::Result<()> {
        self.blank()?;
        self.text("[")?;
        for (idx, value) in values.iter().enumerate() {
            let cell = format!(" {} ", value);
            if Some(idx) == highlight {
                if self.color {
                    write!(self.out, "{}", cell.as_str().on(Color::DarkGreen))?;
                } else {
                    write!(self.out, "*{}*", value)?;
                }
            } else {
                self.text(&cell)?;
            }
            if idx + 1 != values.len() {
                self.text("|")?;
            }
        }
        self.line("]")
    }

    pub fn notes(&mut self, title: &str, notes: &[&str]) -> io::Result<()> {
        self.blank()?;
        self.strong_line(&format!("📝 IMPORTANT NOTES - {}", title), Color::Yellow)?;
        self.rule('═', WIDTH)?;
        for (idx, note) in notes.iter().enumerate() {
            self.line(&format!("{}. {}", idx + 1, note))?;
        }
        self.rule('═', WIDTH)
    }

    pub fn key_points(&mut self, points: &[&str]) -> io::Result<()> {
        self.titled_block("🎯 KEY POINTS TO REMEMBER", Color::Green)?;
        for point in points {
            self.colored_line(&format!("  ✓ {}", point), Color::Green)?;
        }
        self.rule('─', WIDTH)
    }

    pub fn time_complexity(&mut self, operations: &[(&str, &str)]) -> io::Result<()> {
        self.titled_block("⏱️  TIME COMPLEXITY SUMMARY", Color::Cyan)?;
        for (op, complexity) in operations {
            self.colored_line(&format!("  {:<30} → {}", op, complexity), Color::Blue)?;
        }
        self.rule('─', WIDTH)
    }

    pub fn space_complexity(&mut self, complexity: &str, explanation: &str) -> io::Result<()> {
        self.titled_block("💾 SPACE COMPLEXITY", Color::Magenta)?;
        self.line(&format!("  {}", complexity))?;
        self.line(&format!("  {}", explanation))?;
        self.rule('─', WIDTH)
    }

    pub fn when_to_use(&mut self, cases: &[&str]) -> io::Result<()> {
        self.titled_block("✅ WHEN TO USE", Color::Green)?;
        for case in cases {
            self.colored_line(&format!("  ✓ {}", case), Color::Green)?;
        }
        self.rule('─', WIDTH)
    }

    pub fn when_not_to_use(&mut self, cases: &[&str]) -> io::Result<()> {
        self.titled_block("❌ WHEN NOT TO USE", Color::Red)?;
        for case in cases {
            self.colored_line(&format!("  ✗ {}", case), Color::Red)?;
        }
        self.rule('─', WIDTH)
    }

    pub fn applications(&mut self, apps: &[Application]) -> io::Result<()> {
        self.titled_block("🌍 REAL-WORLD APPLICATIONS", Color::Yellow)?;
        for (idx, app) in apps.iter().enumerate() {
            self.colored_line(&format!("  {}. {}", idx + 1, app.title), Color::Yellow)?;
            self.line(&format!("     {}", app.description))?;
        }
        self.rule('─', WIDTH)
    }

    pub fn common_mistakes(&mut self, mistakes: &[&str]) -> io::Result<()> {
        self.titled_block("⚠️  COMMON MISTAKES TO AVOID", Color::Red)?;
        for mistake in mistakes {
            self.colored_line(&format!("  ⚠  {}", mistake), Color::Red)?;
        }
        self.rule('─', WIDTH)
    }

    pub fn practice_problems(&mut self, problems: &[Problem]) -> io::Result<()> {
        self.titled_block("💪 PRACTICE PROBLEMS", Color::Cyan)?;
        for (idx, p) in problems.iter().enumerate() {
            self.colored_line(&format!("  {}. {} [{}]", idx + 1, p.title, p.difficulty), Color::Cyan)?;
            self.line(&format!("     {}", p.description))?;
        }
        self.rule('─', WIDTH)
    }

    fn titled_block(&mut self, title: &str, color: Color) -> io::Result<()> {
        self.blank()?;
        self.strong_line(title, color)?;
        self.rule('─', WIDTH)
    }
}

/// Center `text` in a field of `width` characters
pub fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Canvas<'_>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        {
            let mut canvas = Canvas::new(&mut buf, false);
            f(&mut canvas).unwrap();
        }
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_center() {
        assert_eq!(center("ab", 6), "  ab  ");
        assert_eq!(center("abc", 6), " abc  ");
        assert_eq!(center("too long", 4), "too long");
    }

    #[test]
    fn test_plain_output_has_no_escape_codes() {
        let out = render(|c| {
            c.header("STACK")?;
            c.error("bad")?;
            c.key_points(&["LIFO"])
        });
        assert!(!out.contains('\x1b'), "escape codes in: {:?}", out);
        assert!(out.contains("STACK"));
        assert!(out.contains("  ✓ LIFO"));
    }

    #[test]
    fn test_comparison_boxes_are_aligned() {
        let out = render(|c| c.comparison("let x = 1;", "int x = 1;", "same"));
        let boxed: Vec<&str> = out
            .lines()
            .filter(|l| l.starts_with('┌') || l.starts_with('│') || l.starts_with('└'))
            .collect();
        assert_eq!(boxed.len(), 6);
        for line in boxed {
            assert_eq!(line.chars().count(), WIDTH, "misaligned: {:?}", line);
        }
        assert!(out.contains("┌─ Rust Implementation"));
        assert!(out.contains("┌─ C++ Implementation"));
    }

    #[test]
    fn test_array_highlight_plain() {
        let out = render(|c| c.array(&[1, 2, 3], Some(1)));
        assert!(out.contains("[ 1 |*2*| 3 ]"), "got {:?}", out);
    }

    #[test]
    fn test_colored_output_when_enabled() {
        let mut buf = Vec::new();
        {
            let mut canvas = Canvas::new(&mut buf, true);
            canvas.success("done").unwrap();
        }
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("done"));
    }
}
