//! Integration tests for the interactive session:
//! - Menu loop driven by a scripted terminal
//! - Topic dispatch, fallback content and progress recording
//! - Learning path walks

use std::collections::VecDeque;
use std::io;

use dsa_visualizer::content::ContentRegistry;
use dsa_visualizer::curriculum::{Curriculum, Section, Topic};
use dsa_visualizer::paths;
use dsa_visualizer::progress::{CompletionSet, ProgressStore};
use dsa_visualizer::session::{
    dispatch_topic, ReadLine, Session, SessionState, Terminal, TopicOutcome, FAREWELL, PROMPT,
};
use dsa_visualizer::ui::Canvas;
use tempfile::TempDir;

/// Terminal that replays canned input and records everything printed
#[derive(Default)]
struct ScriptedTerminal {
    input: VecDeque<ReadLine>,
    out: Vec<u8>,
    prompts: Vec<String>,
    keys_read: usize,
    clears: usize,
}

impl ScriptedTerminal {
    fn new(lines: &[&str]) -> Self {
        Self {
            input: lines.iter().map(|l| ReadLine::Line(l.to_string())).collect(),
            ..Default::default()
        }
    }

    fn then(mut self, next: ReadLine) -> Self {
        self.input.push_back(next);
        self
    }

    fn output(&self) -> String {
        String::from_utf8_lossy(&self.out).into_owned()
    }
}

impl Terminal for ScriptedTerminal {
    fn canvas(&mut self) -> Canvas<'_> {
        Canvas::new(&mut self.out, false)
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        self.clears += 1;
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<ReadLine> {
        self.prompts.push(prompt.to_string());
        Ok(self.input.pop_front().unwrap_or(ReadLine::Eof))
    }

    fn read_key(&mut self) -> io::Result<()> {
        self.keys_read += 1;
        Ok(())
    }
}

struct Fixture {
    _dir: TempDir,
    curriculum: Curriculum,
    registry: ContentRegistry,
    store: ProgressStore,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let store = ProgressStore::new(dir.path().join(".dsa_visualizer_progress"));
        Self {
            _dir: dir,
            curriculum: Curriculum::standard().unwrap(),
            registry: ContentRegistry::standard(),
            store,
        }
    }

    fn run(&self, terminal: &mut ScriptedTerminal) {
        let mut session = Session::new(&self.curriculum, &self.registry, &self.store, terminal);
        session.run().unwrap();
        assert_eq!(session.state(), SessionState::Terminated);
    }
}

// =====================================================================
// MENU LOOP
// =====================================================================

#[test]
fn test_fresh_start_then_arrays_is_recorded() {
    let fx = Fixture::new();
    let mut terminal = ScriptedTerminal::new(&["2.1", "0"]);
    fx.run(&mut terminal);

    let completed = fx.store.try_load().unwrap();
    assert_eq!(completed, ["2.1"].into_iter().collect::<CompletionSet>());

    let out = terminal.output();
    assert!(out.contains("DSA VISUALIZER - Zero to Hero"));
    // First menu unmarked, second one after the lesson marked
    assert!(out.contains("   2.1. Arrays\n"));
    assert!(out.contains("   2.1. Arrays ✓\n"));
    assert!(out.contains(FAREWELL));
    assert_eq!(terminal.keys_read, 1);
    assert_eq!(terminal.prompts, vec![PROMPT, PROMPT]);
    // menu, lesson, menu
    assert_eq!(terminal.clears, 3);
}

#[test]
fn test_repeated_topic_is_stored_once() {
    let fx = Fixture::new();
    let mut terminal = ScriptedTerminal::new(&["2.1", " 2.1 ", "0"]);
    fx.run(&mut terminal);

    let contents = std::fs::read_to_string(fx.store.path().unwrap()).unwrap();
    assert_eq!(contents.lines().collect::<Vec<_>>(), vec!["2.1"]);
}

#[test]
fn test_invalid_input_changes_nothing() {
    let fx = Fixture::new();
    let mut terminal = ScriptedTerminal::new(&["99", "2.99", "hello", "0"]);
    fx.run(&mut terminal);

    assert!(!fx.store.path().unwrap().exists());
    let out = terminal.output();
    assert_eq!(out.matches("❌ Invalid section number!").count(), 2);
    assert_eq!(out.matches("❌ Invalid topic number!").count(), 1);
    assert_eq!(terminal.keys_read, 3);
}

#[test]
fn test_progress_and_notes_screens() {
    let fx = Fixture::new();
    fx.store.mark_completed("2.1").unwrap();
    fx.store.mark_completed("99.1").unwrap();

    let mut terminal = ScriptedTerminal::new(&["PROGRESS", "notes", "0"]);
    fx.run(&mut terminal);

    let out = terminal.output();
    assert!(out.contains("📊 YOUR LEARNING PROGRESS"));
    assert!(out.contains("Completed: 1/72 topics"));
    assert!(out.contains("1%"));
    assert!(out.contains("   • 2.1 Arrays"));
    assert!(out.contains("   • 99.1 (no longer in curriculum)"));
    assert!(out.contains("📝 YOUR NOTES"));
    assert_eq!(terminal.keys_read, 2);
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let fx = Fixture::new();
    let mut terminal = ScriptedTerminal::default();
    fx.run(&mut terminal);

    assert!(terminal.output().contains(FAREWELL));
    assert_eq!(terminal.prompts.len(), 1);
}

#[test]
fn test_interrupt_redraws_menu() {
    let fx = Fixture::new();
    let mut terminal = ScriptedTerminal::default()
        .then(ReadLine::Interrupted)
        .then(ReadLine::Line("0".to_string()));
    fx.run(&mut terminal);

    let out = terminal.output();
    assert_eq!(out.matches("📚 CURRICULUM").count(), 2);
    assert_eq!(terminal.keys_read, 0);
    assert!(!fx.store.path().unwrap().exists());
}

// =====================================================================
// TOPIC DISPATCH
// =====================================================================

#[test]
fn test_missing_content_falls_back_and_still_records() {
    let fx = Fixture::new();
    let mut terminal = ScriptedTerminal::new(&["12.2", "0"]);
    fx.run(&mut terminal);

    let out = terminal.output();
    assert!(out.contains("❌ Topic not yet implemented: suffix_array"));
    assert!(out.contains("Coming soon in the next update!"));
    assert!(fx.store.try_load().unwrap().contains("12.2"));
}

#[test]
fn test_custom_curriculum_with_unregistered_key() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProgressStore::new(dir.path().join("progress"));
    let curriculum = Curriculum::new(vec![Section::new(
        "1",
        "EXTRAS",
        vec![Topic::new("1.1", "Splay Tree", "splay_tree")],
    )])
    .unwrap();
    let registry = ContentRegistry::new();

    let mut buf = Vec::new();
    let outcome = {
        let mut canvas = Canvas::new(&mut buf, false);
        dispatch_topic(curriculum.topic_for("1.1").unwrap(), &registry, &store, &mut canvas).unwrap()
    };

    assert_eq!(outcome, TopicOutcome::Fallback);
    assert!(String::from_utf8(buf).unwrap().contains("splay_tree"));
    assert!(store.try_load().unwrap().contains("1.1"));
}

fn broken(_: &mut Canvas<'_>) -> io::Result<()> {
    Err(io::Error::new(io::ErrorKind::Other, "boom"))
}

#[test]
fn test_failed_render_is_not_recorded() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProgressStore::new(dir.path().join("progress"));
    let curriculum = Curriculum::new(vec![Section::new(
        "1",
        "EXTRAS",
        vec![Topic::new("1.1", "Broken", "broken")],
    )])
    .unwrap();
    let mut registry = ContentRegistry::new();
    registry.register("broken", broken);

    let mut buf = Vec::new();
    let outcome = {
        let mut canvas = Canvas::new(&mut buf, false);
        dispatch_topic(curriculum.topic_for("1.1").unwrap(), &registry, &store, &mut canvas).unwrap()
    };

    assert_eq!(outcome, TopicOutcome::Failed);
    assert!(String::from_utf8(buf).unwrap().contains("Could not display Broken"));
    assert!(!store.path().unwrap().exists());
}

#[test]
fn test_unwritable_progress_warns_and_continues() {
    let dir = tempfile::tempdir().unwrap();
    // A directory where the file should be: reads and writes both fail
    let store = ProgressStore::new(dir.path());
    let curriculum = Curriculum::standard().unwrap();
    let registry = ContentRegistry::standard();

    let mut terminal = ScriptedTerminal::new(&["1.1", "0"]);
    let mut session = Session::new(&curriculum, &registry, &store, &mut terminal);
    session.run().unwrap();

    let out = terminal.output();
    assert!(out.contains("⚠️  Progress not saved"));
    assert!(out.contains(FAREWELL));
}

#[test]
fn test_session_without_progress_location() {
    let curriculum = Curriculum::standard().unwrap();
    let registry = ContentRegistry::standard();
    let store = ProgressStore::unavailable();

    let mut terminal = ScriptedTerminal::new(&["2.1", "progress", "0"]);
    let mut session = Session::new(&curriculum, &registry, &store, &mut terminal);
    session.run().unwrap();
    assert_eq!(session.state(), SessionState::Terminated);

    let out = terminal.output();
    assert!(out.contains("⚠️  Progress not saved: could not determine the home directory"));
    assert!(out.contains("Completed: 0/72 topics"));
    assert!(out.contains(FAREWELL));
}

// =====================================================================
// LEARNING PATHS
// =====================================================================

#[test]
fn test_fundamentals_path_with_skip() {
    let fx = Fixture::new();
    let path = paths::find("fundamentals").unwrap();
    let mut terminal = ScriptedTerminal::new(&["", "s", "", ""]);

    let report = {
        let mut session = Session::new(&fx.curriculum, &fx.registry, &fx.store, &mut terminal);
        session.run_path(path).unwrap()
    };

    assert!(report.finished);
    assert_eq!(report.completed, 3);
    assert_eq!(report.skipped, 1);

    let completed = fx.store.try_load().unwrap();
    assert_eq!(completed, ["1.1", "1.3", "1.4"].into_iter().collect::<CompletionSet>());

    let out = terminal.output();
    assert!(out.contains("Topic 1/4: Time & Space Complexity"));
    assert!(out.contains("🎉 Learning Path Completed! 🎉"));
    assert!(out.contains("Completed 3 topics, skipped 1."));
}

#[test]
fn test_path_stops_at_end_of_input() {
    let fx = Fixture::new();
    let path = paths::find("interview").unwrap();
    let mut terminal = ScriptedTerminal::new(&[""]);

    let report = {
        let mut session = Session::new(&fx.curriculum, &fx.registry, &fx.store, &mut terminal);
        session.run_path(path).unwrap()
    };

    assert!(!report.finished);
    assert_eq!(report.completed, 1);
    assert!(!terminal.output().contains("Learning Path Completed"));
    assert_eq!(fx.store.try_load().unwrap().len(), 1);
}
