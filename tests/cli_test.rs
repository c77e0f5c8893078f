//! Integration tests for the command-line surface:
//! - One-shot commands (learn, progress, topics, path)
//! - Exit status on bad topic codes
//! - The menu loop over piped stdin

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Isolated home, config dir and progress file for one run
struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn progress_file(&self) -> PathBuf {
        self.dir.path().join("progress")
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_dsa-visualizer"));
        cmd.args(args)
            .arg("--no-color")
            .arg("--progress-file")
            .arg(self.progress_file())
            .env("HOME", self.dir.path())
            .env("XDG_CONFIG_HOME", self.dir.path().join("config"))
            .env_remove("DSA_VISUALIZER_PROGRESS")
            .env_remove("RUST_LOG");
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        self.command(args).stdin(Stdio::null()).output().unwrap()
    }

    fn run_with_input(&self, args: &[&str], input: &str) -> Output {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .unwrap();
        child.stdin.take().unwrap().write_all(input.as_bytes()).unwrap();
        child.wait_with_output().unwrap()
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// =====================================================================
// LEARN
// =====================================================================

#[test]
fn test_learn_unknown_section_fails_without_writing() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["learn", "99"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid section number: '99'"));
    assert!(!sandbox.progress_file().exists());
}

#[test]
fn test_learn_unknown_topic_fails_without_writing() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["learn", "2.99"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid topic number: '2.99'"));
    assert!(!sandbox.progress_file().exists());
}

#[test]
fn test_learn_menu_command_is_rejected() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["learn", "progress"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("menu command"));
}

#[test]
fn test_learn_placeholder_topic_is_recorded() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["learn", "12.2"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Topic not yet implemented: suffix_array"));
    let contents = std::fs::read_to_string(sandbox.progress_file()).unwrap();
    assert_eq!(contents.lines().collect::<Vec<_>>(), vec!["12.2"]);
}

#[test]
fn test_learn_twice_keeps_one_entry() {
    let sandbox = Sandbox::new();
    assert!(sandbox.run(&["learn", "2.1"]).status.success());
    assert!(sandbox.run(&["learn", "1.1"]).status.success());
    assert!(sandbox.run(&["learn", " 2.1 "]).status.success());

    let contents = std::fs::read_to_string(sandbox.progress_file()).unwrap();
    assert_eq!(contents.lines().collect::<Vec<_>>(), vec!["2.1", "1.1"]);
}

// =====================================================================
// PROGRESS / TOPICS / PATH
// =====================================================================

#[test]
fn test_progress_summary() {
    let sandbox = Sandbox::new();
    std::fs::write(sandbox.progress_file(), "2.1\n42.7\n").unwrap();

    let output = sandbox.run(&["progress"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Completed: 1/72 topics"));
    assert!(out.contains("   • 2.1 Arrays"));
    assert!(out.contains("   • 42.7 (no longer in curriculum)"));
    assert!(!out.contains('\x1b'));
}

#[test]
fn test_topics_marks_completed() {
    let sandbox = Sandbox::new();
    std::fs::write(sandbox.progress_file(), "3.1\n").unwrap();

    let out = stdout(&sandbox.run(&["topics"]));
    assert!(out.contains("📚 CURRICULUM"));
    assert!(out.contains("   2.1. Arrays\n"));
    assert!(out.contains(" ✓"));
}

#[test]
fn test_topics_json() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["topics", "--json"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let sections = json.as_array().unwrap();
    assert_eq!(sections.len(), 12);

    let topics: usize = sections.iter().map(|s| s["topics"].as_array().unwrap().len()).sum();
    assert_eq!(topics, 72);

    let arrays = &sections[1]["topics"][0];
    assert_eq!(arrays["code"], "2.1");
    assert_eq!(arrays["display_name"], "Arrays");
    assert_eq!(arrays["content_key"], "array");
}

#[test]
fn test_path_listing_and_unknown_path() {
    let sandbox = Sandbox::new();
    let listing = stdout(&sandbox.run(&["path"]));
    for name in ["interview", "web", "competition", "systems", "fundamentals"] {
        assert!(listing.contains(name), "missing path {}", name);
    }

    let output = sandbox.run(&["path", "gamedev"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Unknown learning path 'gamedev'"));
}

// =====================================================================
// PIPED SESSION
// =====================================================================

#[test]
fn test_piped_session_shows_progress_and_exits() {
    let sandbox = Sandbox::new();
    std::fs::write(sandbox.progress_file(), "2.1\n").unwrap();

    // Acknowledgements read one line each over a pipe
    let output = sandbox.run_with_input(&[], "progress\n\n0\n");
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("Completed: 1/72"));
    assert!(out.contains("Happy Learning!"));
}

#[test]
fn test_piped_session_records_topic_and_ends_at_eof() {
    let sandbox = Sandbox::new();
    let output = sandbox.run_with_input(&["start"], "1.4\n\n");
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert!(stdout(&output).contains("Happy Learning!"));
    let contents = std::fs::read_to_string(sandbox.progress_file()).unwrap();
    assert_eq!(contents.trim(), "1.4");
}

#[test]
fn test_piped_path_walk() {
    let sandbox = Sandbox::new();
    let output = sandbox.run_with_input(&["path", "fundamentals"], "\n\ns\n\n\n\n");
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("Topic 1/4"));
    assert!(out.contains("Learning Path Completed"));
    let completed = std::fs::read_to_string(sandbox.progress_file()).unwrap();
    assert_eq!(completed.lines().collect::<Vec<_>>(), vec!["1.1", "1.3", "1.4"]);
}
