//! Session loop - menu, input, dispatch, acknowledgement
//!
//! The loop owns no global state. The curriculum, content registry,
//! progress store and terminal are handed in by the caller, which keeps the
//! whole flow drivable from tests with a scripted terminal.

pub mod terminal;

use std::io;

use crossterm::style::Color;
use tracing::{debug, info, warn};

use crate::content::{render_fallback, ContentError, ContentRegistry};
use crate::curriculum::{Curriculum, Topic};
use crate::menu;
use crate::paths::LearningPath;
use crate::progress::ProgressStore;
use crate::resolver::{resolve, Action};
use crate::ui::Canvas;

pub use terminal::{ConsoleTerminal, ReadLine, Terminal};

pub const PROMPT: &str = "➤ Enter your choice: ";
pub const FAREWELL: &str = "👋 Happy Learning! Keep practicing DSA!";
const CONTINUE: &str = "Press any key to continue...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// How rendering a topic went
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicOutcome {
    /// The registered lesson rendered
    Rendered,
    /// No lesson for the content key, the placeholder was shown
    Fallback,
    /// The lesson failed part way through
    Failed,
}

impl TopicOutcome {
    /// Placeholders count as visited; a failed render does not
    pub fn counts_as_completed(self) -> bool {
        !matches!(self, TopicOutcome::Failed)
    }
}

/// Render `topic` and record it in the progress store
///
/// A progress write failure is shown as a warning and never aborts the caller.
pub fn dispatch_topic(
    topic: &Topic,
    registry: &ContentRegistry,
    store: &ProgressStore,
    canvas: &mut Canvas<'_>,
) -> io::Result<TopicOutcome> {
    debug!("Dispatching {} ({})", topic.code, topic.content_key);
    let outcome = match registry.invoke(&topic.content_key, canvas) {
        Ok(()) => TopicOutcome::Rendered,
        Err(ContentError::UnknownTopicContent(key)) => {
            render_fallback(canvas, &key)?;
            TopicOutcome::Fallback
        }
        Err(e @ ContentError::Render { .. }) => {
            warn!("{}", e);
            canvas.blank()?;
            canvas.error(&format!("❌ Could not display {}: {}", topic.display_name, e))?;
            TopicOutcome::Failed
        }
    };

    if outcome.counts_as_completed() {
        if let Err(e) = store.mark_completed(&topic.code) {
            warn!("{}", e);
            canvas.blank()?;
            canvas.warning(&format!("⚠️  Progress not saved: {}", e))?;
        }
    }
    Ok(outcome)
}

/// Totals from walking a learning path
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathReport {
    pub completed: usize,
    pub skipped: usize,
    /// False if input ended before the last topic
    pub finished: bool,
}

pub struct Session<'a> {
    curriculum: &'a Curriculum,
    registry: &'a ContentRegistry,
    store: &'a ProgressStore,
    terminal: &'a mut dyn Terminal,
    state: SessionState,
}

impl<'a> Session<'a> {
    pub fn new(
        curriculum: &'a Curriculum,
        registry: &'a ContentRegistry,
        store: &'a ProgressStore,
        terminal: &'a mut dyn Terminal,
    ) -> Self {
        Self {
            curriculum,
            registry,
            store,
            terminal,
            state: SessionState::Running,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Loop until the learner exits
    pub fn run(&mut self) -> io::Result<()> {
        info!("Session started with {} topics", self.curriculum.total_topics());
        while self.state == SessionState::Running {
            self.step()?;
        }
        info!("Session ended");
        Ok(())
    }

    /// One pass: render the menu, read a line, act on it
    pub fn step(&mut self) -> io::Result<()> {
        self.render_menu()?;
        let action = match self.terminal.read_line(PROMPT)? {
            ReadLine::Line(line) => resolve(&line, self.curriculum),
            ReadLine::Interrupted => {
                debug!("Prompt interrupted, redrawing menu");
                return Ok(());
            }
            ReadLine::Eof => Action::Exit,
        };
        self.handle(action)
    }

    pub fn handle(&mut self, action: Action) -> io::Result<()> {
        debug!("Handling {:?}", action);
        match action {
            Action::Exit => {
                self.state = SessionState::Terminated;
                let mut canvas = self.terminal.canvas();
                canvas.blank()?;
                canvas.success(FAREWELL)?;
                canvas.flush()
            }
            Action::ShowProgress => {
                self.terminal.clear_screen()?;
                let completed = self.store.load();
                let summary = menu::render_progress_summary(&completed, self.curriculum);
                menu::print_colored(&mut self.terminal.canvas(), &summary)?;
                self.acknowledge()
            }
            Action::ShowNotes => {
                self.terminal.clear_screen()?;
                let mut canvas = self.terminal.canvas();
                canvas.strong_line("📝 YOUR NOTES", Color::Cyan)?;
                canvas.rule('═', crate::ui::WIDTH)?;
                canvas.blank()?;
                canvas.line("Feature coming soon! Notes will be saved automatically as you learn.")?;
                self.acknowledge()
            }
            Action::InvalidSection(code) => {
                debug!("No section for input {:?}", code);
                self.terminal.canvas().error("❌ Invalid section number!")?;
                self.acknowledge()
            }
            Action::InvalidTopic(code) => {
                debug!("No topic for input {:?}", code);
                self.terminal.canvas().error("❌ Invalid topic number!")?;
                self.acknowledge()
            }
            Action::RunTopic(code) => {
                self.terminal.clear_screen()?;
                self.run_topic(&code)?;
                self.acknowledge()
            }
        }
    }

    /// Render one topic by code and mark it completed
    pub fn run_topic(&mut self, code: &str) -> io::Result<Option<TopicOutcome>> {
        let Some(topic) = self.curriculum.topic_for(code) else {
            self.terminal.canvas().error("❌ Invalid topic number!")?;
            return Ok(None);
        };
        let mut canvas = self.terminal.canvas();
        let outcome = dispatch_topic(topic, self.registry, self.store, &mut canvas)?;
        canvas.flush()?;
        Ok(Some(outcome))
    }

    /// Walk a learning path topic by topic
    ///
    /// Each topic asks for confirmation first; `s` skips it. End of input
    /// stops the walk early.
    pub fn run_path(&mut self, path: &LearningPath) -> io::Result<PathReport> {
        let mut report = PathReport::default();
        let total = path.codes.len();

        self.terminal.clear_screen()?;
        {
            let mut canvas = self.terminal.canvas();
            canvas.success(&format!("✅ Selected: {}", path.title))?;
            canvas.line(path.description)?;
            canvas.line(&format!("Topics to cover: {}", total))?;
        }

        for (idx, code) in path.codes.iter().enumerate() {
            let Some(topic) = self.curriculum.topic_for(code) else {
                warn!("Learning path '{}' references unknown topic {}", path.name, code);
                continue;
            };

            {
                let mut canvas = self.terminal.canvas();
                canvas.header(&format!("Topic {}/{}: {}", idx + 1, total, topic.display_name))?;
                canvas.blank()?;
                canvas.dim("Press Enter to learn (or 's' to skip)...")?;
            }
            match self.terminal.read_line("> ")? {
                ReadLine::Eof | ReadLine::Interrupted => {
                    info!("Learning path '{}' stopped at topic {}", path.name, code);
                    return Ok(report);
                }
                ReadLine::Line(line) if line.trim().eq_ignore_ascii_case("s") => {
                    report.skipped += 1;
                    continue;
                }
                ReadLine::Line(_) => {}
            }

            self.terminal.clear_screen()?;
            let mut canvas = self.terminal.canvas();
            let outcome = dispatch_topic(topic, self.registry, self.store, &mut canvas)?;
            if outcome.counts_as_completed() {
                report.completed += 1;
                canvas.blank()?;
                canvas.success(&format!("✅ Completed: {}", topic.display_name))?;
            }
            if idx + 1 < total {
                self.acknowledge()?;
            }
        }

        report.finished = true;
        let mut canvas = self.terminal.canvas();
        canvas.header("🎉 Learning Path Completed! 🎉")?;
        canvas.blank()?;
        canvas.line(&format!("You've finished the {} path!", path.title))?;
        canvas.line(&format!("Completed {} topics, skipped {}.", report.completed, report.skipped))?;
        canvas.blank()?;
        canvas.line("Next steps:")?;
        canvas.line("  • Review and practice")?;
        canvas.line("  • Solve real problems on LeetCode/HackerRank")?;
        canvas.line("  • Build projects using these concepts")?;
        canvas.flush()?;
        Ok(report)
    }

    fn render_menu(&mut self) -> io::Result<()> {
        self.terminal.clear_screen()?;
        let completed = self.store.load();
        let mut canvas = self.terminal.canvas();
        for line in menu::render_header().lines() {
            canvas.strong_line(line, Color::Cyan)?;
        }
        canvas.blank()?;
        menu::print_colored(&mut canvas, &menu::render_curriculum_marked(self.curriculum, &completed))?;
        menu::print_colored(&mut canvas, &menu::render_command_help())?;
        canvas.blank()?;
        canvas.flush()
    }

    fn acknowledge(&mut self) -> io::Result<()> {
        {
            let mut canvas = self.terminal.canvas();
            canvas.blank()?;
            canvas.dim(CONTINUE)?;
            canvas.flush()?;
        }
        self.terminal.read_key()
    }
}
