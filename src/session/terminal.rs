//! Terminal capability used by the session
//!
//! The session only talks to [`Terminal`]. [`ConsoleTerminal`] is the real
//! implementation: crossterm for clearing, colours and single keypresses,
//! rustyline for line editing with completion of topic codes.

use std::collections::BTreeMap;
use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::Result;
use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{self, Clear, ClearType};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Editor, Helper};
use tracing::debug;

use crate::curriculum::Curriculum;
use crate::resolver::COMMANDS;
use crate::ui::Canvas;

/// Result of reading one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadLine {
    Line(String),
    /// Ctrl-C at the prompt
    Interrupted,
    /// Ctrl-D or closed input
    Eof,
}

pub trait Terminal {
    /// Writer for everything the session prints
    fn canvas(&mut self) -> Canvas<'_>;

    fn clear_screen(&mut self) -> io::Result<()>;

    fn read_line(&mut self, prompt: &str) -> io::Result<ReadLine>;

    /// Block until a single acknowledgement keypress
    fn read_key(&mut self) -> io::Result<()>;
}

/// Completion and hints for topic codes and menu commands
struct MenuHelper {
    candidates: Vec<String>,
    names: BTreeMap<String, String>,
}

impl MenuHelper {
    fn new(curriculum: &Curriculum) -> Self {
        let mut candidates: Vec<String> = COMMANDS.iter().map(|c| c.to_string()).collect();
        let mut names = BTreeMap::new();
        for topic in curriculum.all_topics() {
            candidates.push(topic.code.clone());
            names.insert(topic.code.clone(), topic.display_name.clone());
        }
        Self { candidates, names }
    }
}

impl Completer for MenuHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let partial = line[..pos].trim_start().to_lowercase();
        let start = pos - line[..pos].trim_start().len();
        let matches = self
            .candidates
            .iter()
            .filter(|c| c.starts_with(&partial))
            .map(|c| Pair {
                display: match self.names.get(c) {
                    Some(name) => format!("{} {}", c, name),
                    None => c.clone(),
                },
                replacement: c.clone(),
            })
            .collect();
        Ok((start, matches))
    }
}

impl Hinter for MenuHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<Self::Hint> {
        if line.is_empty() || pos < line.len() {
            return None;
        }
        let input = line.trim();

        // A complete topic code hints its name
        if let Some(name) = self.names.get(input) {
            return Some(format!("  {}", name));
        }

        let lower = input.to_lowercase();
        COMMANDS
            .iter()
            .find(|c| c.len() > lower.len() && c.starts_with(&lower))
            .map(|c| c[lower.len()..].to_string())
    }
}

impl Validator for MenuHelper {
    fn validate(&self, _ctx: &mut ValidationContext<'_>) -> rustyline::Result<ValidationResult> {
        Ok(ValidationResult::Valid(None))
    }
}

impl Highlighter for MenuHelper {}

impl Helper for MenuHelper {}

/// Leaves raw mode when dropped
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            debug!("Failed to leave raw mode: {}", e);
        }
    }
}

/// stdin/stdout terminal
pub struct ConsoleTerminal {
    out: io::Stdout,
    color: bool,
    clear: bool,
    /// None when stdin is not a terminal
    editor: Option<Editor<MenuHelper, DefaultHistory>>,
}

impl ConsoleTerminal {
    pub fn new(curriculum: &Curriculum, color: bool, clear: bool) -> Result<Self> {
        let interactive = io::stdin().is_terminal();
        let editor = if interactive {
            let config = rustyline::Config::builder()
                .completion_type(rustyline::CompletionType::List)
                .edit_mode(rustyline::EditMode::Emacs)
                .auto_add_history(true)
                .build();
            let mut editor = Editor::<MenuHelper, DefaultHistory>::with_config(config)
                .map_err(|e| anyhow::anyhow!("Failed to initialise line editor: {}", e))?;
            editor.set_helper(Some(MenuHelper::new(curriculum)));
            Some(editor)
        } else {
            debug!("stdin is not a terminal, using plain line input");
            None
        };

        Ok(Self {
            out: io::stdout(),
            color: color && io::stdout().is_terminal(),
            clear: clear && io::stdout().is_terminal(),
            editor,
        })
    }

    fn read_plain_line(&mut self) -> io::Result<ReadLine> {
        let mut buf = String::new();
        if io::stdin().lock().read_line(&mut buf)? == 0 {
            return Ok(ReadLine::Eof);
        }
        Ok(ReadLine::Line(buf.trim_end_matches(['\r', '\n']).to_string()))
    }
}

impl Terminal for ConsoleTerminal {
    fn canvas(&mut self) -> Canvas<'_> {
        Canvas::new(&mut self.out, self.color)
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        if self.clear {
            execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<ReadLine> {
        self.out.flush()?;
        let styled = if self.color {
            prompt.green().to_string()
        } else {
            prompt.to_string()
        };

        let Some(editor) = self.editor.as_mut() else {
            write!(self.out, "{}", styled)?;
            self.out.flush()?;
            return self.read_plain_line();
        };

        match editor.readline(&styled) {
            Ok(line) => Ok(ReadLine::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadLine::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadLine::Eof),
            Err(ReadlineError::Io(e)) => Err(e),
            Err(e) => Err(io::Error::new(io::ErrorKind::Other, e.to_string())),
        }
    }

    fn read_key(&mut self) -> io::Result<()> {
        self.out.flush()?;
        if self.editor.is_none() {
            // Piped input: an acknowledgement is one line, end of input is fine too
            self.read_plain_line()?;
            return Ok(());
        }

        let _raw = RawModeGuard::enable()?;
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(());
                }
            }
        }
    }
}
