//! CLI interface for dsa-visualizer

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use crossterm::style::Color;

use crate::config::{self, Config};
use crate::content::ContentRegistry;
use crate::curriculum::Curriculum;
use crate::menu;
use crate::paths;
use crate::progress::ProgressStore;
use crate::resolver::{resolve, Action};
use crate::session::{dispatch_topic, ConsoleTerminal, Session, TopicOutcome};
use crate::ui::Canvas;

#[derive(Parser)]
#[command(name = "dsa-visualizer")]
#[command(about = "Learn data structures and algorithms from zero to hero, with Rust vs C++ comparisons", long_about = None)]
#[command(version)]
struct Cli {
    /// Progress file to read and update
    #[arg(long, global = true, env = "DSA_VISUALIZER_PROGRESS")]
    progress_file: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive menu (default when no command given)
    Start,
    /// Show one topic and mark it completed
    Learn {
        /// Topic code, e.g. 2.1
        code: String,
    },
    /// Show learning progress
    Progress,
    /// List the curriculum
    Topics {
        /// Print the curriculum as JSON
        #[arg(long)]
        json: bool,
    },
    /// Follow a predefined learning path, or list the paths
    Path {
        /// Path name (interview, web, competition, systems, fundamentals)
        name: Option<String>,
    },
}

/// Everything a command needs, built once from flags and config
struct App {
    config: Config,
    curriculum: Curriculum,
    registry: ContentRegistry,
    store: ProgressStore,
    color: bool,
}

impl App {
    fn load(cli: &Cli) -> Result<Self> {
        let config = Config::load();
        let curriculum = Curriculum::standard().context("Built-in curriculum is invalid")?;
        let store = config::progress_store(cli.progress_file.as_deref(), &config);

        Ok(Self {
            color: config::color_enabled(&config, cli.no_color) && io::stdout().is_terminal(),
            config,
            curriculum,
            registry: ContentRegistry::standard(),
            store,
        })
    }

    fn run_session(&self) -> Result<()> {
        let mut terminal = self.console()?;
        let mut session = Session::new(&self.curriculum, &self.registry, &self.store, &mut terminal);
        session.run().context("Terminal I/O failed")
    }

    fn console(&self) -> Result<ConsoleTerminal> {
        ConsoleTerminal::new(&self.curriculum, self.color, self.config.display.clear_screen)
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let app = App::load(&cli)?;

    // Default to the interactive menu if no command given
    match cli.command {
        None | Some(Commands::Start) => app.run_session()?,
        Some(Commands::Learn { code }) => learn(&app, &code)?,
        Some(Commands::Progress) => {
            let completed = app.store.load();
            print_text(&app, &menu::render_progress_summary(&completed, &app.curriculum))?;
        }
        Some(Commands::Topics { json }) => {
            if json {
                let json = serde_json::to_string_pretty(app.curriculum.sections())
                    .context("Failed to serialize curriculum")?;
                println!("{}", json);
            } else {
                let completed = app.store.load();
                print_text(&app, &menu::render_curriculum_marked(&app.curriculum, &completed))?;
            }
        }
        Some(Commands::Path { name: None }) => list_paths(&app)?,
        Some(Commands::Path { name: Some(name) }) => {
            let Some(path) = paths::find(&name) else {
                list_paths(&app)?;
                bail!("Unknown learning path '{}'", name);
            };
            let mut terminal = app.console()?;
            let mut session = Session::new(&app.curriculum, &app.registry, &app.store, &mut terminal);
            session.run_path(path).context("Terminal I/O failed")?;
        }
    }

    Ok(())
}

fn learn(app: &App, code: &str) -> Result<()> {
    let code = match resolve(code, &app.curriculum) {
        Action::RunTopic(code) => code,
        Action::InvalidSection(code) => bail!("Invalid section number: '{}'", code),
        Action::InvalidTopic(code) => bail!("Invalid topic number: '{}'", code),
        Action::Exit | Action::ShowProgress | Action::ShowNotes => {
            bail!("'{}' is a menu command, not a topic code", code.trim())
        }
    };
    let topic = app
        .curriculum
        .topic_for(&code)
        .with_context(|| format!("Topic {} disappeared from the curriculum", code))?;

    let mut stdout = io::stdout();
    let mut canvas = Canvas::new(&mut stdout, app.color);
    let outcome = dispatch_topic(topic, &app.registry, &app.store, &mut canvas)?;
    canvas.flush()?;

    if outcome == TopicOutcome::Failed {
        bail!("Failed to display topic {}", code);
    }
    Ok(())
}

fn list_paths(app: &App) -> Result<()> {
    let mut stdout = io::stdout();
    let mut canvas = Canvas::new(&mut stdout, app.color);
    canvas.strong_line("📚 Learning paths:", Color::Green)?;
    for path in paths::all() {
        canvas.blank()?;
        canvas.colored_line(&format!("  {:<14} {}", path.name, path.title), Color::Yellow)?;
        canvas.line(&format!("  {:<14} {} ({} topics)", "", path.description, path.codes.len()))?;
    }
    canvas.blank()?;
    canvas.dim("Run 'dsa-visualizer path <name>' to start one.")?;
    canvas.flush()?;
    Ok(())
}

fn print_text(app: &App, text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    let mut canvas = Canvas::new(&mut stdout, app.color);
    menu::print_colored(&mut canvas, text)?;
    canvas.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_args_starts_session() {
        let cli = Cli::try_parse_from(["dsa-visualizer"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.no_color);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["dsa-visualizer", "learn", "2.1", "--no-color", "--progress-file", "/tmp/p"]).unwrap();
        assert!(cli.no_color);
        assert_eq!(cli.progress_file, Some(PathBuf::from("/tmp/p")));
        assert!(matches!(cli.command, Some(Commands::Learn { ref code }) if code == "2.1"));
    }

    #[test]
    fn test_topics_json_flag() {
        let cli = Cli::try_parse_from(["dsa-visualizer", "topics", "--json"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Topics { json: true })));
    }
}
