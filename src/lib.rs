//! DSA Visualizer - interactive data structures and algorithms tutor
//!
//! A terminal learning tool with:
//! - A numbered curriculum from fundamentals to advanced algorithms
//! - Lessons with step-by-step visualizations and Rust vs C++ comparisons
//! - Persistent progress tracking across sessions
//! - Predefined learning paths for common goals
//!
//! # Example
//!
//! ```no_run
//! use dsa_visualizer::{ContentRegistry, Curriculum, ProgressStore};
//! use dsa_visualizer::ui::Canvas;
//!
//! fn main() -> anyhow::Result<()> {
//!     let curriculum = Curriculum::standard()?;
//!     let registry = ContentRegistry::standard();
//!     let store = ProgressStore::at_home()?;
//!
//!     let topic = curriculum.topic_for("2.1").expect("arrays are in the curriculum");
//!     let mut stdout = std::io::stdout();
//!     let mut canvas = Canvas::new(&mut stdout, true);
//!     dsa_visualizer::session::dispatch_topic(topic, &registry, &store, &mut canvas)?;
//!     Ok(())
//! }
//! ```

// Core modules
pub mod curriculum;
pub mod content;
pub mod progress;
pub mod config;
pub mod ui;

// Interaction
pub mod menu;
pub mod resolver;
pub mod session;
pub mod paths; // Predefined learning paths
pub mod cli;

// Re-export commonly used types for convenience
pub use curriculum::{Curriculum, CurriculumError, Section, Topic};

pub use content::{ContentError, ContentHandler, ContentRegistry};

pub use progress::{CompletionSet, PersistenceError, ProgressStore, ProgressSummary};

pub use config::Config;

pub use resolver::{resolve, Action};

pub use session::{ConsoleTerminal, ReadLine, Session, SessionState, Terminal, TopicOutcome};
