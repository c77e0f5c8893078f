//! Content registry - maps content keys to lesson renderers
//!
//! Each topic in the curriculum names a content key. The registry resolves
//! that key to a [`ContentHandler`] and runs it against a [`Canvas`]. A key
//! with no handler is reported as [`ContentError::UnknownTopicContent`] so the
//! caller can show a fallback and keep the session going.

pub mod lesson;
pub mod trace;

mod algorithms;
mod data_structures;
mod fundamentals;
mod toys;

use std::collections::HashMap;
use std::io;
use thiserror::Error;
use tracing::debug;

use crate::ui::Canvas;

pub use lesson::Lesson;
pub use trace::OperationLog;

/// Something that can render explanatory text for a topic
pub trait ContentHandler {
    fn render(&self, canvas: &mut Canvas<'_>) -> io::Result<()>;
}

impl<F> ContentHandler for F
where
    F: Fn(&mut Canvas<'_>) -> io::Result<()>,
{
    fn render(&self, canvas: &mut Canvas<'_>) -> io::Result<()> {
        self(canvas)
    }
}

/// Failure modes of [`ContentRegistry::invoke`]
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("topic content not yet implemented: {0}")]
    UnknownTopicContent(String),
    #[error("failed to render '{key}': {source}")]
    Render {
        key: String,
        #[source]
        source: io::Error,
    },
}

/// Content key → handler table
#[derive(Default)]
pub struct ContentRegistry {
    handlers: HashMap<String, Box<dyn ContentHandler>>,
}

impl ContentRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in lesson
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for (key, lesson) in fundamentals::lessons()
            .into_iter()
            .chain(data_structures::lessons())
            .chain(algorithms::lessons())
        {
            registry.register(key, lesson);
        }
        registry
    }

    /// Register a handler, replacing any previous handler for the key
    pub fn register(&mut self, key: impl Into<String>, handler: impl ContentHandler + 'static) {
        let key = key.into();
        if self.handlers.insert(key.clone(), Box::new(handler)).is_some() {
            debug!("Replaced content handler for '{}'", key);
        }
    }

    pub fn lookup(&self, key: &str) -> Option<&dyn ContentHandler> {
        self.handlers.get(key).map(|h| h.as_ref())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.handlers.contains_key(key)
    }

    /// Registered keys, sorted
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Render the content for `key`
    pub fn invoke(&self, key: &str, canvas: &mut Canvas<'_>) -> Result<(), ContentError> {
        let handler = self.lookup(key).ok_or_else(|| {
            debug!("No content handler for '{}'", key);
            ContentError::UnknownTopicContent(key.to_string())
        })?;

        handler.render(canvas).map_err(|source| ContentError::Render {
            key: key.to_string(),
            source,
        })
    }
}

impl std::fmt::Debug for ContentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentRegistry")
            .field("keys", &self.keys())
            .finish()
    }
}

/// Friendly text shown in place of content that doesn't exist yet
pub fn render_fallback(canvas: &mut Canvas<'_>, key: &str) -> io::Result<()> {
    canvas.error(&format!("❌ Topic not yet implemented: {}", key))?;
    canvas.line("Coming soon in the next update!")
}
