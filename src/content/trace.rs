//! Step log used by demos to narrate what a toy structure did

use std::io;

use crossterm::style::Color;

use crate::ui::Canvas;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub step: usize,
    pub name: String,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    pub kind: String,
    pub size: usize,
}

/// Records allocations and operations in the order they happen
#[derive(Debug, Default, Clone)]
pub struct OperationLog {
    allocations: Vec<Allocation>,
    operations: Vec<Operation>,
}

impl OperationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self, kind: impl Into<String>, size: usize) {
        self.allocations.push(Allocation { kind: kind.into(), size });
    }

    pub fn record(&mut self, name: impl Into<String>, details: impl Into<String>) {
        let step = self.operations.len() + 1;
        self.operations.push(Operation {
            step,
            name: name.into(),
            details: details.into(),
        });
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn allocations(&self) -> &[Allocation] {
        &self.allocations
    }

    pub fn reset(&mut self) {
        self.allocations.clear();
        self.operations.clear();
    }

    pub fn render_summary(&self, canvas: &mut Canvas<'_>) -> io::Result<()> {
        canvas.blank()?;
        canvas.strong_line("📊 Memory & Operations Summary:", Color::Cyan)?;
        if !self.allocations.is_empty() {
            canvas.blank()?;
            canvas.line(&format!("Allocations: {}", self.allocations.len()))?;
            for alloc in &self.allocations {
                canvas.line(&format!("  - {} (size: {})", alloc.kind, alloc.size))?;
            }
        }
        canvas.blank()?;
        canvas.line(&format!("Operations: {}", self.operations.len()))?;
        for op in &self.operations {
            canvas.line(&format!("  {}. {}: {}", op.step, op.name, op.details))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_are_numbered_from_one() {
        let mut log = OperationLog::new();
        log.record("Push", "Pushed 10");
        log.record("Pop", "Popped 10");
        let steps: Vec<usize> = log.operations().iter().map(|o| o.step).collect();
        assert_eq!(steps, vec![1, 2]);

        log.reset();
        log.record("Push", "Pushed 5");
        assert_eq!(log.operations()[0].step, 1);
    }

    #[test]
    fn test_summary_lists_operations() {
        let mut log = OperationLog::new();
        log.allocate("node", 16);
        log.record("Push", "Pushed 10");

        let mut buf = Vec::new();
        {
            let mut canvas = Canvas::new(&mut buf, false);
            log.render_summary(&mut canvas).unwrap();
        }
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("Allocations: 1"));
        assert!(out.contains("  - node (size: 16)"));
        assert!(out.contains("  1. Push: Pushed 10"));
    }
}
