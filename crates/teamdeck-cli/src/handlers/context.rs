use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::presentation::view_models::{CommandResultViewModel, CreateView, CsvExport};
use crate::presentation::{ConsoleRenderer, Renderer, Style};
use crate::types::OutputFormat;

/// Context for handler execution with consistent presentation utilities
pub struct HandlerContext {
    pub format: OutputFormat,
    /// The single clock reading every handler works against
    pub now: DateTime<Utc>,
}

impl HandlerContext {
    pub fn new(format: OutputFormat, now: DateTime<Utc>) -> Self {
        Self { format, now }
    }

    pub fn envelope<T: Serialize>(&self, content: T) -> CommandResultViewModel<T> {
        CommandResultViewModel::new(content, self.now)
    }

    /// Render a view model using the configured format
    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView + CsvExport,
    {
        let renderer = ConsoleRenderer::new(self.format, Style::detect());
        renderer.render(view_model)
    }
}
