use anyhow::Result;
use serde::Serialize;
use std::io::{self, Write};

use super::traits::Renderer;
use crate::presentation::formatters::Style;
use crate::presentation::view_models::{CommandResultViewModel, CreateView, CsvExport};
use crate::types::OutputFormat;

/// Writes command results to stdout in the selected format
pub struct ConsoleRenderer {
    format: OutputFormat,
    style: Style,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, style: Style) -> Self {
        Self { format, style }
    }

    /// Render into any writer; `render` targets stdout
    pub fn render_to<T, W>(&self, result: &CommandResultViewModel<T>, out: &mut W) -> Result<()>
    where
        T: Serialize + CreateView + CsvExport,
        W: Write,
    {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, result)?;
                writeln!(out)?;
            }
            OutputFormat::Csv => {
                let mut writer = csv::Writer::from_writer(&mut *out);
                result.content.write_csv(&mut writer)?;
                writer.flush()?;
            }
            OutputFormat::Plain => {
                if let Some(range) = &result.date_range {
                    writeln!(out, "{}", self.style.muted(&format!("{} ({} days)", range, range.len_days())))?;
                }
                write!(out, "{}", result.content.create_view(self.style))?;
            }
        }
        Ok(())
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView + CsvExport,
    {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.render_to(&result, &mut out)?;
        out.flush()?;
        Ok(())
    }
}
