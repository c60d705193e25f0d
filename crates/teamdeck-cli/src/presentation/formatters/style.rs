use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use teamdeck_engine::FairnessGrade;
use teamdeck_types::HealthStatus;

/// Text painting for plain output; a no-op unless stdout is a terminal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    color: bool,
}

impl Style {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Colors only for an interactive stdout without NO_COLOR
    pub fn detect() -> Self {
        Self::new(std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none())
    }

    pub fn heading(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn muted(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn good(&self, text: &str) -> String {
        if self.color {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn warn(&self, text: &str) -> String {
        if self.color {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn bad(&self, text: &str) -> String {
        if self.color {
            text.red().bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn health(&self, status: HealthStatus, text: &str) -> String {
        match status {
            HealthStatus::Healthy => self.good(text),
            HealthStatus::Stale => self.warn(text),
            HealthStatus::Offline => self.bad(text),
            HealthStatus::Unknown => self.muted(text),
        }
    }

    pub fn grade(&self, grade: FairnessGrade) -> String {
        match grade {
            FairnessGrade::Excellent | FairnessGrade::Good => self.good(grade.label()),
            FairnessGrade::Fair => self.warn(grade.label()),
            FairnessGrade::NeedsImprovement => self.bad(grade.label()),
        }
    }
}
