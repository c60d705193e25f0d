use std::fmt;
use std::io;

use crate::presentation::formatters::Style;
use crate::presentation::formatters::text::{or_dash, truncate};
use crate::presentation::view_models::{AgentListViewModel, CreateView, CsvExport};

pub struct AgentListView<'a> {
    data: &'a AgentListViewModel,
    style: Style,
}

impl<'a> AgentListView<'a> {
    pub fn new(data: &'a AgentListViewModel, style: Style) -> Self {
        Self { data, style }
    }
}

impl<'a> fmt::Display for AgentListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.agents.is_empty() {
            writeln!(f, "No agents registered.")?;
            return Ok(());
        }

        writeln!(
            f,
            "{:<16} {:<12} {:<8} {:<10} {:<8} LAST SEEN",
            "NAME", "ROLE", "STATUS", "TASK", "HEALTH"
        )?;
        writeln!(f, "{}", "-".repeat(72))?;

        for agent in &self.data.agents {
            let health = format!("{:<8}", agent.health.as_str());
            writeln!(
                f,
                "{:<16} {:<12} {:<8} {:<10} {} {}",
                truncate(&agent.name, 16),
                truncate(or_dash(agent.role.as_deref()), 12),
                agent.status.as_str(),
                or_dash(agent.current_task_id.as_ref().map(|t| t.as_str())),
                self.style.health(agent.health, &health),
                agent.last_seen
            )?;
        }

        Ok(())
    }
}

impl CreateView for AgentListViewModel {
    fn create_view<'a>(&'a self, style: Style) -> Box<dyn fmt::Display + 'a> {
        Box::new(AgentListView::new(self, style))
    }
}

impl CsvExport for AgentListViewModel {
    fn write_csv<W: io::Write>(&self, writer: &mut csv::Writer<W>) -> csv::Result<()> {
        writer.write_record(["agent_id", "name", "role", "status", "current_task_id", "health", "last_seen"])?;
        for agent in &self.agents {
            writer.write_record([
                agent.agent_id.as_str(),
                agent.name.as_str(),
                agent.role.as_deref().unwrap_or(""),
                agent.status.as_str(),
                agent.current_task_id.as_ref().map(|t| t.as_str()).unwrap_or(""),
                agent.health.as_str(),
                agent.last_seen.as_str(),
            ])?;
        }
        Ok(())
    }
}
