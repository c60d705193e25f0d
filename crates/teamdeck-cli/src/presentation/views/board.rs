use std::fmt;
use std::io;
use teamdeck_engine::{Card, format_minutes};
use teamdeck_types::Lane;

use crate::presentation::formatters::Style;
use crate::presentation::formatters::text::{or_dash, truncate};
use crate::presentation::view_models::{BoardViewModel, CreateView, CsvExport};

const TITLE_WIDTH: usize = 32;

pub struct BoardView<'a> {
    data: &'a BoardViewModel,
    style: Style,
}

impl<'a> BoardView<'a> {
    pub fn new(data: &'a BoardViewModel, style: Style) -> Self {
        Self { data, style }
    }

    fn write_card(&self, f: &mut fmt::Formatter, card: &Card) -> fmt::Result {
        let marker = if card.blocked {
            self.style.bad("BLOCKED")
        } else {
            "       ".to_string()
        };
        let title = truncate(card.title.as_deref().unwrap_or("(untitled)"), TITLE_WIDTH);

        write!(
            f,
            "  {} {:<8} {:<width$} {:<12} {:<8} {}",
            marker,
            card.id.as_str(),
            title,
            truncate(or_dash(card.assignee_name.as_deref()), 12),
            card.priority.as_str(),
            card.duration,
            width = TITLE_WIDTH
        )?;
        if let Some(agent) = &card.working_agent {
            let doing = if card.lane == Lane::Reviewing { "reviewing" } else { "working" };
            write!(f, "  {}", self.style.muted(&format!("({} {})", agent, doing)))?;
        }
        writeln!(f)?;

        if let Some(reason) = &card.blocked_reason {
            writeln!(f, "          {}", self.style.warn(&format!("-> {}", reason)))?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for BoardView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let summary = &self.data.board.summary;
        writeln!(
            f,
            "{} {} tasks, {} blocked",
            self.style.heading("Board:"),
            summary.total_tasks,
            summary.blocked
        )?;

        for column in &self.data.board.lanes {
            writeln!(f)?;
            writeln!(
                f,
                "{}",
                self.style.heading(&format!("{} ({})", column.label, column.cards.len()))
            )?;
            if column.cards.is_empty() {
                writeln!(f, "  {}", self.style.muted("(empty)"))?;
            }
            for card in &column.cards {
                self.write_card(f, card)?;
            }
        }

        let agents = &self.data.agents;
        writeln!(f)?;
        writeln!(
            f,
            "Agents: {} total, {} active, {} idle, {} blocked, {} offline",
            agents.total, agents.active, agents.idle, agents.blocked, agents.offline
        )?;

        let durations = &self.data.durations;
        if durations.count == 0 {
            writeln!(f, "Completed work: no recorded durations")?;
            return Ok(());
        }
        writeln!(
            f,
            "Completed work: {} timed tasks, avg {} (min {}, max {})",
            durations.count,
            format_minutes(Some(durations.avg_minutes)),
            format_minutes(Some(durations.min_minutes)),
            format_minutes(Some(durations.max_minutes))
        )?;
        for agent in &durations.top_agents {
            writeln!(
                f,
                "  {:<16} {:>3} done  avg {}",
                truncate(&agent.agent_name, 16),
                agent.completed,
                format_minutes(Some(agent.avg_minutes))
            )?;
        }

        Ok(())
    }
}

impl CreateView for BoardViewModel {
    fn create_view<'a>(&'a self, style: Style) -> Box<dyn fmt::Display + 'a> {
        Box::new(BoardView::new(self, style))
    }
}

/// One row per card, lanes in board order
impl CsvExport for BoardViewModel {
    fn write_csv<W: io::Write>(&self, writer: &mut csv::Writer<W>) -> csv::Result<()> {
        writer.write_record([
            "lane",
            "id",
            "title",
            "project",
            "status",
            "priority",
            "assignee",
            "due_date",
            "blocked",
            "blocked_reason",
            "duration",
            "working_agent",
        ])?;

        for column in &self.board.lanes {
            for card in &column.cards {
                writer.write_record([
                    column.lane.as_str(),
                    card.id.as_str(),
                    card.title.as_deref().unwrap_or(""),
                    card.project_name.as_deref().unwrap_or(""),
                    card.status.as_str(),
                    card.priority.as_str(),
                    card.assignee_name.as_deref().unwrap_or(""),
                    card.due_date.as_deref().unwrap_or(""),
                    if card.blocked { "true" } else { "false" },
                    card.blocked_reason.as_deref().unwrap_or(""),
                    card.duration.as_str(),
                    card.working_agent.as_deref().unwrap_or(""),
                ])?;
            }
        }
        Ok(())
    }
}
