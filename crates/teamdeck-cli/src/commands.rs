use anyhow::Result;
use chrono::Utc;
use std::path::PathBuf;
use teamdeck_runtime::{Teamdeck, resolve_workspace_path};

use super::args::{Cli, Commands, ReportCommand};
use super::handlers::{self, HandlerContext};

pub fn run(cli: Cli) -> Result<()> {
    let now = cli.now.unwrap_or_else(Utc::now);
    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;
    let ctx = HandlerContext::new(cli.format, now);

    tracing::debug!(data_dir = %data_dir.display(), format = %cli.format, now = %now, "starting");

    match cli.command {
        Commands::Config { command } => {
            handlers::config::handle(command, &data_dir, cli.db.as_deref(), &ctx)
        }

        Commands::Board => handlers::board::handle(&open(data_dir, cli.db)?, &ctx),

        Commands::Agents => handlers::agents::handle(&open(data_dir, cli.db)?, &ctx),

        Commands::Report { command } => {
            let workspace = open(data_dir, cli.db)?;

            match command {
                ReportCommand::Productivity(args) => {
                    handlers::report::productivity(&workspace, &args, &ctx)
                }
                ReportCommand::Fairness(args) => handlers::report::fairness(&workspace, &args, &ctx),
                ReportCommand::Workload(args) => handlers::report::workload(&workspace, &args, &ctx),
                ReportCommand::Trends(args) => handlers::report::trends(&workspace, &args, &ctx),
                ReportCommand::Summary(args) => handlers::report::summary(&workspace, &args, &ctx),
                ReportCommand::Activity(args) => {
                    handlers::report::activity(&workspace, &args, &ctx)
                }
            }
        }
    }
}

fn open(data_dir: PathBuf, db: Option<PathBuf>) -> Result<Teamdeck> {
    Ok(Teamdeck::open(data_dir, db)?)
}
