use super::common::{ActivityArgs, RangeArgs};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Show the kanban board, blocked tasks first in each lane")]
    Board,

    #[command(about = "List agents with health and last heartbeat")]
    Agents,

    #[command(about = "Shift, fairness and task workload reports")]
    Report {
        #[command(subcommand)]
        command: ReportCommand,
    },

    #[command(about = "Inspect the effective configuration")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ReportCommand {
    #[command(about = "Shift counts and hours per agent, merged with swap activity")]
    Productivity(RangeArgs),

    #[command(about = "Fairness of workload, overtime and on-call distribution")]
    Fairness(RangeArgs),

    #[command(about = "Task throughput, completion rates and task fairness")]
    Workload(RangeArgs),

    #[command(about = "Daily shifts, agents on shift and swap requests")]
    Trends(RangeArgs),

    #[command(about = "Headline totals: shifts by type, pending swaps, fairness score")]
    Summary(RangeArgs),

    #[command(about = "Recent shifts, swap requests and swap answers, newest first")]
    Activity(ActivityArgs),
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the configuration in effect")]
    Show,

    #[command(about = "Print the data directory, config file and database paths")]
    Path,
}
