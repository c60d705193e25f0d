use chrono::NaiveDate;
use clap::Args;

use crate::types::ActivityType;

#[derive(Debug, Clone, Default, Args)]
pub struct RangeArgs {
    /// First day of the report, YYYY-MM-DD
    #[arg(long)]
    pub since: Option<NaiveDate>,

    /// Last day of the report (inclusive), YYYY-MM-DD [default: today]
    #[arg(long)]
    pub until: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct ActivityArgs {
    #[command(flatten)]
    pub range: RangeArgs,

    /// Only these activity types (repeatable) [default: all]
    #[arg(long = "type", value_enum)]
    pub types: Vec<ActivityType>,

    /// Maximum rows [default: reports.activity_limit]
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub limit: Option<u64>,
}
