use anyhow::Result;
use teamdeck_engine::ActivityFilter;
use teamdeck_runtime::{Teamdeck, resolve_range};
use teamdeck_types::{ActivityKind, DateRange};

use super::HandlerContext;
use crate::args::{ActivityArgs, RangeArgs};
use crate::presentation::presenters;

fn range(args: &RangeArgs, default_days: u32, ctx: &HandlerContext) -> Result<DateRange> {
    let range = resolve_range(args.since, args.until, ctx.now.date_naive(), default_days)?;
    tracing::debug!(range = %range, "report range");
    Ok(range)
}

pub fn productivity(workspace: &Teamdeck, args: &RangeArgs, ctx: &HandlerContext) -> Result<()> {
    let range = range(args, workspace.config().reports.default_range_days, ctx)?;
    let summary = workspace.reports().productivity(&range)?;

    ctx.render(ctx.envelope(presenters::present_productivity(summary)).with_range(range))
}

pub fn fairness(workspace: &Teamdeck, args: &RangeArgs, ctx: &HandlerContext) -> Result<()> {
    let range = range(args, workspace.config().reports.default_range_days, ctx)?;
    let report = workspace.reports().fairness(&range)?;
    let threshold = workspace.config().reports.overwork_threshold;

    ctx.render(ctx.envelope(presenters::present_fairness(report, threshold)).with_range(range))
}

pub fn workload(workspace: &Teamdeck, args: &RangeArgs, ctx: &HandlerContext) -> Result<()> {
    let range = range(args, workspace.config().reports.default_range_days, ctx)?;
    let summary = workspace.reports().workload(&range)?;

    ctx.render(ctx.envelope(presenters::present_workload(summary)).with_range(range))
}

pub fn trends(workspace: &Teamdeck, args: &RangeArgs, ctx: &HandlerContext) -> Result<()> {
    let range = range(args, workspace.config().reports.trend_days, ctx)?;
    let points = workspace.reports().trends(&range)?;

    ctx.render(ctx.envelope(presenters::present_trends(points)).with_range(range))
}

pub fn summary(workspace: &Teamdeck, args: &RangeArgs, ctx: &HandlerContext) -> Result<()> {
    let range = range(args, workspace.config().reports.default_range_days, ctx)?;
    let summary = workspace.reports().summary(&range)?;

    ctx.render(ctx.envelope(presenters::present_summary(summary)).with_range(range))
}

pub fn activity(workspace: &Teamdeck, args: &ActivityArgs, ctx: &HandlerContext) -> Result<()> {
    let range = range(&args.range, workspace.config().reports.default_range_days, ctx)?;
    let filter = ActivityFilter::only(args.types.iter().copied().map(ActivityKind::from));
    let limit = args
        .limit
        .map(|limit| usize::try_from(limit).unwrap_or(usize::MAX))
        .unwrap_or(workspace.config().reports.activity_limit);
    let records = workspace.reports().activity(&range, &filter, limit)?;

    ctx.render(ctx.envelope(presenters::present_activity(records, &filter, limit)).with_range(range))
}
