use anyhow::Result;
use teamdeck_runtime::Teamdeck;

use super::HandlerContext;
use crate::presentation::presenters;

pub fn handle(workspace: &Teamdeck, ctx: &HandlerContext) -> Result<()> {
    let snapshot = workspace.board().snapshot(ctx.now)?;
    tracing::debug!(
        tasks = snapshot.board.summary.total_tasks,
        blocked = snapshot.board.summary.blocked,
        "board assembled"
    );

    ctx.render(ctx.envelope(presenters::present_board(snapshot)))
}
