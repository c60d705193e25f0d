use anyhow::Result;
use teamdeck_runtime::Teamdeck;

use super::HandlerContext;
use crate::presentation::presenters;

pub fn handle(workspace: &Teamdeck, ctx: &HandlerContext) -> Result<()> {
    let roster = workspace.board().roster(ctx.now)?;
    ctx.render(ctx.envelope(presenters::present_roster(roster)))
}
