use anyhow::Result;
use std::path::Path;
use teamdeck_runtime::Config;
use teamdeck_runtime::workspace::CONFIG_FILE;

use super::HandlerContext;
use crate::args::ConfigCommand;
use crate::presentation::presenters;

/// Works without a database so a fresh data directory can be inspected
pub fn handle(
    command: ConfigCommand,
    data_dir: &Path,
    db_override: Option<&Path>,
    ctx: &HandlerContext,
) -> Result<()> {
    let config_file = data_dir.join(CONFIG_FILE);
    let config = Config::load_from(&config_file)?;

    match command {
        ConfigCommand::Show => {
            let view_model = presenters::present_config_show(config, &config_file)?;
            ctx.render(ctx.envelope(view_model))
        }
        ConfigCommand::Path => {
            let database = db_override
                .map(Path::to_path_buf)
                .unwrap_or_else(|| config.database_path(data_dir));
            let view_model = presenters::present_config_paths(data_dir, &config_file, &database);
            ctx.render(ctx.envelope(view_model))
        }
    }
}
