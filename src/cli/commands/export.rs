use crate::cli::commands::history::build_filter;
use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        period,
        doc,
        dept,
        force,
    } = cmd
    {
        let pool = open_pool(&cfg.database)?;
        let filter = build_filter(&pool.conn, doc.as_ref(), dept.as_ref(), period.as_ref())?;
        ExportLogic::export(&pool.conn, *format, file, &filter, *force)?;
    }
    Ok(())
}
