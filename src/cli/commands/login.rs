use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::punch::PunchLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Login { doc, pin } = cmd {
        let pool = open_pool(&cfg.database)?;
        let emp = PunchLogic::authenticate(&pool.conn, doc, pin)?;
        success(format!(
            "Welcome {} ({}, {}).",
            emp.full_name(),
            emp.role.to_db_str(),
            emp.department
        ));
    }
    Ok(())
}
