use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::stats::dashboard_stats;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, GREEN, RESET};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { date } = cmd {
        let day = date::date_or_today(date.as_ref())?;
        let pool = open_pool(&cfg.database)?;
        let stats = dashboard_stats(&pool.conn, day)?;

        header(format!("Dashboard for {}", stats.day));
        println!("{CYAN}• Active employees:{RESET} {GREEN}{}{RESET}", stats.active_employees);
        println!(
            "{CYAN}• Employees punched today:{RESET} {GREEN}{}{RESET}",
            stats.employees_punched_today
        );
        println!("{CYAN}• Events today:{RESET} {GREEN}{}{RESET}", stats.events_today);
        println!(
            "{CYAN}• Events this month:{RESET} {GREEN}{}{RESET}",
            stats.events_this_month
        );
    }
    Ok(())
}
