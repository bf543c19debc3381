use crate::cli::commands::{open_pool, resolve_department};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::attendance::AttendanceLogic;
use crate::core::calculator::status::DayStatus;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info};
use crate::utils::colors::colorize_optional;
use crate::utils::date;
use crate::utils::formatting::describe_kind;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { dept, date, json } = cmd {
        let day = date::date_or_today(date.as_ref())?;

        let pool = open_pool(&cfg.database)?;
        let dept_id = resolve_department(&pool.conn, dept.as_ref())?;
        let statuses = AttendanceLogic::current_statuses(&pool.conn, day, dept_id)?;

        if *json {
            let out = serde_json::to_string_pretty(&statuses)
                .map_err(|e| AppError::Export(e.to_string()))?;
            println!("{out}");
            return Ok(());
        }

        header(format!("Status on {day}"));

        if statuses.is_empty() {
            info("No active employees.");
            return Ok(());
        }

        let mut table = Table::new(
            vec![
                Column::new("DOCUMENT", 12),
                Column::new("NAME", 28),
                Column::new("DEPARTMENT", 16),
                Column::new("LAST", 12),
                Column::new("AT", 9),
                Column::new("STATUS", 16),
            ],
            &cfg.separator_char,
        );

        for s in &statuses {
            let (last, at, label) = match &s.status {
                DayStatus::Last(d) => (
                    d.last_kind.to_db_str().to_string(),
                    d.last_timestamp.format("%H:%M:%S").to_string(),
                    describe_kind(d.last_kind),
                ),
                DayStatus::NoRecordToday => (
                    colorize_optional("--"),
                    colorize_optional("--:--"),
                    "no record today".to_string(),
                ),
            };

            table.add_row(vec![
                s.employee.document.clone(),
                s.employee.full_name(),
                s.employee.department.clone(),
                last,
                at,
                label,
            ]);
        }

        print!("{}", table.render());
    }
    Ok(())
}
