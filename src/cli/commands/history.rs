use crate::cli::commands::{open_pool, resolve_department};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::attendance::AttendanceLogic;
use crate::db::employees;
use crate::db::queries::{EventFilter, EventOrder};
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::colorize_optional;
use crate::utils::date;
use crate::utils::formatting::describe_kind;
use crate::utils::table::{Column, Table};
use rusqlite::Connection;
use std::collections::HashMap;

/// Build the event filter shared by `history` and `export`.
pub(crate) fn build_filter(
    conn: &Connection,
    doc: Option<&String>,
    dept: Option<&String>,
    period: Option<&String>,
) -> AppResult<EventFilter> {
    let employee_id = match doc {
        Some(d) => Some(employees::get_by_document(conn, d)?.id),
        None => None,
    };
    let range = match period {
        Some(p) => Some(date::parse_period(p)?),
        None => None,
    };

    Ok(EventFilter {
        employee_id,
        range,
        department_id: resolve_department(conn, dept)?,
    })
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History {
        doc,
        dept,
        period,
        newest,
    } = cmd
    {
        let pool = open_pool(&cfg.database)?;
        let conn = &pool.conn;

        let filter = build_filter(conn, doc.as_ref(), dept.as_ref(), period.as_ref())?;
        let order = if *newest {
            EventOrder::NewestFirst
        } else {
            EventOrder::OldestFirst
        };

        let events = AttendanceLogic::event_history(conn, &filter, order)?;
        if events.is_empty() {
            info("No events found for the selected filters.");
            return Ok(());
        }

        let staff: HashMap<i64, _> = employees::list_employees(conn, false, None)?
            .into_iter()
            .map(|e| (e.id, e))
            .collect();

        let mut table = Table::new(
            vec![
                Column::new("ID", 5),
                Column::new("DATE", 10),
                Column::new("TIME", 8),
                Column::new("DOCUMENT", 12),
                Column::new("NAME", 24),
                Column::new("KIND", 12),
                Column::new("STATUS", 12),
                Column::new("GEO", 22),
            ],
            &cfg.separator_char,
        );

        for ev in &events {
            let (document, name) = staff
                .get(&ev.employee_id)
                .map(|e| (e.document.clone(), e.full_name()))
                .unwrap_or_default();
            let geo = ev.geo.map(|g| g.to_string()).unwrap_or_else(|| "--".into());

            table.add_row(vec![
                ev.id.to_string(),
                ev.date_str(),
                ev.time_str(),
                document,
                name,
                ev.kind.to_db_str().to_string(),
                describe_kind(ev.kind),
                colorize_optional(&geo),
            ]);
        }

        print!("{}", table.render());
        println!("\n{} events", events.len());
    }
    Ok(())
}
