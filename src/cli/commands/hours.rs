use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::attendance::AttendanceLogic;
use crate::core::calculator::sessions::{ReportOutcome, Session, WorkedReport};
use crate::db::employees;
use crate::errors::{AppError, AppResult};
use crate::models::event_kind::EventKind;
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::{RESET, color_for_outcome};
use crate::utils::date;
use crate::utils::secs2readable;
use crate::utils::table::{Column, Table};
use serde::Serialize;

#[derive(Serialize)]
struct HoursJson<'a> {
    document: &'a str,
    outcome: ReportOutcome,
    #[serde(flatten)]
    report: &'a WorkedReport,
}

fn session_row(idx: usize, s: &Session) -> Vec<String> {
    let end = s
        .shift_end
        .as_ref()
        .map(|e| e.timestamp().format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "open".to_string());
    let duration = s
        .duration()
        .map(|d| secs2readable(d.num_seconds()))
        .unwrap_or_else(|| "--".to_string());

    vec![
        idx.to_string(),
        s.entry.timestamp().format("%Y-%m-%d %H:%M:%S").to_string(),
        end,
        duration,
        s.count_of(EventKind::Meal).to_string(),
        s.count_of(EventKind::SmokeBreak).to_string(),
        s.count_of(EventKind::Dinner).to_string(),
    ]
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Hours {
        doc,
        period,
        details,
        json,
    } = cmd
    {
        let range = date::period_or_current_month(period.as_ref())?;

        let pool = open_pool(&cfg.database)?;
        let emp = employees::get_by_document(&pool.conn, doc)?;
        let report = AttendanceLogic::worked_duration(&pool.conn, emp.id, range)?;

        if *json {
            let out = serde_json::to_string_pretty(&HoursJson {
                document: &emp.document,
                outcome: report.outcome(),
                report: &report,
            })
            .map_err(|e| AppError::Export(e.to_string()))?;
            println!("{out}");
            return Ok(());
        }

        header(format!("{} ({}), {}", emp.full_name(), emp.document, range));

        if report.outcome() == ReportOutcome::NoData {
            info(format!("No data for {} in {}.", emp.document, range));
            return Ok(());
        }

        let mut table = Table::new(
            vec![
                Column::new("#", 3),
                Column::new("ENTRY", 19),
                Column::new("SHIFT END", 19),
                Column::new("WORKED", 12),
                Column::new("MEAL", 4),
                Column::new("BREAK", 5),
                Column::new("DINNER", 6),
            ],
            &cfg.separator_char,
        );

        let mut sessions: Vec<&Session> = report
            .closed_sessions
            .iter()
            .chain(report.open_sessions.iter())
            .collect();
        sessions.sort_by_key(|s| s.entry.order_key());

        for (i, s) in sessions.iter().enumerate() {
            table.add_row(session_row(i + 1, s));
        }
        print!("{}", table.render());

        if *details {
            for (i, s) in sessions.iter().enumerate() {
                println!("\nSession {}:", i + 1);
                println!("  {} {}", s.entry.time_str(), s.entry.kind);
                for a in &s.annotations {
                    println!("  {} {}", a.time_str(), a.kind);
                }
                if let Some(end) = &s.shift_end {
                    println!("  {} {}", end.time_str(), end.kind);
                }
            }
        }

        let color = color_for_outcome(report.open_sessions.len(), report.anomalies.len());
        println!();
        println!(
            "Closed sessions: {} | Open sessions: {}",
            report.closed_sessions.len(),
            report.open_sessions.len()
        );
        println!(
            "Total worked: {}{}{}",
            color,
            secs2readable(report.total_seconds),
            RESET
        );

        if !report.open_sessions.is_empty() {
            warning("Open sessions are not counted in the total.");
        }

        for a in &report.anomalies {
            warning(format!(
                "Anomaly: {} ({} at {})",
                a.kind.describe(),
                a.event.kind,
                a.event.timestamp().format("%Y-%m-%d %H:%M:%S")
            ));
        }
    }
    Ok(())
}
