use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::visible_len;
use ansi_term::Colour;

const MAX_OP_WIDTH: usize = 40;

/// ANSI colour for each audit operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "punch" => Colour::Green,
        "employee_deactivate" => Colour::Red,
        "employee_pin" | "employee_role" | "employee_activate" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        other if other.starts_with("employee_") || other.starts_with("dept_") => Colour::Cyan,
        _ => Colour::White,
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
        out.push_str("...");
        out
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for e in &entries {
            // op (target), op coloured, target plain
            let colour = color_for_operation(&e.operation);
            let op_target = if e.target.is_empty() {
                colour.paint(e.operation.as_str()).to_string()
            } else {
                format!(
                    "{} ({})",
                    colour.paint(e.operation.as_str()),
                    truncate(&e.target, MAX_OP_WIDTH)
                )
            };

            let padding = " ".repeat(MAX_OP_WIDTH.saturating_sub(visible_len(&op_target)));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                e.id, e.date, op_target, padding, e.message
            );
        }

        Ok(())
    }
}
