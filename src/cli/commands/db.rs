use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::{applied_versions, run_pending_migrations};
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::colors::{CYAN, RESET};

fn migrate(pool: &DbPool) -> AppResult<()> {
    println!("{CYAN}▶ Running migrations…{RESET}");
    let applied = run_pending_migrations(&pool.conn)?;
    if applied == 0 {
        info(format!(
            "Schema is up to date ({} migrations recorded).",
            applied_versions(&pool.conn)?.len()
        ));
    } else {
        success(format!("{applied} migration(s) applied."));
    }
    Ok(())
}

/// `PRAGMA integrity_check` plus a scan for events pointing at missing
/// employees. Any problem is returned as an error.
fn check(pool: &DbPool) -> AppResult<()> {
    println!("{CYAN}▶ Running integrity check…{RESET}");

    let integrity: String = pool
        .conn
        .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;
    if integrity != "ok" {
        return Err(AppError::Integrity(integrity));
    }

    let orphans: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM events e
         LEFT JOIN employees m ON m.id = e.employee_id
         WHERE m.id IS NULL",
        [],
        |row| row.get(0),
    )?;
    if orphans > 0 {
        return Err(AppError::Integrity(format!(
            "{orphans} event(s) reference a missing employee"
        )));
    }

    success("Integrity check passed.");
    Ok(())
}

fn vacuum(pool: &DbPool) -> AppResult<()> {
    println!("{CYAN}▶ Running VACUUM…{RESET}");
    pool.conn.execute_batch("VACUUM;")?;
    success("Vacuum completed.");
    Ok(())
}

/// Database maintenance. Actions run in a fixed order: migrate, info, check,
/// vacuum.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate: do_migrate,
        check: do_check,
        vacuum: do_vacuum,
        info: do_info,
    } = cmd
    {
        if !(*do_migrate || *do_check || *do_vacuum || *do_info) {
            info("Nothing to do: use --migrate, --info, --check or --vacuum.");
            return Ok(());
        }

        let mut pool = open_pool(&cfg.database)?;

        if *do_migrate {
            migrate(&pool)?;
        }
        if *do_info {
            stats::print_db_info(&mut pool, &cfg.database)?;
        }
        if *do_check {
            check(&pool)?;
        }
        if *do_vacuum {
            vacuum(&pool)?;
        }
    }

    Ok(())
}
