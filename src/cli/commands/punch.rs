use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::punch::{PunchLogic, PunchOutcome};
use crate::errors::AppResult;
use crate::models::location::GeoPoint;
use crate::ui::messages::{success, warning};
use crate::utils::time::timestamp_or_now;

/// Submit one clock event.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch {
        kind,
        doc,
        pin,
        at,
        lat,
        lon,
    } = cmd
    {
        let timestamp = timestamp_or_now(at.as_ref())?;
        let geo = GeoPoint::from_args(*lat, *lon)?;

        let pool = open_pool(&cfg.database)?;
        let (emp, outcome) = PunchLogic::submit(
            &pool.conn,
            doc,
            pin,
            *kind,
            timestamp,
            geo,
            cfg.duplicate_window_seconds,
        )?;

        match outcome {
            PunchOutcome::Recorded(id) => success(format!(
                "Recorded {} for {} at {} (event #{}).",
                kind,
                emp.full_name(),
                timestamp.format("%Y-%m-%d %H:%M:%S"),
                id
            )),
            PunchOutcome::Ignored(id) => warning(format!(
                "Duplicate {} for {} ignored (already recorded as event #{}).",
                kind,
                emp.full_name(),
                id
            )),
        }
    }
    Ok(())
}
