use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use std::io;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db { info, check } = cmd {
        if !*info && !*check {
            messages::info("nothing to do: pass --info and/or --check");
            return Ok(());
        }

        let pool = DbPool::open_read_only(&cfg.database)?;

        //
        // 1) INFO
        //
        if *info {
            stats::write_db_info(&mut io::stdout().lock(), &pool)?;
        }

        //
        // 2) CHECK
        //
        if *check {
            messages::info("running integrity check…");
            match stats::integrity_check(&pool)? {
                None => messages::success("integrity check passed"),
                Some(problems) => {
                    return Err(AppError::Other(format!(
                        "integrity check failed:\n{}",
                        problems
                    )));
                }
            }
        }

        pool.close()?;
    }

    Ok(())
}
