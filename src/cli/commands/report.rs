use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::report::{ReportOptions, write_report};
use crate::ui::messages;
use std::io::{self, BufWriter};

/// Handle the `report` command (also the default with no subcommand).
///
/// The connection is opened before anything reaches stdout, so a bad path
/// produces no partial report. On a failed section the `?` drops `pool`,
/// which closes the connection.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let opts = ReportOptions::new(cfg.report_limit, cfg.show_secrets)?;
    let pool = DbPool::open_read_only(&cfg.database)?;

    if opts.show_secrets {
        messages::warning("passwords and PINs are printed in cleartext");
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_report(&mut out, &pool, &opts)?;
    drop(out);

    pool.close()
}
