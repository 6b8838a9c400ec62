use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        if *print_config {
            messages::info(format!("config file: {}", Config::config_file().display()));
            print!("{}", cfg.to_yaml()?);
        } else {
            messages::info("nothing to do: pass --print");
        }
    }

    Ok(())
}
