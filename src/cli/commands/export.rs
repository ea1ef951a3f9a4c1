use crate::cli::commands::open_service;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        day,
        force,
    } = cmd
    {
        let day = match day {
            Some(d) => Some(date::resolve_day(Some(d.as_str())).map_err(AppError::InvalidDate)?),
            None => None,
        };

        let service = open_service(cfg);
        ExportLogic::export(&service, *format, file, day, *force)?;
    }

    Ok(())
}
