use crate::cli::commands::{open_service, records_table};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Today { count, day } = cmd {
        let d = date::resolve_day(day.as_deref()).map_err(AppError::InvalidDate)?;
        let service = open_service(cfg);

        if *count {
            println!("{}", service.count_today(d));
            return Ok(());
        }

        let records = service.today_records(d);
        header(format!("Inbound {} ({} records)", d, records.len()));

        if records.is_empty() {
            info(format!("No inbound records for {}.", d));
            return Ok(());
        }

        let table = records_table(records.iter().enumerate().map(|(i, r)| (i + 1, r)));
        print!("{}", table.render());
    }

    Ok(())
}
