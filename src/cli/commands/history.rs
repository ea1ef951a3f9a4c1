use crate::cli::commands::{open_service, records_table};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let service = open_service(cfg);
    let records = service.history();

    if records.is_empty() {
        info("The inbound log is empty.");
        return Ok(());
    }

    header(format!("Inbound log ({} records)", records.len()));
    let table = records_table(records.iter().enumerate().map(|(i, r)| (i + 1, r)));
    print!("{}", table.render());

    Ok(())
}
