use crate::cli::commands::open_service;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};
use crate::utils::colors::colorize_optional;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Orders { filter } = cmd {
        let service = open_service(cfg);
        let lookup = service.lookup_table();

        let records = match filter {
            Some(f) => lookup.search(f),
            None => lookup.records(),
        };

        if records.is_empty() {
            warning("No orders found.");
            return Ok(());
        }

        header(format!("Orders ({})", records.len()));

        let mut table = Table::new(vec![
            Column::new("order", 24),
            Column::new("category", 30),
            Column::new("vendor", 30),
        ]);
        for r in &records {
            table.add_row(vec![
                r.id.clone(),
                colorize_optional(&r.category),
                colorize_optional(&r.vendor),
            ]);
        }
        print!("{}", table.render());
    }

    Ok(())
}
