use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{field, header, warning};
use crate::utils::colors::colorize_optional;

use super::open_service;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Lookup { order } = cmd {
        let service = open_service(cfg);

        match service.lookup(order) {
            Some(info) => {
                header(format!("Order {}", order.trim()));
                field("category", colorize_optional(&info.category));
                field("vendor", colorize_optional(&info.vendor));
            }
            None => warning(format!("Order '{}' not found in the catalog.", order.trim())),
        }
    }

    Ok(())
}
