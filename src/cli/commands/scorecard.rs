use crate::cli::commands::open_service;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{field, header};
use crate::utils::colors::{RESET, color_for_count};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Scorecard { day } = cmd {
        let d = date::resolve_day(day.as_deref()).map_err(AppError::InvalidDate)?;
        let service = open_service(cfg);
        let score = service.scorecard(d);

        header(format!("Scorecard {}", d));
        field(
            "pickup",
            format!(
                "{}{}{}",
                color_for_count(score.pickup_ready),
                score.pickup_ready,
                RESET
            ),
        );
        field(
            "inbound",
            format!(
                "{}{}{}",
                color_for_count(score.inbound_done),
                score.inbound_done,
                RESET
            ),
        );
    }

    Ok(())
}
