use crate::cli::commands::open_service;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::inbound::Overrides;
use crate::errors::AppResult;
use crate::image::{ImagePayload, build_uploader};
use crate::ui::messages::{error, field, success, warning};
use crate::utils::colors::colorize_optional;
use crate::utils::date;
use crate::utils::path::expand_tilde;

/// Save an inbound record.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        order,
        image,
        category,
        vendor,
    } = cmd
    {
        //
        // 1. Read the photo
        //
        let payload = ImagePayload::from_path(&expand_tilde(image))?;

        //
        // 2. Open store and image host
        //
        let service = open_service(cfg).with_uploader(build_uploader(cfg)?);

        if service.lookup(order).is_none() && category.is_none() {
            warning(format!(
                "Order '{}' not found in the catalog: category left empty.",
                order.trim()
            ));
        }

        //
        // 3. Upload + append
        //
        let overrides = Overrides {
            category: category.clone(),
            vendor: vendor.clone(),
        };

        match service.save(order, &payload, &overrides, date::now()) {
            Ok(row) => {
                success(format!("Inbound record saved for order {}", row.order));
                field("date", &row.date);
                field("category", colorize_optional(&row.category));
                field("vendor", colorize_optional(&row.vendor));
                field("image", &row.image_url);
                field("host", cfg.image_host.as_str());
            }
            Err(e) => {
                error("The record was NOT saved.");
                return Err(e);
            }
        }
    }

    Ok(())
}
