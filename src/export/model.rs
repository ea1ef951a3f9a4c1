// src/export/model.rs

use crate::models::log_row::LogRow;
use serde::Serialize;

/// Flat inbound record for export, numbered as in `history`.
#[derive(Serialize, Clone, Debug)]
pub struct RecordExport {
    pub no: usize,
    pub date: String,
    pub order: String,
    pub category: String,
    pub vendor: String,
    pub image_url: String,
}

impl RecordExport {
    pub fn new(no: usize, row: &LogRow) -> Self {
        Self {
            no,
            date: row.date.clone(),
            order: row.order.clone(),
            category: row.category.clone(),
            vendor: row.vendor.clone(),
            image_url: row.image_url.clone(),
        }
    }
}

/// Header for CSV / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["no", "date", "order", "category", "vendor", "image_url"]
}

pub(crate) fn record_to_row(r: &RecordExport) -> Vec<String> {
    vec![
        r.no.to_string(),
        r.date.clone(),
        r.order.clone(),
        r.category.clone(),
        r.vendor.clone(),
        r.image_url.clone(),
    ]
}
