use serde::Serialize;

/// Header written when the inbound worksheet is created.
pub const LOG_HEADER: [&str; 5] = ["date", "order", "category", "vendor", "image_url"];

// Cell positions in an inbound log row
const COL_DATE: usize = 0;
const COL_ORDER: usize = 1;
const COL_CATEGORY: usize = 2;
const COL_VENDOR: usize = 3;
const COL_IMAGE: usize = 4;

/// One record of the inbound log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LogRow {
    pub date: String,
    pub order: String,
    pub category: String,
    pub vendor: String,
    pub image_url: String,
}

fn cell(cells: &[String], idx: usize) -> String {
    cells.get(idx).cloned().unwrap_or_default()
}

impl LogRow {
    /// Map a raw sheet row to a record. Missing cells become empty strings,
    /// extra cells are ignored.
    pub fn from_cells(cells: &[String]) -> Self {
        Self {
            date: cell(cells, COL_DATE),
            order: cell(cells, COL_ORDER),
            category: cell(cells, COL_CATEGORY),
            vendor: cell(cells, COL_VENDOR),
            image_url: cell(cells, COL_IMAGE),
        }
    }

    pub fn to_cells(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            self.order.clone(),
            self.category.clone(),
            self.vendor.clone(),
            self.image_url.clone(),
        ]
    }
}
