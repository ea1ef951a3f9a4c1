use serde::Serialize;

/// Catalog metadata attached to an order number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderInfo {
    pub category: String,
    pub vendor: String,
}

/// One order of the catalog, as listed by the order picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRecord {
    pub id: String,
    pub category: String,
    pub vendor: String,
}

impl OrderRecord {
    pub fn new(id: &str, info: &OrderInfo) -> Self {
        Self {
            id: id.to_string(),
            category: info.category.clone(),
            vendor: info.vendor.clone(),
        }
    }
}
