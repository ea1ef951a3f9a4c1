//! Order → category/vendor lookup table.
//!
//! Built from three parallel catalog columns (header already removed).
//! Columns may have different lengths because spreadsheets drop trailing
//! empty cells: a missing category or vendor is an empty string.
//!
//! Duplicate order ids: the last row wins. The order listing keeps each id
//! once, at the position where it first appeared.

use crate::models::order::{OrderInfo, OrderRecord};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct LookupTable {
    entries: HashMap<String, OrderInfo>,
    order_ids: Vec<String>,
}

impl LookupTable {
    /// Find an order by id. Both the query and the stored ids are trimmed;
    /// matching is exact.
    pub fn get(&self, order_id: &str) -> Option<&OrderInfo> {
        self.entries.get(order_id.trim())
    }

    pub fn contains(&self, order_id: &str) -> bool {
        self.get(order_id).is_some()
    }

    /// Non-blank order ids, first appearance order.
    pub fn order_ids(&self) -> &[String] {
        &self.order_ids
    }

    pub fn records(&self) -> Vec<OrderRecord> {
        self.order_ids
            .iter()
            .filter_map(|id| self.entries.get(id).map(|info| OrderRecord::new(id, info)))
            .collect()
    }

    /// Case-insensitive substring search over order ids.
    pub fn search(&self, needle: &str) -> Vec<OrderRecord> {
        let needle = needle.trim().to_lowercase();
        self.records()
            .into_iter()
            .filter(|r| r.id.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn build_lookup(orders: &[String], categories: &[String], vendors: &[String]) -> LookupTable {
    let mut table = LookupTable::default();

    for (i, raw) in orders.iter().enumerate() {
        let id = raw.trim();
        if id.is_empty() {
            continue;
        }

        let info = OrderInfo {
            category: categories.get(i).cloned().unwrap_or_default(),
            vendor: vendors.get(i).cloned().unwrap_or_default(),
        };

        if table.entries.insert(id.to_string(), info).is_none() {
            table.order_ids.push(id.to_string());
        }
    }

    table
}
