//! Inbound service: the context object every command works through.
//!
//! Owns the store, the image uploader and the TTL caches. Reads fail open
//! (empty result and a warning); writes return their error so the caller can
//! tell the operator that nothing was saved.

use crate::config::Config;
use crate::core::cache::TtlCache;
use crate::core::daily;
use crate::core::lookup::{LookupTable, build_lookup};
use crate::errors::{AppError, AppResult};
use crate::image::{ImagePayload, ImageUploader};
use crate::models::log_row::LogRow;
use crate::models::order::OrderInfo;
use crate::models::scorecard::Scorecard;
use crate::sheet::log::ttlog;
use crate::sheet::{SheetStore, without_header};
use chrono::{NaiveDate, NaiveDateTime};
use std::sync::Arc;
use tracing::{info, warn};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

type Rows = Vec<Vec<String>>;

/// Category/vendor typed by the operator, taking precedence over the catalog.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub category: Option<String>,
    pub vendor: Option<String>,
}

pub struct InboundService {
    cfg: Config,
    store: Box<dyn SheetStore>,
    uploader: Option<Box<dyn ImageUploader>>,
    lookup_cache: TtlCache<LookupTable>,
    rows_cache: TtlCache<Rows>,
}

impl InboundService {
    pub fn new(cfg: Config, store: Box<dyn SheetStore>) -> Self {
        Self {
            cfg,
            store,
            uploader: None,
            lookup_cache: TtlCache::new(),
            rows_cache: TtlCache::new(),
        }
    }

    pub fn with_uploader(mut self, uploader: Box<dyn ImageUploader>) -> Self {
        self.uploader = Some(uploader);
        self
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn store(&self) -> &dyn SheetStore {
        self.store.as_ref()
    }

    fn lookup_key(&self) -> String {
        format!(
            "lookup:{}/{}:{}:{}:{}",
            self.cfg.table_id,
            self.cfg.catalog_sheet,
            self.cfg.order_column,
            self.cfg.category_column,
            self.cfg.vendor_column
        )
    }

    fn rows_key(&self, worksheet: &str) -> String {
        format!("rows:{}/{}", self.cfg.table_id, worksheet)
    }

    // ---------------------------
    // Lookup
    // ---------------------------

    /// Read the catalog columns and build the table, propagating failures.
    pub fn fetch_lookup(&self) -> AppResult<LookupTable> {
        let column = |c: usize| -> AppResult<Vec<String>> {
            let values = self
                .store
                .get_column(&self.cfg.table_id, &self.cfg.catalog_sheet, c)?;
            Ok(without_header(values))
        };

        let orders = column(self.cfg.order_column)?;
        let categories = column(self.cfg.category_column)?;
        let vendors = column(self.cfg.vendor_column)?;

        let table = build_lookup(&orders, &categories, &vendors);
        info!(orders = table.len(), "lookup table built");
        Ok(table)
    }

    /// Cached lookup table; an empty table when the catalog is unreachable.
    pub fn lookup_table(&self) -> Arc<LookupTable> {
        let key = self.lookup_key();
        match self
            .lookup_cache
            .get_or_fetch(&key, self.cfg.lookup_ttl(), || self.fetch_lookup())
        {
            Ok(table) => table,
            Err(e) => {
                warn!(error = %e, "catalog unavailable, using an empty lookup table");
                Arc::new(LookupTable::default())
            }
        }
    }

    pub fn lookup(&self, order_id: &str) -> Option<OrderInfo> {
        self.lookup_table().get(order_id).cloned()
    }

    // ---------------------------
    // Log tables
    // ---------------------------

    /// Data rows of a worksheet (header removed), cached with the counter TTL.
    pub fn fetch_rows(&self, worksheet: &str) -> AppResult<Arc<Rows>> {
        let key = self.rows_key(worksheet);
        self.rows_cache.get_or_fetch(&key, self.cfg.counter_ttl(), || {
            let rows = self.store.get_all_rows(&self.cfg.table_id, worksheet)?;
            Ok(without_header(rows))
        })
    }

    fn rows_or_empty(&self, worksheet: &str) -> Arc<Rows> {
        self.fetch_rows(worksheet).unwrap_or_else(|e| {
            warn!(worksheet, error = %e, "worksheet unavailable, treating it as empty");
            Arc::new(Vec::new())
        })
    }

    pub fn history(&self) -> Vec<LogRow> {
        self.rows_or_empty(&self.cfg.inbound_sheet)
            .iter()
            .map(|r| LogRow::from_cells(r))
            .collect()
    }

    pub fn today_records(&self, today: NaiveDate) -> Vec<LogRow> {
        let rows = self.rows_or_empty(&self.cfg.inbound_sheet);
        daily::filter_today(&rows, today, self.cfg.date_match)
    }

    pub fn count_today(&self, today: NaiveDate) -> usize {
        let rows = self.rows_or_empty(&self.cfg.inbound_sheet);
        daily::count_today(&rows, today, self.cfg.date_match)
    }

    pub fn pickup_ready(&self, today: NaiveDate) -> usize {
        let rows = self.rows_or_empty(&self.cfg.scorecard_sheet);
        daily::count_pickup_ready(
            &rows,
            self.cfg.scorecard_order_column,
            self.cfg.scorecard_date_column,
            today,
            self.cfg.pickup_policy,
            self.cfg.date_match,
        )
    }

    pub fn scorecard(&self, today: NaiveDate) -> Scorecard {
        Scorecard {
            pickup_ready: self.pickup_ready(today),
            inbound_done: self.count_today(today),
        }
    }

    // ---------------------------
    // Writes
    // ---------------------------

    /// Upload the photo and append the record to the inbound log.
    /// Nothing is appended when the upload fails.
    pub fn save(
        &self,
        order_id: &str,
        image: &ImagePayload,
        overrides: &Overrides,
        now: NaiveDateTime,
    ) -> AppResult<LogRow> {
        let order = order_id.trim();
        if order.is_empty() {
            return Err(AppError::InvalidOrder(order_id.to_string()));
        }

        let uploader = self
            .uploader
            .as_ref()
            .ok_or_else(|| AppError::Config("no image host configured".into()))?;

        let info = self.lookup(order).unwrap_or_default();
        let pick = |typed: &Option<String>, found: String| -> String {
            typed
                .as_ref()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or(found)
        };

        let image_url = uploader.upload(image)?;

        let row = LogRow {
            date: now.format(TIMESTAMP_FORMAT).to_string(),
            order: order.to_string(),
            category: pick(&overrides.category, info.category),
            vendor: pick(&overrides.vendor, info.vendor),
            image_url,
        };

        self.store
            .append_row(&self.cfg.table_id, &self.cfg.inbound_sheet, &row.to_cells())?;
        self.rows_cache
            .invalidate(&self.rows_key(&self.cfg.inbound_sheet));

        info!(order = %row.order, "inbound record saved");
        self.audit("add", &row.order, &format!("image {}", row.image_url));

        Ok(row)
    }

    /// Delete the n-th record (1-based, header excluded) of the inbound log.
    /// Reads the worksheet fresh so the removed row is the one shown.
    pub fn delete(&self, record_no: usize) -> AppResult<LogRow> {
        let rows = without_header(
            self.store
                .get_all_rows(&self.cfg.table_id, &self.cfg.inbound_sheet)?,
        );

        if record_no == 0 || record_no > rows.len() {
            return Err(AppError::InvalidRowIndex(record_no));
        }
        let removed = LogRow::from_cells(&rows[record_no - 1]);

        self.store
            .delete_row(&self.cfg.table_id, &self.cfg.inbound_sheet, record_no + 1)?;
        self.rows_cache
            .invalidate(&self.rows_key(&self.cfg.inbound_sheet));

        info!(record_no, order = %removed.order, "inbound record deleted");
        self.audit(
            "del",
            &removed.order,
            &format!("record #{record_no} of {}", removed.date),
        );

        Ok(removed)
    }

    /// Drop every cached table so the next read goes to the store.
    pub fn clear_cache(&self) {
        self.lookup_cache.clear();
        self.rows_cache.clear();
        info!("caches cleared");
    }

    fn audit(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = ttlog(
            self.store.as_ref(),
            &self.cfg.table_id,
            operation,
            target,
            message,
        ) {
            warn!(error = %e, "failed to write internal log");
        }
    }
}
