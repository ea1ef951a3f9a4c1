//! "Today" filtering and counters over the inbound log and the scorecard.
//!
//! All functions take rows with the header already removed.

use crate::models::log_row::LogRow;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Day formats accepted in the date cell besides ISO `YYYY-MM-DD`.
const ALT_DAY_FORMATS: [&str; 3] = ["%d-%b-%Y", "%d-%B-%Y", "%d/%m/%Y"];

/// How a date cell is matched against the reference day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateMatch {
    /// The leading date of the cell must be the reference day.
    #[default]
    Prefix,
    /// The reference day, in any accepted format, appears anywhere in the
    /// cell. Can match unrelated text that embeds a date.
    Contains,
}

/// Which scorecard rows count as "pickup ready".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PickupPolicy {
    /// Order cell non-blank and date cell on the reference day.
    #[default]
    DateFiltered,
    /// Every non-blank order cell, whatever the date.
    NonBlank,
}

/// Parse the leading date of a free-text timestamp cell.
pub fn leading_date(cell: &str) -> Option<NaiveDate> {
    let cell = cell.trim();

    if let Some(prefix) = cell.get(..10)
        && let Ok(d) = NaiveDate::parse_from_str(prefix, "%Y-%m-%d")
    {
        return Some(d);
    }

    let token = cell
        .split_whitespace()
        .next()
        .unwrap_or_default();

    ALT_DAY_FORMATS
        .into_iter()
        .chain(std::iter::once("%Y-%m-%d"))
        .find_map(|fmt| NaiveDate::parse_from_str(token, fmt).ok())
}

pub fn is_on_day(cell: &str, day: NaiveDate, mode: DateMatch) -> bool {
    match mode {
        DateMatch::Prefix => {
            let iso = day.format("%Y-%m-%d").to_string();
            let cell = cell.trim();
            if cell.get(..10) == Some(iso.as_str()) {
                return true;
            }
            leading_date(cell) == Some(day)
        }
        DateMatch::Contains => std::iter::once("%Y-%m-%d")
            .chain(ALT_DAY_FORMATS)
            .any(|fmt| cell.contains(&day.format(fmt).to_string())),
    }
}

fn row_on_day(row: &[String], day: NaiveDate, mode: DateMatch) -> bool {
    row.first().is_some_and(|c| is_on_day(c, day, mode))
}

pub fn count_today(rows: &[Vec<String>], today: NaiveDate, mode: DateMatch) -> usize {
    rows.iter().filter(|r| row_on_day(r, today, mode)).count()
}

pub fn filter_today(rows: &[Vec<String>], today: NaiveDate, mode: DateMatch) -> Vec<LogRow> {
    rows.iter()
        .filter(|r| row_on_day(r, today, mode))
        .map(|r| LogRow::from_cells(r))
        .collect()
}

/// Count scorecard rows whose order cell is non-blank, filtered by date
/// depending on the policy. Columns are 1-based.
pub fn count_pickup_ready(
    rows: &[Vec<String>],
    order_column: usize,
    date_column: usize,
    today: NaiveDate,
    policy: PickupPolicy,
    mode: DateMatch,
) -> usize {
    let cell = |row: &Vec<String>, column: usize| -> String {
        column
            .checked_sub(1)
            .and_then(|idx| row.get(idx))
            .cloned()
            .unwrap_or_default()
    };

    rows.iter()
        .filter(|row| !cell(row, order_column).trim().is_empty())
        .filter(|row| match policy {
            PickupPolicy::NonBlank => true,
            PickupPolicy::DateFiltered => is_on_day(&cell(row, date_column), today, mode),
        })
        .count()
}
