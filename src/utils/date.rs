use chrono::{Local, NaiveDate, NaiveDateTime};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Resolve a day argument: `today`, `yesterday` or `YYYY-MM-DD`.
pub fn resolve_day(arg: Option<&str>) -> Result<NaiveDate, String> {
    match arg.map(str::trim) {
        None | Some("today") => Ok(today()),
        Some("yesterday") => today()
            .pred_opt()
            .ok_or_else(|| "date out of range".to_string()),
        Some(s) => parse_date(s).ok_or_else(|| s.to_string()),
    }
}
