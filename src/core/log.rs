use crate::config::Config;
use crate::errors::AppResult;
use crate::sheet::log::LOG_SHEET;
use crate::sheet::{SheetStore, without_header};
use ansi_term::Colour;
use regex::Regex;
use std::sync::OnceLock;

fn strip_ansi(s: &str) -> String {
    static ANSI: OnceLock<Option<Regex>> = OnceLock::new();
    match ANSI.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").ok()) {
        Some(re) => re.replace_all(s, "").into_owned(),
        None => s.to_string(),
    }
}

/// ANSI color of an operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "init" => Colour::RGB(255, 153, 51), // orange
        "export" => Colour::Blue,
        _ => Colour::White,
    }
}

/// Max visible width of the "operation (target)" column
const OP_WIDTH: usize = 60;

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(store: &dyn SheetStore, cfg: &Config) -> AppResult<()> {
        let rows = without_header(store.get_all_rows(&cfg.table_id, LOG_SHEET)?);

        let cell = |r: &Vec<String>, i: usize| r.get(i).cloned().unwrap_or_default();

        let entries: Vec<(usize, String, String, String, String)> = rows
            .iter()
            .enumerate()
            .map(|(i, r)| {
                let raw_date = cell(r, 0);
                let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or(raw_date);
                (i + 1, date, cell(r, 1), cell(r, 2), cell(r, 3))
            })
            .collect();

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries.len().to_string().len();
        let date_w = entries.iter().map(|e| e.1.len()).max().unwrap_or(10);
        let op_w = entries
            .iter()
            .map(|e| e.2.chars().count() + if e.3.is_empty() { 0 } else { e.3.chars().count() + 3 })
            .max()
            .unwrap_or(10)
            .min(OP_WIDTH);

        println!("📜 Internal log:\n");

        for (id, date, operation, target, message) in entries {
            let color = color_for_operation(&operation);

            let mut colored = color.paint(operation.as_str()).to_string();
            if !target.is_empty() {
                colored.push_str(&format!(" ({target})"));
            }

            // truncate on the visible text, ANSI excluded
            let visible = strip_ansi(&colored);
            let shown = if visible.chars().count() > OP_WIDTH {
                let mut s: String = visible.chars().take(OP_WIDTH - 3).collect();
                s.push_str("...");
                match s.split_once(' ') {
                    Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
                    None => color.paint(s.as_str()).to_string(),
                }
            } else {
                colored
            };

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&shown).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                shown,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
