//! Interactive session: one service for the whole session, so the catalog
//! and the log tables are fetched once per TTL window instead of once per
//! command.

use crate::cli::commands::{open_service, records_table};
use crate::config::Config;
use crate::core::inbound::InboundService;
use crate::errors::AppResult;
use crate::ui::messages::{field, header, info, success, warning};
use crate::utils::colors::colorize_optional;
use crate::utils::date;
use std::io::{self, BufRead, Write};

const HELP: &str = "\
commands:
  lookup <order>     category and vendor of an order
  orders [text]      list catalog orders, optionally filtered
  today              today's inbound records
  count              number of inbound records today
  scorecard          pickup ready / inbound done counters
  history            whole inbound log
  refresh            clear caches and fetch again on next command
  help               this help
  quit               leave the session";

enum Step {
    Continue,
    Quit,
}

fn execute(service: &InboundService, line: &str) -> Step {
    let (cmd, arg) = match line.trim().split_once(char::is_whitespace) {
        Some((c, a)) => (c, a.trim()),
        None => (line.trim(), ""),
    };

    match cmd {
        "" => {}
        "quit" | "exit" => return Step::Quit,
        "help" => println!("{HELP}"),
        "lookup" if arg.is_empty() => warning("usage: lookup <order>"),
        "lookup" => match service.lookup(arg) {
            Some(found) => {
                header(format!("Order {arg}"));
                field("category", colorize_optional(&found.category));
                field("vendor", colorize_optional(&found.vendor));
            }
            None => warning(format!("Order '{arg}' not found in the catalog.")),
        },
        "orders" => {
            let lookup = service.lookup_table();
            let records = if arg.is_empty() {
                lookup.records()
            } else {
                lookup.search(arg)
            };
            for r in &records {
                println!("{} | {} | {}", r.id, r.category, r.vendor);
            }
            info(format!("{} orders", records.len()));
        }
        "today" => {
            let records = service.today_records(date::today());
            let table = records_table(records.iter().enumerate().map(|(i, r)| (i + 1, r)));
            print!("{}", table.render());
        }
        "count" => println!("{}", service.count_today(date::today())),
        "scorecard" => {
            let score = service.scorecard(date::today());
            field("pickup", score.pickup_ready);
            field("inbound", score.inbound_done);
        }
        "history" => {
            let records = service.history();
            let table = records_table(records.iter().enumerate().map(|(i, r)| (i + 1, r)));
            print!("{}", table.render());
        }
        "refresh" => {
            service.clear_cache();
            success("Cache cleared.");
        }
        other => warning(format!("Unknown command '{other}', type `help`.")),
    }

    Step::Continue
}

pub fn handle(cfg: &Config) -> AppResult<()> {
    let service = open_service(cfg);
    let stdin = io::stdin();

    info("stockinbound shell, type `help` for the command list.");

    loop {
        print!("stockinbound> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            break;
        }

        if let Step::Quit = execute(&service, &line) {
            break;
        }
    }

    Ok(())
}
