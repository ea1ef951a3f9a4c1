//! stockinbound main entrypoint.

use stockinbound::run;
use stockinbound::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
