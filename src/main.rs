//! atmaudit main entrypoint.

use atmaudit::run;
use atmaudit::ui::messages;

fn main() {
    if let Err(e) = run() {
        messages::error(e);
        std::process::exit(1);
    }
}
