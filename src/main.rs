//! worksummary main entrypoint.

use worksummary::run;
use worksummary::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
