use logo_assets::config::RepairConfig;
use logo_assets::repair::{self, GlobEnumerator};

fn main() {
    env_logger::init();

    let icons = GlobEnumerator::from(&RepairConfig::default());
    match repair::repair_all(&icons) {
        Ok(report) => println!("{report}"),
        Err(e) => println!("Error: {e}"),
    }
}
