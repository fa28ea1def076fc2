use logo_assets::config::SquareIconConfig;
use logo_assets::square_icon;

fn main() {
    env_logger::init();

    // Landscape logo -> square launcher icon with transparent padding
    match square_icon::generate(&SquareIconConfig::default()) {
        Ok(report) => println!("{report}"),
        Err(e) => println!("Error: {e}"),
    }
}
