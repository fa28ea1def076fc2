use logo_assets::config::SplashConfig;
use logo_assets::splash;

fn main() {
    env_logger::init();

    match splash::generate(&SplashConfig::default()) {
        Ok(report) => println!("{report}"),
        Err(e) => println!("Error: {e}"),
    }
}
