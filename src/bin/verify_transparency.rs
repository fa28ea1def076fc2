use logo_assets::config::VerifyConfig;
use logo_assets::verify;

fn main() {
    env_logger::init();

    // Informational only: the exit status is 0 whatever the verdict
    let config = VerifyConfig::default();
    println!("{}", verify::verify_all(&config.files));
}
