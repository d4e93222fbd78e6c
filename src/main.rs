//! Bouncing Boxes entry point
//!
//! Usage: `bouncing-boxes [soff]`. Passing `soff` turns sound off.

use std::env;
use std::process::ExitCode;

use bouncing_boxes::Settings;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Bouncing Boxes starting...");

    let settings = Settings::from_args(env::args().skip(1));
    match bouncing_boxes::run(settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
