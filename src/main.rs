// Hide console window on Windows release builds
#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use anyhow::Result;
use tinyterm::config::Registry;
use tinyterm::debug_info;
use tinyterm::platform::HostPalette;

fn main() -> Result<()> {
    // Routes log::info!() etc. to the debug log file. When RUST_LOG is set,
    // also mirrors to stderr.
    tinyterm::debug::init_log_bridge(None);

    log::info!("Starting tinyterm {}", tinyterm::VERSION);

    let rc_path = Registry::default_path();
    let mut registry = Registry::with_palette(Box::new(HostPalette::from_env()));
    registry.load(&rc_path);

    let config = registry.active();
    debug_info!(
        "CONFIG",
        "{}x{} cells, font {:?} {}pt, term {}",
        config.cols,
        config.rows,
        config.font.name,
        config.font.size,
        config.term
    );

    println!("{}", registry.render().trim_end());
    Ok(())
}
