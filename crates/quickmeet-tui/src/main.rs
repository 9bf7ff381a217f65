//! QuickMeet terminal entry point.

use clap::Parser;
use quickmeet_tui::{Args, Runtime, SystemEnv, TerminalDriver, logging};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    args.validate()?;
    let route = args.initial_route()?;

    logging::init(&args.log_file, &args.log_level)?;
    tracing::info!(path = %route, cell_width = args.cell_width, "QuickMeet starting");

    let env = SystemEnv::new();
    let driver = TerminalDriver::new(env, args.cell_width)?;
    let width_px = driver.width_px()?;

    Runtime::new(driver, env, width_px, route).run().await?;

    tracing::info!("QuickMeet stopped");
    Ok(())
}
