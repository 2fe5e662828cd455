use anyhow::{Context, Result};
use log::info;

mod core;
mod engine;
mod game;

use game::{DrillConfig, GameController, QuestionGenerator};

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting keypad drill...");

    let config = DrillConfig::default();
    config.validate().context("Invalid drill configuration")?;
    info!(
        "Operands {}..={}, key settle {} ms",
        config.operand_min,
        config.operand_max,
        config.debounce.as_millis()
    );

    let devices = engine::console::peripherals().context("Failed to set up peripherals")?;
    info!("Peripherals ready, type keys from the legend: 0-9, A = submit, * = clear");

    let problems = Box::new(QuestionGenerator::from_clock(config.operand_range()));
    let mut controller = GameController::new(config, problems, devices);

    controller.power_on();
    controller.run()
}
