use classifier_window::main::ClassifierWindow;
use classifier_window::render::native_options;
use config::Config;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use std::sync::Arc;

mod classifier_window;
mod config;
mod image_classifier;
mod label_table;
mod library;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::default();

    let logger = Arc::new(LoggerConsole::new(config.logger_timezone));

    logger.info("Starting image classifier...")?;

    let window = ClassifierWindow::load(&config, logger.clone())?;

    let options = native_options(&config.window_title, config.window_size);

    eframe::run_native(
        &config.window_title,
        options,
        Box::new(move |_cc| Box::new(window)),
    )
    .map_err(|e| e.to_string())?;

    logger.info("Window closed")?;

    Ok(())
}
