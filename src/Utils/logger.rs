use chrono::Local;
use log::info;
use simplelog::{
    ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger,
};
use std::fs::File;

/// Initializes logging from a plain string option: "off"/"none" disables
/// logging entirely, otherwise "debug", "info", "warn" or "error" select the
/// filter (default "info"). Output goes to the terminal and to a
/// timestamped log file.
pub fn init_logging(loglevel: Option<String>) {
    let is_logging_disabled = loglevel
        .as_ref()
        .map(|level| level == "off" || level == "none")
        .unwrap_or(false);
    if is_logging_disabled {
        return;
    }

    let log_option = if let Some(level) = loglevel {
        match level.as_str() {
            "debug" => LevelFilter::Debug,
            "info" => LevelFilter::Info,
            "warn" => LevelFilter::Warn,
            "error" => LevelFilter::Error,
            _ => LevelFilter::Info,
        }
    } else {
        LevelFilter::Info
    };

    let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
    let name = format!("log_{}.txt", date_and_time);
    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = vec![TermLogger::new(
        log_option,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    if let Ok(file) = File::create(&name) {
        loggers.push(WriteLogger::new(log_option, Config::default(), file));
    }

    if CombinedLogger::init(loggers).is_ok() {
        info!("logging started with level {}", log_option);
    }
}
