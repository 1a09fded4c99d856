use std::path::Path;
use std::process;

use colored::Colorize;
use customer_registry::config::DEFAULT_CONFIG_FILE;
use customer_registry::console::should_use_colors;
use customer_registry::{ConsoleSink, PromptReader, RegistryConfig, Session};

fn main() {
    let config = match RegistryConfig::load_or_default(Path::new(DEFAULT_CONFIG_FILE)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{} {err}", "Configuration error:".red().bold());
            process::exit(1);
        }
    };

    // validate() already accepted the level
    let level = config.level().unwrap_or(tracing::Level::WARN);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let store = match config.build_store() {
        Ok(store) => store,
        Err(err) => {
            eprintln!("{} {err}", "Configuration error:".red().bold());
            process::exit(1);
        }
    };

    let sink = ConsoleSink::stdout(should_use_colors(config.color));
    let mut session = Session::new(config.title.clone(), store, PromptReader::stdio(), sink);

    if let Err(err) = session.run() {
        tracing::error!(error = %err, "console I/O failed");
        process::exit(1);
    }
}
