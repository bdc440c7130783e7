use clap::Parser;

fn main() -> miette::Result<()> {
    // Initialize logging
    let _log_guard = holocron::core::logging::init();
    log::info!("Holocron v{} starting", holocron::VERSION);

    let cli = holocron::cli::Cli::parse();
    let config = holocron::config::AppConfig::load();

    holocron::cli::run(cli, &config)
}
