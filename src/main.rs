use clap::Parser;
use komga_gap_report::utils::{logger, validation::Validate};
use komga_gap_report::{render_markdown, CliConfig, GapAuditor, KomgaClient};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting komga-gap-report");
    if config.verbose {
        tracing::debug!("Auditing catalog at {}", config.server_url);
    }

    // Credentials are checked before any network access.
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let settings = match config.into_settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let client = KomgaClient::new(settings);
    let auditor = GapAuditor::new(client);

    match auditor.run().await {
        Ok(report) => {
            print!("{}", render_markdown(&report));
        }
        Err(e) => {
            tracing::error!("Audit failed: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
