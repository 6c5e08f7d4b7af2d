use clap::Parser;
use rng_publisher::utils::{logger, validation::Validate};
use rng_publisher::{CliConfig, PublishHandler};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting rng-publisher CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = cli.sink_config();
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let handler = PublishHandler::aws(&config);
    let report = handler.invoke_with_report(cli.request()).await?;

    for delivery in &report.deliveries {
        match &delivery.error {
            None => println!("✅ {}", delivery.sink),
            Some(e) => println!("⚠️  {}: {}", delivery.sink, e),
        }
    }
    println!("{}", report.value);

    Ok(())
}
