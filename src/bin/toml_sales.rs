use anyhow::Context;
use clap::Parser;
use sales_etl::core::ConfigProvider;
use sales_etl::utils::{logger, validation::Validate};
use sales_etl::{EtlEngine, LocalStorage, SalesPipeline, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-sales")]
#[command(about = "Sales ETL driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "sales-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Show the configuration and record count without writing anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("Failed to load config file '{}'", args.config))?;

    let verbose = args.verbose || config.verbose();
    if config.json_logs() {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("🚀 Starting TOML-based sales ETL");
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        anyhow::bail!(e.user_friendly_message());
    }

    display_config_summary(&config, &args);

    let storage = LocalStorage::default();
    let pipeline = SalesPipeline::new(storage, config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - no report will be written");
        perform_dry_run(&pipeline).await?;
        return Ok(());
    }

    let engine = EtlEngine::new(pipeline);
    let rendered = engine.run().await.context("Sales ETL process failed")?;

    tracing::info!("✅ Sales ETL process completed successfully!");
    print!("{}", rendered);

    Ok(())
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    eprintln!("📋 Configuration Summary:");
    eprintln!(
        "  Pipeline: {} {}",
        config.pipeline.name,
        config.pipeline.version.as_deref().unwrap_or("")
    );
    if let Some(description) = &config.pipeline.description {
        eprintln!("  Description: {}", description);
    }
    eprintln!("  Source: {}", config.input_path().unwrap_or("built-in sample"));
    eprintln!("  Output: {}", config.output_path().unwrap_or("stdout only"));
    eprintln!("  Formats: {}", config.output_formats().join(", "));

    if args.dry_run {
        eprintln!("  🔍 DRY RUN MODE ENABLED");
    }

    eprintln!();
}

async fn perform_dry_run(
    pipeline: &SalesPipeline<LocalStorage, TomlConfig>,
) -> anyhow::Result<()> {
    use sales_etl::core::Pipeline;

    let items = pipeline.extract().await.context("Failed to read sales records")?;
    let report = pipeline.transform(items).await?;

    eprintln!("🔍 Dry Run Analysis:");
    eprintln!("  Records read: {}", report.original.len());
    eprintln!("  Records kept: {}", report.filtered.len());
    for total in &report.totals {
        eprintln!("  {}: {}", total.sales_person, total.profit);
    }

    Ok(())
}
