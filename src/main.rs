use clap::Parser;
use ebisearch_export::utils::logger;
use ebisearch_export::{CliConfig, ExportEngine, ExportPipeline, FtpUploader, LocalStorage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting ebisearch-export");

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };
    tracing::debug!("Resolved config: {:?}", config);

    let storage = LocalStorage::new(config.output_path.clone());
    let uploader = FtpUploader::new(config.ftp.clone());
    let client = config.http_client()?;
    let pipeline = ExportPipeline::with_client(storage, config, uploader, client);

    let engine = ExportEngine::new(pipeline);

    match engine.run().await {
        Ok(summary) => {
            println!(
                "Processed {} models and saved to {}",
                summary.entry_count,
                summary.gzip_path.display()
            );
            println!("Uploaded {} to {}", summary.gzip_path.display(), summary.remote_path);
        }
        Err(e) => {
            tracing::error!("❌ Export failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    }

    Ok(())
}
