use site_jsonld::utils::{logger, validation::Validate};
use site_jsonld::{DistributorsPipeline, LocalStorage, PipelineConfig, SchemaEngine};

fn main() -> anyhow::Result<()> {
    logger::init_cli_logger();

    tracing::info!("Starting distributor schema update");

    let config = PipelineConfig::distributors();
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let storage = LocalStorage::new(".".to_string());
    let pipeline = DistributorsPipeline::new(storage, config);
    let engine = SchemaEngine::new(pipeline);

    match engine.run() {
        Ok(path) => {
            tracing::info!("✅ Schema update completed: {}", path);
        }
        Err(e) => {
            tracing::error!("❌ Schema update failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}
