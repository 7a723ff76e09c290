use clap::Parser;
use iss_spotter::core::format;
use iss_spotter::utils::{logger, validation::Validate};
use iss_spotter::{CliConfig, SpotterClient, SpotterEngine, TomlConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = CliConfig::parse();

    // 先套用設定檔再初始化日誌，verbose 可能來自檔案
    if let Some(path) = config.config.clone() {
        match TomlConfig::from_file(&path) {
            Ok(file) => config.apply_file(&file),
            Err(e) => {
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        }
    }

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting iss-spotter");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let client = SpotterClient::new(config);
    let engine = SpotterEngine::new(client);

    match engine.run().await {
        Ok(passes) => {
            if passes.is_empty() {
                tracing::warn!("Provider returned no upcoming fly-overs");
            }
            format::print_fly_overs(&passes);
        }
        Err(e) => {
            tracing::error!(
                "❌ Fly-over lookup failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                iss_spotter::utils::error::ErrorSeverity::Low => 0,
                iss_spotter::utils::error::ErrorSeverity::Medium => 2,
                iss_spotter::utils::error::ErrorSeverity::High => 1,
                iss_spotter::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
