use clap::Parser;
use useful_extensions::app::commands;
use useful_extensions::utils::error::{ErrorSeverity, ExtError};
use useful_extensions::utils::logger;
use useful_extensions::CliConfig;

fn main() {
    let config = CliConfig::parse();

    // 載入配置並套用命令列覆蓋
    let settings = match config.resolve_settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    };

    // 初始化日誌
    if settings.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(settings.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);
    tracing::debug!("Resolved settings: {:?}", settings);

    let outcome = commands::run(&config.command, &settings)
        .and_then(|report| commands::render(&report, settings.format));

    match outcome {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!(
                "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    }
}

fn exit_code(e: &ExtError) -> i32 {
    match e.severity() {
        ErrorSeverity::Medium => 2, // 輸入錯誤
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3, // 系統錯誤
    }
}
