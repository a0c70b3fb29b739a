use clap::Parser;
use membership_refund::core::report;
use membership_refund::utils::error::{ErrorSeverity, RefundError};
use membership_refund::utils::{logger, validation::Validate};
use membership_refund::{CalculatorConfig, CliConfig};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ Calculation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}

fn run(config: &CliConfig) -> Result<(), RefundError> {
    let defaults = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            CalculatorConfig::from_file(path)?
        }
        None => CalculatorConfig::default(),
    };
    defaults.validate()?;

    let mut form = config.to_form();
    defaults.apply_defaults(&mut form);

    let missing = form.missing_fields();
    if !missing.is_empty() {
        tracing::warn!("Missing required fields: {}", missing.join(", "));
    }

    if form.shows_daily_fields() && form.daily_membership_count.is_none() {
        tracing::info!(
            "💡 Request is within 14 days of purchase; --daily-price and --daily-count may be given"
        );
    }

    let result = form.calculate()?;
    tracing::info!("✅ Outcome: {}", result.outcome_name());

    println!(
        "{}",
        report::render(&result, config.format, defaults.currency_symbol())?
    );
    Ok(())
}
