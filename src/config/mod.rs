pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::form::CancellationForm;
#[cfg(feature = "cli")]
use crate::core::report::OutputFormat;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "membership-refund")]
#[command(about = "Calculate the refund for a cancelled annual membership")]
pub struct CliConfig {
    /// Purchase date (YYYY-MM-DD)
    #[arg(long)]
    pub purchase_date: Option<String>,

    /// Cancellation request date (YYYY-MM-DD)
    #[arg(long)]
    pub request_date: Option<String>,

    #[arg(long)]
    pub annual_price: Option<String>,

    /// Monthly price without commitment
    #[arg(long)]
    pub monthly_price: Option<String>,

    /// Medical cancellation (no notice month)
    #[arg(long)]
    pub medical: bool,

    /// Price of a daily membership, used for requests within 14 days of purchase
    #[arg(long)]
    pub daily_price: Option<String>,

    /// Number of daily memberships used
    #[arg(long)]
    pub daily_count: Option<String>,

    /// Path to TOML configuration file with default prices
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn to_form(&self) -> CancellationForm {
        CancellationForm {
            purchase_date: self.purchase_date.clone(),
            request_date: self.request_date.clone(),
            annual_price: self.annual_price.clone(),
            monthly_no_commitment_price: self.monthly_price.clone(),
            is_medical: self.medical,
            daily_membership_price: self.daily_price.clone(),
            daily_membership_count: self.daily_count.clone(),
        }
    }
}
