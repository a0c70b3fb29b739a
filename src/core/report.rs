use crate::domain::model::CalculationResult;
use crate::utils::error::Result;

pub const DEFAULT_CURRENCY_SYMBOL: &str = "₪";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Formats a money amount with two decimals.
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

pub fn render_text(result: &CalculationResult, currency: &str) -> String {
    match result {
        CalculationResult::Completed => {
            "Membership already complete, no refund possible.".to_string()
        }
        CalculationResult::EarlyCancellation {
            daily_usage_cost,
            cancellation_fee,
            refund,
        } => format!(
            "Early cancellation: Refund = {c}{} (minus daily usage {c}{}, cancel fee {c}{})",
            format_amount(*refund),
            format_amount(*daily_usage_cost),
            format_amount(*cancellation_fee),
            c = currency,
        ),
        CalculationResult::StandardCancellation {
            membership_charge,
            cancellation_fee,
            refund,
            is_medical,
        } => format!(
            "{}Cancellation → Membership charge until cancellation: {c}{}, Cancellation fee: {c}{}, Refund due: {c}{}",
            if *is_medical { "Medical " } else { "" },
            format_amount(*membership_charge),
            format_amount(*cancellation_fee),
            format_amount(*refund),
            c = currency,
        ),
    }
}

pub fn render_json(result: &CalculationResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

pub fn render(result: &CalculationResult, format: OutputFormat, currency: &str) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(result, currency)),
        OutputFormat::Json => render_json(result),
    }
}
