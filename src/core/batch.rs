use crate::core::form::CancellationForm;
use crate::core::report::{format_amount, render_text};
use crate::domain::model::CalculationResult;
use crate::utils::error::{RefundError, Result};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// One cancellation request per CSV line. The daily-membership columns
/// may be omitted entirely.
#[derive(Debug, Clone, Deserialize)]
struct BatchRecord {
    purchase_date: Option<String>,
    request_date: Option<String>,
    annual_price: Option<String>,
    monthly_no_commitment_price: Option<String>,
    is_medical: Option<bool>,
    daily_membership_price: Option<String>,
    daily_membership_count: Option<String>,
}

impl From<BatchRecord> for CancellationForm {
    fn from(record: BatchRecord) -> Self {
        CancellationForm {
            purchase_date: record.purchase_date,
            request_date: record.request_date,
            annual_price: record.annual_price,
            monthly_no_commitment_price: record.monthly_no_commitment_price,
            is_medical: record.is_medical.unwrap_or(false),
            daily_membership_price: record.daily_membership_price,
            daily_membership_count: record.daily_membership_count,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct BatchRow {
    row: usize,
    outcome: String,
    daily_usage_cost: Option<String>,
    membership_charge: Option<String>,
    cancellation_fee: Option<String>,
    refund: Option<String>,
    message: String,
    error: Option<String>,
}

impl BatchRow {
    fn from_result(row: usize, result: &CalculationResult, currency: &str) -> Self {
        let (daily_usage_cost, membership_charge) = match result {
            CalculationResult::EarlyCancellation {
                daily_usage_cost, ..
            } => (Some(format_amount(*daily_usage_cost)), None),
            CalculationResult::StandardCancellation {
                membership_charge, ..
            } => (None, Some(format_amount(*membership_charge))),
            CalculationResult::Completed => (None, None),
        };

        Self {
            row,
            outcome: result.outcome_name().to_string(),
            daily_usage_cost,
            membership_charge,
            cancellation_fee: result.cancellation_fee().map(format_amount),
            refund: result.refund().map(format_amount),
            message: render_text(result, currency),
            error: None,
        }
    }

    fn from_error(row: usize, message: String) -> Self {
        Self {
            row,
            outcome: "error".to_string(),
            daily_usage_cost: None,
            membership_charge: None,
            cancellation_fee: None,
            refund: None,
            message: String::new(),
            error: Some(message),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub failed: usize,
}

/// Calculates a refund for every CSV line of `reader` and writes one result
/// line per input line to `writer`. Invalid lines are reported in the
/// `error` column and do not stop the batch.
pub fn run_batch<R: Read, W: Write>(reader: R, writer: W, currency: &str) -> Result<BatchSummary> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut csv_writer = csv::Writer::from_writer(writer);
    let mut summary = BatchSummary::default();

    for (index, record) in csv_reader.deserialize::<BatchRecord>().enumerate() {
        let row = index + 1;

        let outcome = match record {
            Ok(record) => CancellationForm::from(record).calculate(),
            Err(e) if matches!(e.kind(), csv::ErrorKind::Io(_)) => return Err(e.into()),
            Err(e) => Err(RefundError::from(e)),
        };

        let output = match outcome {
            Ok(result) => {
                tracing::debug!("Row {}: {}", row, result.outcome_name());
                BatchRow::from_result(row, &result, currency)
            }
            Err(e) => {
                tracing::warn!("⚠️ Row {} skipped: {}", row, e);
                summary.failed += 1;
                BatchRow::from_error(row, e.to_string())
            }
        };

        csv_writer.serialize(output)?;
        summary.processed += 1;
    }

    csv_writer.flush()?;
    Ok(summary)
}
