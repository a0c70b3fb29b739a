use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inputs to a single refund calculation. Required fields are already
/// present and parsed; see [`crate::core::form::CancellationForm`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    pub purchase_date: NaiveDate,
    pub request_date: NaiveDate,
    pub annual_price: f64,
    pub monthly_no_commitment_price: f64,
    pub is_medical: bool,
    pub daily_membership_price: Option<f64>,
    pub daily_membership_count: Option<u32>,
}

impl CalculationInput {
    pub fn new(
        purchase_date: NaiveDate,
        request_date: NaiveDate,
        annual_price: f64,
        monthly_no_commitment_price: f64,
    ) -> Self {
        Self {
            purchase_date,
            request_date,
            annual_price,
            monthly_no_commitment_price,
            is_medical: false,
            daily_membership_price: None,
            daily_membership_count: None,
        }
    }

    pub fn medical(mut self, is_medical: bool) -> Self {
        self.is_medical = is_medical;
        self
    }

    pub fn with_daily_memberships(mut self, price: f64, count: u32) -> Self {
        self.daily_membership_price = Some(price);
        self.daily_membership_count = Some(count);
        self
    }

    /// Explicit daily-membership usage cost, only when both fields are supplied.
    pub fn daily_membership_cost(&self) -> Option<f64> {
        match (self.daily_membership_price, self.daily_membership_count) {
            (Some(price), Some(count)) => Some(price * f64::from(count)),
            _ => None,
        }
    }
}

/// Dates and day counts derived before any money is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CancellationTimeline {
    pub effective_date: NaiveDate,
    pub used_days: i64,
    pub request_diff_days: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CalculationResult {
    /// The membership period has fully elapsed; nothing is refunded.
    Completed,
    EarlyCancellation {
        daily_usage_cost: f64,
        cancellation_fee: f64,
        refund: f64,
    },
    StandardCancellation {
        membership_charge: f64,
        cancellation_fee: f64,
        refund: f64,
        is_medical: bool,
    },
}

impl CalculationResult {
    pub fn refund(&self) -> Option<f64> {
        match self {
            CalculationResult::Completed => None,
            CalculationResult::EarlyCancellation { refund, .. }
            | CalculationResult::StandardCancellation { refund, .. } => Some(*refund),
        }
    }

    pub fn cancellation_fee(&self) -> Option<f64> {
        match self {
            CalculationResult::Completed => None,
            CalculationResult::EarlyCancellation {
                cancellation_fee, ..
            }
            | CalculationResult::StandardCancellation {
                cancellation_fee, ..
            } => Some(*cancellation_fee),
        }
    }

    pub fn outcome_name(&self) -> &'static str {
        match self {
            CalculationResult::Completed => "completed",
            CalculationResult::EarlyCancellation { .. } => "early_cancellation",
            CalculationResult::StandardCancellation { .. } => "standard_cancellation",
        }
    }
}
