//! Membership cancellation refund calculation.
//!
//! Pure functions only: given the purchase and request dates and the prices,
//! [`calculate`] picks one of three outcomes.
//!
//! * the membership year has already elapsed ([`CalculationResult::Completed`]);
//! * the request came within [`EARLY_WINDOW_DAYS`] of purchase, so the member
//!   pays for usage plus a small flat fee;
//! * otherwise usage is charged per day and the cancellation fee is the price
//!   difference to the no-commitment plan, capped by a tier of the annual price.

use chrono::NaiveDate;

use crate::domain::calendar::{add_one_month, days_between};
use crate::domain::model::{CalculationInput, CalculationResult, CancellationTimeline};
use crate::utils::error::{RefundError, Result};

/// Length of the membership term in days.
pub const TOTAL_DAYS: i64 = 365;

/// Requests up to this many days after purchase are early cancellations.
pub const EARLY_WINDOW_DAYS: i64 = 14;

pub const EARLY_FEE_PERCENT: f64 = 0.05;
pub const EARLY_FEE_MAX: f64 = 100.0;

/// Days per month when converting used days to used months.
const DAYS_PER_MONTH: f64 = 30.0;

/// Computes the effective cancellation date and the day counts used by
/// every branch.
///
/// Non-medical cancellations take effect one calendar month after the
/// request; medical ones take effect on the request date.
///
/// # Errors
///
/// Returns [`RefundError::DateOutOfRange`] when the notice month runs past
/// the last representable date.
pub fn timeline(
    purchase_date: NaiveDate,
    request_date: NaiveDate,
    is_medical: bool,
) -> Result<CancellationTimeline> {
    let effective_date = if is_medical {
        request_date
    } else {
        add_one_month(request_date).ok_or_else(|| RefundError::DateOutOfRange {
            date: request_date.to_string(),
        })?
    };

    Ok(CancellationTimeline {
        effective_date,
        used_days: days_between(purchase_date, effective_date),
        request_diff_days: days_between(purchase_date, request_date),
    })
}

/// Whether a request falls inside the early-cancellation window. Requests
/// dated before the purchase count as early.
pub fn within_early_window(purchase_date: NaiveDate, request_date: NaiveDate) -> bool {
    days_between(purchase_date, request_date) <= EARLY_WINDOW_DAYS
}

/// Cap on the standard cancellation fee as a fraction of the annual price.
///
/// Thresholds are one and two thirds of the term, compared as real numbers:
/// day 121 is the last day of the first tier, day 243 the last of the second.
pub fn fee_cap_percent(used_days: i64) -> f64 {
    let used = used_days as f64;
    let total = TOTAL_DAYS as f64;

    if used <= total / 3.0 {
        0.25
    } else if used <= 2.0 * total / 3.0 {
        0.20
    } else {
        0.17
    }
}

/// Calculates the refund for one cancellation request.
///
/// # Errors
///
/// Only [`RefundError::DateOutOfRange`], see [`timeline`].
pub fn calculate(input: &CalculationInput) -> Result<CalculationResult> {
    let timeline = timeline(input.purchase_date, input.request_date, input.is_medical)?;

    if timeline.used_days >= TOTAL_DAYS {
        tracing::debug!(used_days = timeline.used_days, "membership term already complete");
        return Ok(CalculationResult::Completed);
    }

    let daily_rate = input.annual_price / TOTAL_DAYS as f64;

    if timeline.request_diff_days <= EARLY_WINDOW_DAYS {
        tracing::debug!(
            request_diff_days = timeline.request_diff_days,
            "early cancellation"
        );
        return Ok(early_cancellation(input, timeline.request_diff_days, daily_rate));
    }

    tracing::debug!(used_days = timeline.used_days, "standard cancellation");
    Ok(standard_cancellation(input, timeline.used_days, daily_rate))
}

fn early_cancellation(
    input: &CalculationInput,
    request_diff_days: i64,
    daily_rate: f64,
) -> CalculationResult {
    let daily_usage_cost = input
        .daily_membership_cost()
        .unwrap_or_else(|| request_diff_days.max(0) as f64 * daily_rate);

    let cancellation_fee = (input.annual_price * EARLY_FEE_PERCENT).min(EARLY_FEE_MAX);
    let refund = input.annual_price - daily_usage_cost - cancellation_fee;

    CalculationResult::EarlyCancellation {
        daily_usage_cost,
        cancellation_fee,
        refund,
    }
}

fn standard_cancellation(
    input: &CalculationInput,
    used_days: i64,
    daily_rate: f64,
) -> CalculationResult {
    let membership_charge = daily_rate * used_days as f64;

    let monthly_commitment = input.annual_price / 12.0;
    let monthly_difference = input.monthly_no_commitment_price - monthly_commitment;
    let used_months = used_days as f64 / DAYS_PER_MONTH;
    let raw_fee = monthly_difference * used_months;

    let max_allowed = input.annual_price * fee_cap_percent(used_days);
    let cancellation_fee = raw_fee.min(max_allowed);
    let refund = input.annual_price - (membership_charge + cancellation_fee);

    CalculationResult::StandardCancellation {
        membership_charge,
        cancellation_fee,
        refund,
        is_medical: input.is_medical,
    }
}
