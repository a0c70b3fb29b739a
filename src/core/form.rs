use crate::core::calculator::{calculate, within_early_window};
use crate::domain::model::{CalculationInput, CalculationResult};
use crate::utils::error::Result;
use crate::utils::validation::{
    parse_amount, parse_count, parse_date, validate_required_field, Validate,
};
use serde::{Deserialize, Serialize};

pub const PURCHASE_DATE: &str = "purchase_date";
pub const REQUEST_DATE: &str = "request_date";
pub const ANNUAL_PRICE: &str = "annual_price";
pub const MONTHLY_NO_COMMITMENT_PRICE: &str = "monthly_no_commitment_price";
pub const DAILY_MEMBERSHIP_PRICE: &str = "daily_membership_price";
pub const DAILY_MEMBERSHIP_COUNT: &str = "daily_membership_count";

/// Raw, user-entered cancellation request. Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CancellationForm {
    pub purchase_date: Option<String>,
    pub request_date: Option<String>,
    pub annual_price: Option<String>,
    pub monthly_no_commitment_price: Option<String>,
    #[serde(default)]
    pub is_medical: bool,
    pub daily_membership_price: Option<String>,
    pub daily_membership_count: Option<String>,
}

fn is_filled(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

impl CancellationForm {
    /// Required fields that are still empty, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            (PURCHASE_DATE, &self.purchase_date),
            (REQUEST_DATE, &self.request_date),
            (ANNUAL_PRICE, &self.annual_price),
            (MONTHLY_NO_COMMITMENT_PRICE, &self.monthly_no_commitment_price),
        ]
        .into_iter()
        .filter(|(_, value)| !is_filled(value))
        .map(|(name, _)| name)
        .collect()
    }

    /// Whether the daily-membership fields apply, i.e. both dates are valid
    /// and the request is inside the early-cancellation window.
    pub fn shows_daily_fields(&self) -> bool {
        let (Some(purchase), Some(request)) =
            (self.purchase_date.as_deref(), self.request_date.as_deref())
        else {
            return false;
        };

        match (
            parse_date(PURCHASE_DATE, purchase),
            parse_date(REQUEST_DATE, request),
        ) {
            (Ok(purchase), Ok(request)) => within_early_window(purchase, request),
            _ => false,
        }
    }

    pub fn to_input(&self) -> Result<CalculationInput> {
        let purchase_date = parse_date(
            PURCHASE_DATE,
            validate_required_field(PURCHASE_DATE, &self.purchase_date)?,
        )?;
        let request_date = parse_date(
            REQUEST_DATE,
            validate_required_field(REQUEST_DATE, &self.request_date)?,
        )?;
        let annual_price = parse_amount(
            ANNUAL_PRICE,
            validate_required_field(ANNUAL_PRICE, &self.annual_price)?,
        )?;
        let monthly_no_commitment_price = parse_amount(
            MONTHLY_NO_COMMITMENT_PRICE,
            validate_required_field(MONTHLY_NO_COMMITMENT_PRICE, &self.monthly_no_commitment_price)?,
        )?;

        let mut input = CalculationInput::new(
            purchase_date,
            request_date,
            annual_price,
            monthly_no_commitment_price,
        )
        .medical(self.is_medical);

        // 每日會籍欄位只在提前取消期間內才會讀取
        if !within_early_window(purchase_date, request_date) {
            return Ok(input);
        }

        // 兩個欄位都有填才採用每日會籍費用
        match (&self.daily_membership_price, &self.daily_membership_count) {
            (Some(price), Some(count)) if !price.trim().is_empty() && !count.trim().is_empty() => {
                input = input.with_daily_memberships(
                    parse_amount(DAILY_MEMBERSHIP_PRICE, price)?,
                    parse_count(DAILY_MEMBERSHIP_COUNT, count)?,
                );
            }
            (price, count) if is_filled(price) || is_filled(count) => {
                tracing::debug!("Only one daily membership field given, using the daily rate");
            }
            _ => {}
        }

        Ok(input)
    }

    pub fn calculate(&self) -> Result<CalculationResult> {
        let input = self.to_input()?;
        calculate(&input)
    }
}

impl Validate for CancellationForm {
    fn validate(&self) -> Result<()> {
        self.to_input().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::RefundError;

    fn filled_form() -> CancellationForm {
        CancellationForm {
            purchase_date: Some("2024-01-01".to_string()),
            request_date: Some("2024-02-10".to_string()),
            annual_price: Some("1200".to_string()),
            monthly_no_commitment_price: Some("150".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_fields() {
        let form = CancellationForm {
            request_date: Some("2024-02-10".to_string()),
            monthly_no_commitment_price: Some("  ".to_string()),
            ..Default::default()
        };

        assert_eq!(
            form.missing_fields(),
            vec![PURCHASE_DATE, ANNUAL_PRICE, MONTHLY_NO_COMMITMENT_PRICE]
        );
        assert!(filled_form().missing_fields().is_empty());
    }

    #[test]
    fn test_missing_input_blocks_calculation() {
        let mut form = filled_form();
        form.annual_price = Some(String::new());

        match form.calculate() {
            Err(RefundError::MissingRequiredInput { field }) => assert_eq!(field, ANNUAL_PRICE),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_number_is_rejected() {
        let mut form = filled_form();
        form.monthly_no_commitment_price = Some("abc".to_string());

        assert!(matches!(
            form.to_input(),
            Err(RefundError::InvalidInputError { .. })
        ));
    }

    #[test]
    fn test_shows_daily_fields() {
        let mut form = filled_form();
        assert!(!form.shows_daily_fields());

        form.request_date = Some("2024-01-15".to_string());
        assert!(form.shows_daily_fields());

        form.purchase_date = None;
        assert!(!form.shows_daily_fields());
    }

    #[test]
    fn test_daily_fields_need_both_values() {
        let mut form = filled_form();
        form.request_date = Some("2024-01-05".to_string());
        form.daily_membership_price = Some("40".to_string());

        let input = form.to_input().unwrap();
        assert_eq!(input.daily_membership_cost(), None);

        form.daily_membership_count = Some("2".to_string());
        let input = form.to_input().unwrap();
        assert_eq!(input.daily_membership_cost(), Some(80.0));
    }

    #[test]
    fn test_daily_fields_ignored_outside_early_window() {
        let mut form = filled_form();
        form.daily_membership_price = Some("abc".to_string());
        form.daily_membership_count = Some("1.5".to_string());
        assert!(!form.shows_daily_fields());

        let input = form.to_input().unwrap();
        assert_eq!(input.daily_membership_cost(), None);

        let result = form.calculate().unwrap();
        assert_eq!(result.outcome_name(), "standard_cancellation");
        assert!((result.refund().unwrap() - 858.15).abs() < 0.005);
    }

    #[test]
    fn test_invalid_daily_fields_rejected_inside_early_window() {
        let mut form = filled_form();
        form.request_date = Some("2024-01-05".to_string());
        form.daily_membership_price = Some("abc".to_string());
        form.daily_membership_count = Some("2".to_string());

        assert!(matches!(
            form.to_input(),
            Err(RefundError::InvalidInputError { .. })
        ));
    }

    #[test]
    fn test_calculate_standard_example() {
        let result = filled_form().calculate().unwrap();
        assert_eq!(result.outcome_name(), "standard_cancellation");
        assert!((result.refund().unwrap() - 858.15).abs() < 0.005);
    }
}
