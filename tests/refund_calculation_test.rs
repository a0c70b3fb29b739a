use chrono::{Duration, NaiveDate};
use membership_refund::core::calculator::{fee_cap_percent, timeline, TOTAL_DAYS};
use membership_refund::core::report::render_text;
use membership_refund::{calculate, CalculationInput, CalculationResult, CancellationForm, RefundError};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn form(purchase: &str, request: &str, annual: &str, monthly: &str) -> CancellationForm {
    CancellationForm {
        purchase_date: Some(purchase.to_string()),
        request_date: Some(request.to_string()),
        annual_price: Some(annual.to_string()),
        monthly_no_commitment_price: Some(monthly.to_string()),
        ..Default::default()
    }
}

#[test]
fn test_standard_example_end_to_end() {
    let result = form("2024-01-01", "2024-02-10", "1200", "150")
        .calculate()
        .unwrap();

    assert_eq!(
        render_text(&result, "₪"),
        "Cancellation → Membership charge until cancellation: ₪226.85, Cancellation fee: ₪115.00, Refund due: ₪858.15"
    );
}

#[test]
fn test_early_example_end_to_end() {
    let result = form("2024-01-01", "2024-01-05", "1200", "150")
        .calculate()
        .unwrap();

    // 4 * 1200 / 365 = 13.15
    assert_eq!(
        render_text(&result, "₪"),
        "Early cancellation: Refund = ₪1126.85 (minus daily usage ₪13.15, cancel fee ₪60.00)"
    );
}

#[test]
fn test_early_with_daily_memberships_end_to_end() {
    let mut form = form("2024-01-01", "2024-01-12", "1500", "180");
    assert!(form.shows_daily_fields());

    form.daily_membership_price = Some("35".to_string());
    form.daily_membership_count = Some("4".to_string());

    // 75 = 5% of 1500
    assert_eq!(
        form.calculate().unwrap(),
        CalculationResult::EarlyCancellation {
            daily_usage_cost: 140.0,
            cancellation_fee: 75.0,
            refund: 1285.0,
        }
    );
}

#[test]
fn test_missing_input_never_reaches_calculation() {
    let mut form = form("2024-01-01", "2024-01-05", "1200", "150");
    form.purchase_date = None;

    assert!(matches!(
        form.calculate(),
        Err(RefundError::MissingRequiredInput { .. })
    ));
}

#[test]
fn test_completed_regardless_of_other_inputs() {
    let purchase = date(2023, 3, 1);

    for (offset, is_medical) in [(365, true), (400, true), (340, false), (900, false)] {
        for (annual, monthly) in [(0.0, 0.0), (1200.0, 150.0), (5000.0, 20.0)] {
            let input = CalculationInput::new(
                purchase,
                purchase + Duration::days(offset),
                annual,
                monthly,
            )
            .medical(is_medical)
            .with_daily_memberships(50.0, 7);

            let used = timeline(input.purchase_date, input.request_date, is_medical)
                .unwrap()
                .used_days;
            assert!(used >= TOTAL_DAYS);
            assert_eq!(calculate(&input).unwrap(), CalculationResult::Completed);
        }
    }
}

#[test]
fn test_standard_fee_never_exceeds_tier_cap() {
    let purchase = date(2024, 1, 1);

    for used_days in 15..TOTAL_DAYS {
        let input = CalculationInput::new(
            purchase,
            purchase + Duration::days(used_days),
            1200.0,
            500.0,
        )
        .medical(true);

        match calculate(&input).unwrap() {
            CalculationResult::StandardCancellation {
                cancellation_fee,
                refund,
                membership_charge,
                ..
            } => {
                assert!(cancellation_fee <= 1200.0 * fee_cap_percent(used_days));
                assert!((refund - (1200.0 - membership_charge - cancellation_fee)).abs() < 1e-9);
            }
            other => panic!("day {used_days}: unexpected {:?}", other),
        }
    }
}

#[test]
fn test_non_medical_notice_month_with_month_end_request() {
    // 2023-01-31 的通知月結束於 2023-03-03
    let input = CalculationInput::new(date(2023, 1, 1), date(2023, 1, 31), 1200.0, 150.0);
    let t = timeline(input.purchase_date, input.request_date, false).unwrap();
    assert_eq!(t.effective_date, date(2023, 3, 3));

    match calculate(&input).unwrap() {
        CalculationResult::StandardCancellation {
            membership_charge, ..
        } => assert!((membership_charge - 1200.0 / 365.0 * 61.0).abs() < 1e-9),
        other => panic!("unexpected result: {:?}", other),
    }
}
