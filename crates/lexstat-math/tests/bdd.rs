use lexstat_math::{round_f64, safe_percent, safe_ratio};

#[test]
fn given_zero_denominator_when_safe_ratio_is_used_then_result_is_zero() {
    let got = safe_ratio(99, 0);
    assert_eq!(got, 0.0);
}

#[test]
fn given_zero_word_count_when_percent_is_derived_then_sentinel_is_returned() {
    let got = safe_percent(0, 0);
    assert_eq!(got, 0.0);
    assert!(!got.is_nan());
}

#[test]
fn given_fraction_when_rounding_then_requested_precision_is_applied() {
    let got = round_f64(12.34567, 3);
    assert_eq!(got, 12.346);
}

#[test]
fn given_ratio_when_rounded_for_display_then_percentage_is_readable() {
    let pct = round_f64(safe_percent(3, 8), 2);
    assert_eq!(pct, 37.5);
}
