use loan_planner_core::simulation::calculator::{
    run_simulation, simulate, SimulationInput, SimulationResult, BASE_INTEREST,
};
use loan_planner_core::simulation::projection::{run_projection, PROJECTION_MONTHS};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Calculator
// ===========================================================================

#[test]
fn test_zero_input_baseline() {
    let result = simulate(&SimulationInput::new(Decimal::ZERO, 0));
    assert_eq!(
        result,
        SimulationResult {
            interest_saved: Decimal::ZERO,
            term_reduction: 0,
            new_total_interest: dec!(4000),
            warning_message: None,
        }
    );
}

#[test]
fn test_extra_payment_only() {
    // 1000 * 0.8 = 800 saved, 1000 / 1000 = 1 month, 4000 - 800 = 3200
    let result = simulate(&SimulationInput::new(dec!(1000), 0));
    assert_eq!(result.interest_saved, dec!(800));
    assert_eq!(result.term_reduction, 1);
    assert_eq!(result.new_total_interest, dec!(3200));
    assert!(result.warning_message.is_none());
}

#[test]
fn test_delay_only_below_threshold() {
    // penalty 10 * 50 = 500
    let result = simulate(&SimulationInput::new(Decimal::ZERO, 10));
    assert_eq!(result.interest_saved, Decimal::ZERO);
    assert_eq!(result.new_total_interest, dec!(4500));
    assert!(result.warning_message.is_none());
}

#[test]
fn test_delay_only_above_threshold() {
    let result = simulate(&SimulationInput::new(Decimal::ZERO, 20));
    assert_eq!(result.new_total_interest, dec!(5000));
    let warning = result.warning_message.expect("warning expected for 20 days");
    assert!(warning.contains("₹1,000"));
    assert!(warning.contains("20 days"));
}

#[test]
fn test_combined_penalty_exceeds_savings() {
    // saved 400, penalty 1000 -> saved 0; total (4000 - 400) + 1000
    let result = simulate(&SimulationInput::new(dec!(500), 20));
    assert_eq!(result.interest_saved, Decimal::ZERO);
    assert_eq!(result.new_total_interest, dec!(4600));
    assert!(result.warning_message.is_some());
}

#[test]
fn test_outputs_never_negative_across_slider_range() {
    for step in 0..=100 {
        let extra = Decimal::from(step * 100);
        for delay in 0..=30u32 {
            let r = simulate(&SimulationInput::new(extra, delay));
            assert!(r.interest_saved >= Decimal::ZERO, "extra={extra} delay={delay}");
            assert!(r.new_total_interest >= Decimal::ZERO, "extra={extra} delay={delay}");
            assert_eq!(r.warning_message.is_some(), delay > 15);
        }
    }
}

#[test]
fn test_repeated_calls_are_identical() {
    let input = SimulationInput::new(dec!(3700), 17);
    let first = simulate(&input);
    for _ in 0..10 {
        assert_eq!(simulate(&input), first);
    }
}

#[test]
fn test_delay_never_creates_savings() {
    for delay in 1..=30u32 {
        let r = simulate(&SimulationInput::new(Decimal::ZERO, delay));
        assert_eq!(r.interest_saved, Decimal::ZERO);
        assert_eq!(r.term_reduction, 0);
        assert!(r.new_total_interest > BASE_INTEREST);
    }
}

#[test]
fn test_camel_case_input_is_accepted() {
    let input: SimulationInput =
        serde_json::from_str(r#"{"extraPayment": 1000, "paymentDelay": 5}"#).unwrap();
    assert_eq!(input, SimulationInput::new(dec!(1000), 5));
}

#[test]
fn test_envelope_echoes_input() {
    let out = run_simulation(&SimulationInput::new(dec!(1000), 0)).unwrap();
    assert_eq!(out.result.new_total_interest, dec!(3200));
    assert!(out.warnings.is_empty());
    assert!(out.assumptions.get("input").is_some());
}

// ===========================================================================
// Projection
// ===========================================================================

#[test]
fn test_projection_spans_horizon() {
    let out = run_projection(&SimulationInput::new(dec!(1000), 0)).unwrap();
    assert_eq!(out.result.len(), PROJECTION_MONTHS as usize + 1);
    assert_eq!(out.result.last().unwrap().current_plan, Decimal::ZERO);
    // 4000 * 0.9
    assert_eq!(out.result[0].simulated_plan, dec!(3600));
}

#[test]
fn test_projection_rejects_negative_extra_payment() {
    assert!(run_projection(&SimulationInput::new(dec!(-10), 0)).is_err());
}
