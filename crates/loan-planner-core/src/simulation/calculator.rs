//! Deterministic loan simulation calculator.
//!
//! Maps a hypothetical extra payment and payment delay to the interest the
//! borrower would save, the months shaved off the term, and the new total
//! interest. A delay penalty is charged per day and erodes any savings
//! first. The computation is a single pure pass; all money is
//! `rust_decimal::Decimal`.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::LoanPlannerError;
use crate::format::format_inr;
use crate::types::{with_metadata, ComputationOutput, Days, Money, Months, Rate};
use crate::LoanPlannerResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Total interest on the plan with no extra payment and no delay.
pub const BASE_INTEREST: Money = dec!(4000);

/// Delays strictly longer than this many days carry a warning.
pub const WARNING_DELAY_THRESHOLD: Days = 15;

/// Fraction of an extra payment counted as interest saved.
pub const SAVINGS_RATE: Rate = dec!(0.8);

/// Extra payment per month of term reduction.
pub const TERM_REDUCTION_DIVISOR: Money = dec!(1000);

/// Interest added per day of delay.
pub const DELAY_PENALTY_RATE: Money = dec!(50);

/// Upper bound of the extra-payment slider.
pub const MAX_EXTRA_PAYMENT: Money = dec!(10000);

/// Upper bound of the payment-delay slider.
pub const MAX_PAYMENT_DELAY: Days = 30;

/// Largest base interest or per-day penalty a parameter set may carry.
pub const MAX_PARAMETER_AMOUNT: Money = dec!(1_000_000_000_000_000);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A hypothetical change to the repayment plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationInput {
    /// Additional amount paid toward principal.
    #[serde(default, alias = "extraPayment")]
    pub extra_payment: Money,
    /// Days by which the next payment is deferred.
    #[serde(default, alias = "paymentDelay")]
    pub payment_delay: Days,
}

impl SimulationInput {
    pub fn new(extra_payment: Money, payment_delay: Days) -> Self {
        Self {
            extra_payment,
            payment_delay,
        }
    }

    /// True when neither an extra payment nor a delay is requested.
    pub fn is_zero(&self) -> bool {
        self.extra_payment.is_zero() && self.payment_delay == 0
    }
}

/// Projected outcome of a simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    #[serde(alias = "interestSaved")]
    pub interest_saved: Money,
    #[serde(alias = "termReduction")]
    pub term_reduction: Months,
    #[serde(alias = "newTotalInterest")]
    pub new_total_interest: Money,
    #[serde(
        default,
        alias = "warningMessage",
        skip_serializing_if = "Option::is_none",
        deserialize_with = "non_empty"
    )]
    pub warning_message: Option<String>,
}

impl SimulationResult {
    /// The result for a zero input, which callers may show without
    /// invoking the calculator.
    pub fn baseline() -> Self {
        Self {
            interest_saved: Decimal::ZERO,
            term_reduction: 0,
            new_total_interest: BASE_INTEREST,
            warning_message: None,
        }
    }

    pub fn is_baseline(&self) -> bool {
        *self == Self::baseline()
    }
}

/// Calculator constants. `Default` yields the production values; alternate
/// sets can be loaded from JSON for what-if runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParameters {
    pub base_interest: Money,
    pub warning_delay_threshold: Days,
    pub savings_rate: Rate,
    pub term_reduction_divisor: Money,
    pub delay_penalty_rate: Money,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            base_interest: BASE_INTEREST,
            warning_delay_threshold: WARNING_DELAY_THRESHOLD,
            savings_rate: SAVINGS_RATE,
            term_reduction_divisor: TERM_REDUCTION_DIVISOR,
            delay_penalty_rate: DELAY_PENALTY_RATE,
        }
    }
}

impl SimulationParameters {
    pub fn validate(&self) -> LoanPlannerResult<()> {
        if self.base_interest < Decimal::ZERO {
            return Err(LoanPlannerError::InvalidInput {
                field: "base_interest".into(),
                reason: "Base interest cannot be negative".into(),
            });
        }
        if self.base_interest > MAX_PARAMETER_AMOUNT {
            return Err(LoanPlannerError::InvalidInput {
                field: "base_interest".into(),
                reason: format!("Base interest cannot exceed {}", MAX_PARAMETER_AMOUNT),
            });
        }
        if self.savings_rate < Decimal::ZERO || self.savings_rate > Decimal::ONE {
            return Err(LoanPlannerError::InvalidInput {
                field: "savings_rate".into(),
                reason: "Savings rate must be between 0 and 1".into(),
            });
        }
        if self.term_reduction_divisor <= Decimal::ZERO {
            return Err(LoanPlannerError::InvalidInput {
                field: "term_reduction_divisor".into(),
                reason: "Term reduction divisor must be positive".into(),
            });
        }
        if self.delay_penalty_rate < Decimal::ZERO {
            return Err(LoanPlannerError::InvalidInput {
                field: "delay_penalty_rate".into(),
                reason: "Delay penalty rate cannot be negative".into(),
            });
        }
        if self.delay_penalty_rate > MAX_PARAMETER_AMOUNT {
            return Err(LoanPlannerError::InvalidInput {
                field: "delay_penalty_rate".into(),
                reason: format!("Delay penalty rate cannot exceed {}", MAX_PARAMETER_AMOUNT),
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Simulate an extra payment and payment delay against the default plan.
///
/// Never fails. A negative extra payment does not pass the `> 0` test and
/// is treated as no extra payment.
pub fn simulate(input: &SimulationInput) -> SimulationResult {
    simulate_with(&SimulationParameters::default(), input)
}

/// Simulate against an explicit parameter set.
///
/// Arithmetic saturates, so unvalidated parameters cannot panic; use
/// [`run_simulation_with`] to have them rejected instead.
pub fn simulate_with(params: &SimulationParameters, input: &SimulationInput) -> SimulationResult {
    let mut interest_saved = Decimal::ZERO;
    let mut term_reduction: Months = 0;
    let mut new_total_interest = params.base_interest;
    let mut warning_message = None;

    if input.extra_payment > Decimal::ZERO {
        interest_saved = input.extra_payment.saturating_mul(params.savings_rate).floor();
        term_reduction = match input.extra_payment.checked_div(params.term_reduction_divisor) {
            Some(months) => whole_months(months),
            None if params.term_reduction_divisor > Decimal::ZERO => Months::MAX,
            None => 0,
        };
        new_total_interest = params.base_interest.saturating_sub(interest_saved);
    }

    if input.payment_delay > 0 {
        let delay_penalty = Decimal::from(input.payment_delay)
            .saturating_mul(params.delay_penalty_rate)
            .floor();
        new_total_interest = new_total_interest.saturating_add(delay_penalty);
        // The penalty eats into savings before anything else.
        interest_saved = interest_saved.saturating_sub(delay_penalty).max(Decimal::ZERO);

        if input.payment_delay > params.warning_delay_threshold {
            warning_message = Some(delay_warning(delay_penalty, input.payment_delay));
        }
    }

    SimulationResult {
        interest_saved: interest_saved.max(Decimal::ZERO),
        term_reduction,
        new_total_interest: new_total_interest.max(Decimal::ZERO),
        warning_message,
    }
}

/// Run the calculator inside the standard computation envelope.
///
/// Unlike [`simulate`], this rejects a negative extra payment and flags
/// inputs outside the planner's slider ranges.
pub fn run_simulation(
    input: &SimulationInput,
) -> LoanPlannerResult<ComputationOutput<SimulationResult>> {
    run_simulation_with(&SimulationParameters::default(), input)
}

pub fn run_simulation_with(
    params: &SimulationParameters,
    input: &SimulationInput,
) -> LoanPlannerResult<ComputationOutput<SimulationResult>> {
    let start = Instant::now();
    params.validate()?;
    validate_input(input)?;

    let mut warnings = range_warnings(input);
    let result = simulate_with(params, input);
    if let Some(msg) = &result.warning_message {
        warnings.push(msg.clone());
    }

    log::debug!(
        "simulated extra_payment={} payment_delay={}: saved={} term_reduction={} total_interest={}",
        input.extra_payment,
        input.payment_delay,
        result.interest_saved,
        result.term_reduction,
        result.new_total_interest
    );

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Linear extra-payment savings with per-day delay penalty",
        &SimulationAssumptions { params, input },
        warnings,
        elapsed,
        result,
    ))
}

pub(crate) fn validate_input(input: &SimulationInput) -> LoanPlannerResult<()> {
    if input.extra_payment < Decimal::ZERO {
        return Err(LoanPlannerError::InvalidInput {
            field: "extra_payment".into(),
            reason: "Extra payment cannot be negative".into(),
        });
    }
    Ok(())
}

pub(crate) fn range_warnings(input: &SimulationInput) -> Vec<String> {
    let mut warnings = Vec::new();
    if input.extra_payment > MAX_EXTRA_PAYMENT {
        warnings.push(format!(
            "Extra payment {} is above the planner maximum of {}",
            format_inr(input.extra_payment),
            format_inr(MAX_EXTRA_PAYMENT)
        ));
    }
    if input.payment_delay > MAX_PAYMENT_DELAY {
        warnings.push(format!(
            "Payment delay of {} days is above the planner maximum of {} days",
            input.payment_delay, MAX_PAYMENT_DELAY
        ));
    }
    warnings
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct SimulationAssumptions<'a> {
    params: &'a SimulationParameters,
    input: &'a SimulationInput,
}

/// Front ends send an empty string for "no warning".
fn non_empty<'de, D: serde::Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    let raw: Option<String> = Option::deserialize(d)?;
    Ok(raw.filter(|s| !s.is_empty()))
}

fn whole_months(value: Decimal) -> Months {
    value.floor().to_u32().unwrap_or(Months::MAX)
}

fn delay_warning(penalty: Money, delay: Days) -> String {
    format!(
        "⚠️ Interest escalation by {} if you delay by {} days",
        format_inr(penalty),
        delay
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn input(extra: Money, delay: Days) -> SimulationInput {
        SimulationInput::new(extra, delay)
    }

    #[test]
    fn test_zero_input_is_baseline() {
        let result = simulate(&SimulationInput::default());
        assert_eq!(result, SimulationResult::baseline());
        assert!(result.is_baseline());
    }

    #[test]
    fn test_extra_payment_only() {
        let result = simulate(&input(dec!(1000), 0));
        assert_eq!(result.interest_saved, dec!(800));
        assert_eq!(result.term_reduction, 1);
        assert_eq!(result.new_total_interest, dec!(3200));
        assert_eq!(result.warning_message, None);
    }

    #[test]
    fn test_fractional_extra_payment_floors() {
        // 1999 * 0.8 = 1599.2 -> 1599; 1999 / 1000 -> 1
        let result = simulate(&input(dec!(1999), 0));
        assert_eq!(result.interest_saved, dec!(1599));
        assert_eq!(result.term_reduction, 1);
        assert_eq!(result.new_total_interest, dec!(2401));
    }

    #[test]
    fn test_large_extra_payment_clamps_total_interest() {
        // 6000 * 0.8 = 4800 > 4000 base
        let result = simulate(&input(dec!(6000), 0));
        assert_eq!(result.interest_saved, dec!(4800));
        assert_eq!(result.term_reduction, 6);
        assert_eq!(result.new_total_interest, Decimal::ZERO);
    }

    #[test]
    fn test_delay_below_threshold() {
        let result = simulate(&input(Decimal::ZERO, 10));
        assert_eq!(result.interest_saved, Decimal::ZERO);
        assert_eq!(result.term_reduction, 0);
        assert_eq!(result.new_total_interest, dec!(4500));
        assert_eq!(result.warning_message, None);
    }

    #[test]
    fn test_delay_at_threshold_has_no_warning() {
        let result = simulate(&input(Decimal::ZERO, 15));
        assert_eq!(result.new_total_interest, dec!(4750));
        assert_eq!(result.warning_message, None);
    }

    #[test]
    fn test_delay_above_threshold_warns() {
        let result = simulate(&input(Decimal::ZERO, 20));
        assert_eq!(result.new_total_interest, dec!(5000));
        assert_eq!(
            result.warning_message.as_deref(),
            Some("⚠️ Interest escalation by ₹1,000 if you delay by 20 days")
        );
    }

    #[test]
    fn test_penalty_exceeds_savings() {
        let result = simulate(&input(dec!(500), 20));
        assert_eq!(result.interest_saved, Decimal::ZERO);
        assert_eq!(result.term_reduction, 0);
        assert_eq!(result.new_total_interest, dec!(4600));
        assert!(result.warning_message.is_some());
    }

    #[test]
    fn test_penalty_partially_erodes_savings() {
        // saved 4000, penalty 250 -> 3750; total (4000 - 4000) + 250
        let result = simulate(&input(dec!(5000), 5));
        assert_eq!(result.interest_saved, dec!(3750));
        assert_eq!(result.term_reduction, 5);
        assert_eq!(result.new_total_interest, dec!(250));
    }

    #[test]
    fn test_negative_extra_payment_passes_through_as_zero() {
        let result = simulate(&input(dec!(-500), 0));
        assert_eq!(result, SimulationResult::baseline());
    }

    #[test]
    fn test_custom_parameters() {
        let params = SimulationParameters {
            base_interest: dec!(10000),
            savings_rate: dec!(0.5),
            ..SimulationParameters::default()
        };
        let result = simulate_with(&params, &input(dec!(2000), 0));
        assert_eq!(result.interest_saved, dec!(1000));
        assert_eq!(result.term_reduction, 2);
        assert_eq!(result.new_total_interest, dec!(9000));
    }

    #[test]
    fn test_run_simulation_rejects_negative_extra_payment() {
        let err = run_simulation(&input(dec!(-1), 0)).unwrap_err();
        match err {
            LoanPlannerError::InvalidInput { field, .. } => assert_eq!(field, "extra_payment"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_run_simulation_envelope_collects_warnings() {
        let out = run_simulation(&input(dec!(12000), 40)).unwrap();
        // two range warnings plus the delay warning
        assert_eq!(out.warnings.len(), 3);
        assert_eq!(out.metadata.precision, "rust_decimal_128bit");
        assert!(out.result.warning_message.is_some());
    }

    #[test]
    fn test_run_simulation_rejects_zero_divisor() {
        let params = SimulationParameters {
            term_reduction_divisor: Decimal::ZERO,
            ..SimulationParameters::default()
        };
        assert!(run_simulation_with(&params, &input(dec!(1000), 0)).is_err());
    }

    #[test]
    fn test_run_simulation_rejects_oversized_penalty_rate() {
        let params = SimulationParameters {
            delay_penalty_rate: Decimal::MAX,
            ..SimulationParameters::default()
        };
        match run_simulation_with(&params, &input(Decimal::ZERO, 2)).unwrap_err() {
            LoanPlannerError::InvalidInput { field, .. } => assert_eq!(field, "delay_penalty_rate"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_run_simulation_rejects_oversized_base_interest() {
        let params = SimulationParameters {
            base_interest: Decimal::MAX,
            ..SimulationParameters::default()
        };
        match run_simulation_with(&params, &input(Decimal::ZERO, 2)).unwrap_err() {
            LoanPlannerError::InvalidInput { field, .. } => assert_eq!(field, "base_interest"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_simulate_with_extreme_parameters_saturates() {
        let params = SimulationParameters {
            base_interest: Decimal::MAX,
            delay_penalty_rate: Decimal::MAX,
            ..SimulationParameters::default()
        };
        let result = simulate_with(&params, &input(Decimal::ZERO, 2));
        assert_eq!(result.new_total_interest, Decimal::MAX);
        assert_eq!(result.interest_saved, Decimal::ZERO);
    }

    #[test]
    fn test_result_accepts_camel_case_payload() {
        let result: SimulationResult = serde_json::from_str(
            r#"{"interestSaved": 800, "termReduction": 1, "newTotalInterest": 3200, "warningMessage": ""}"#,
        )
        .unwrap();
        assert_eq!(result, simulate(&input(dec!(1000), 0)));
    }

    #[test]
    fn test_missing_warning_is_omitted_from_json() {
        let json = serde_json::to_value(simulate(&input(dec!(1000), 0))).unwrap();
        assert!(json.get("warning_message").is_none());
    }
}
