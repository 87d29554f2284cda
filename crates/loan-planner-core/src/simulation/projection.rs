//! Month-by-month interest curve for the current plan versus a simulated
//! plan, as plotted next to the simulator sliders.
//!
//! The curve is illustrative: the current plan runs linearly down from the
//! base interest to zero over the horizon, an extra payment scales it down
//! in proportion to the slider maximum, and a delay scales it up by one
//! tenth of a percent per day.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::calculator::{
    range_warnings, validate_input, SimulationInput, BASE_INTEREST, MAX_EXTRA_PAYMENT,
    WARNING_DELAY_THRESHOLD,
};
use crate::types::{with_metadata, ComputationOutput, Money, Months, Rate};
use crate::LoanPlannerResult;

/// Number of months plotted after month zero.
pub const PROJECTION_MONTHS: Months = 20;

/// Fraction of base interest drawn as the reference line.
pub const THRESHOLD_RATIO: Rate = dec!(0.8);

/// Days of delay per 100% uplift of the simulated curve.
const DELAY_SCALE: Decimal = dec!(1000);

/// One month on the projection chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub month: Months,
    pub current_plan: Money,
    pub simulated_plan: Money,
    pub threshold: Money,
}

impl ProjectionPoint {
    /// Interest the simulated plan saves over the current plan at this
    /// month. Negative when a delay makes the simulated plan dearer.
    pub fn difference(&self) -> Money {
        self.current_plan - self.simulated_plan
    }
}

/// Build the `PROJECTION_MONTHS + 1` point curve for an input.
pub fn project_interest(input: &SimulationInput) -> Vec<ProjectionPoint> {
    let horizon = Decimal::from(PROJECTION_MONTHS);
    let threshold = BASE_INTEREST * THRESHOLD_RATIO;

    (0..=PROJECTION_MONTHS)
        .map(|month| {
            let current_plan = BASE_INTEREST * (Decimal::ONE - Decimal::from(month) / horizon);

            let mut simulated_plan = current_plan;
            if input.extra_payment > Decimal::ZERO {
                // Payments past the slider maximum wipe the curve out.
                let factor = (Decimal::ONE - input.extra_payment / MAX_EXTRA_PAYMENT).max(Decimal::ZERO);
                simulated_plan *= factor;
            }
            if input.payment_delay > 0 {
                simulated_plan *= Decimal::ONE + Decimal::from(input.payment_delay) / DELAY_SCALE;
            }

            ProjectionPoint {
                month,
                current_plan: current_plan.max(Decimal::ZERO),
                simulated_plan: simulated_plan.max(Decimal::ZERO),
                threshold,
            }
        })
        .collect()
}

/// Projection wrapped in the standard computation envelope.
pub fn run_projection(
    input: &SimulationInput,
) -> LoanPlannerResult<ComputationOutput<Vec<ProjectionPoint>>> {
    let start = Instant::now();
    validate_input(input)?;

    let mut warnings = range_warnings(input);
    if input.payment_delay > WARNING_DELAY_THRESHOLD {
        warnings.push(format!(
            "Payment delay of {} days exceeds the {}-day warning threshold",
            input.payment_delay, WARNING_DELAY_THRESHOLD
        ));
    }

    let points = project_interest(input);
    log::debug!(
        "projected {} months for extra_payment={} payment_delay={}",
        PROJECTION_MONTHS,
        input.extra_payment,
        input.payment_delay
    );

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Linear interest run-off scaled by extra payment and delay",
        input,
        warnings,
        elapsed,
        points,
    ))
}
