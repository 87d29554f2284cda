//! Repayment simulation: the extra-payment / payment-delay calculator and
//! the interest projection curve drawn alongside it.

pub mod calculator;
pub mod projection;

pub use calculator::{simulate, SimulationInput, SimulationParameters, SimulationResult};
