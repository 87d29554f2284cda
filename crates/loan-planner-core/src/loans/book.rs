//! In-memory loan book.
//!
//! Holds the borrower's loans and their EMI schedules. The book is an owned
//! value: callers keep one per session and mutate it through `&mut self`.

use std::collections::HashMap;

use super::model::{EmiScheduleItem, EmiStatus, Loan, ScheduleTotals};
use super::seed;
use crate::error::LoanPlannerError;
use crate::simulation::SimulationResult;
use crate::LoanPlannerResult;

#[derive(Debug, Clone, Default)]
pub struct LoanBook {
    loans: Vec<Loan>,
    schedules: HashMap<String, Vec<EmiScheduleItem>>,
}

impl LoanBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Book pre-loaded with the demo loans. Every loan starts with the same
    /// five-month schedule.
    pub fn seeded() -> Self {
        let mut book = Self::new();
        for loan in seed::loans() {
            book.insert(loan, seed::schedule());
        }
        book
    }

    /// Add a loan, replacing any loan and schedule with the same id.
    pub fn insert(&mut self, loan: Loan, schedule: Vec<EmiScheduleItem>) {
        self.schedules.insert(loan.id.clone(), schedule);
        match self.loans.iter_mut().find(|l| l.id == loan.id) {
            Some(existing) => *existing = loan,
            None => self.loans.push(loan),
        }
    }

    pub fn loans(&self) -> &[Loan] {
        &self.loans
    }

    pub fn loan(&self, id: &str) -> LoanPlannerResult<&Loan> {
        self.loans
            .iter()
            .find(|l| l.id == id)
            .ok_or_else(|| LoanPlannerError::LoanNotFound(id.to_string()))
    }

    pub fn emi_schedule(&self, id: &str) -> LoanPlannerResult<&[EmiScheduleItem]> {
        self.schedules
            .get(id)
            .map(Vec::as_slice)
            .ok_or_else(|| LoanPlannerError::LoanNotFound(id.to_string()))
    }

    pub fn schedule_totals(&self, id: &str) -> LoanPlannerResult<ScheduleTotals> {
        self.emi_schedule(id).map(ScheduleTotals::from_schedule)
    }

    /// Apply a simulation to a loan's plan: every upcoming instalment is
    /// marked updated, paid instalments are left alone.
    pub fn apply_simulation(
        &mut self,
        id: &str,
        result: &SimulationResult,
    ) -> LoanPlannerResult<&[EmiScheduleItem]> {
        if result.is_baseline() {
            return Err(LoanPlannerError::InvalidInput {
                field: "simulation_result".into(),
                reason: "Nothing to apply: the simulation matches the current plan".into(),
            });
        }

        let schedule = self
            .schedules
            .get_mut(id)
            .ok_or_else(|| LoanPlannerError::LoanNotFound(id.to_string()))?;

        let mut updated = 0usize;
        for item in schedule.iter_mut().filter(|i| i.status == EmiStatus::Upcoming) {
            item.status = EmiStatus::Updated;
            updated += 1;
        }

        log::info!(
            "applied simulation to loan {}: {} instalments updated, interest saved {}, term reduced {} months",
            id,
            updated,
            result.interest_saved,
            result.term_reduction
        );

        Ok(schedule.as_slice())
    }
}
