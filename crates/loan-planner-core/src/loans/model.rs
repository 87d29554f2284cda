use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Money, Months};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
    Active,
    Closed,
    Overdue,
}

/// A borrower's loan as shown on the loan list and overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    pub id: String,
    #[serde(alias = "type")]
    pub loan_type: String,
    pub bank: String,
    /// Original principal.
    pub amount: Money,
    pub current_balance: Money,
    pub emi: Money,
    /// Annual interest rate in percent (10.5 = 10.5% p.a.).
    pub interest_rate: Decimal,
    pub next_due_date: NaiveDate,
    pub status: LoanStatus,
    /// Percent of the loan repaid, 0-100.
    pub progress: u32,
}

impl Loan {
    pub fn principal_repaid(&self) -> Money {
        (self.amount - self.current_balance).max(Decimal::ZERO)
    }

    pub fn is_active(&self) -> bool {
        self.status == LoanStatus::Active
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmiStatus {
    Paid,
    Upcoming,
    /// Upcoming instalment revised by an applied simulation.
    Updated,
}

/// One instalment of an EMI schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmiScheduleItem {
    pub id: u32,
    /// Display label, e.g. `Jan 2025`.
    pub month: String,
    pub due_date: NaiveDate,
    pub emi: Money,
    pub principal: Money,
    pub interest: Money,
    /// Outstanding balance after this instalment.
    pub balance: Money,
    pub status: EmiStatus,
}

impl EmiScheduleItem {
    pub fn new(
        id: u32,
        due_date: NaiveDate,
        principal: Money,
        interest: Money,
        balance: Money,
    ) -> Self {
        Self {
            id,
            month: due_date.format("%b %Y").to_string(),
            due_date,
            emi: principal + interest,
            principal,
            interest,
            balance,
            status: EmiStatus::Upcoming,
        }
    }
}

/// Column totals of a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleTotals {
    pub instalments: Months,
    pub total_emi: Money,
    pub total_principal: Money,
    pub total_interest: Money,
    pub closing_balance: Money,
}

impl ScheduleTotals {
    pub fn from_schedule(schedule: &[EmiScheduleItem]) -> Self {
        Self {
            instalments: schedule.len() as Months,
            total_emi: schedule.iter().map(|i| i.emi).sum(),
            total_principal: schedule.iter().map(|i| i.principal).sum(),
            total_interest: schedule.iter().map(|i| i.interest).sum(),
            closing_balance: schedule.last().map(|i| i.balance).unwrap_or(Decimal::ZERO),
        }
    }
}
