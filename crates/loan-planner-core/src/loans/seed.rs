//! Demo data the book starts with.

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::model::{EmiScheduleItem, Loan, LoanStatus};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

pub(super) fn loans() -> Vec<Loan> {
    vec![
        Loan {
            id: "1".into(),
            loan_type: "Personal Loan".into(),
            bank: "HDFC Bank".into(),
            amount: dec!(180000),
            current_balance: dec!(166658),
            emi: dec!(8329),
            interest_rate: dec!(10.5),
            next_due_date: ymd(2025, 1, 21),
            status: LoanStatus::Active,
            progress: 18,
        },
        Loan {
            id: "2".into(),
            loan_type: "Home Loan".into(),
            bank: "SBI Bank".into(),
            amount: dec!(2500000),
            current_balance: dec!(2245000),
            emi: dec!(25000),
            interest_rate: dec!(8.5),
            next_due_date: ymd(2025, 1, 15),
            status: LoanStatus::Active,
            progress: 12,
        },
    ]
}

pub(super) fn schedule() -> Vec<EmiScheduleItem> {
    vec![
        EmiScheduleItem::new(1, ymd(2025, 1, 21), dec!(7754), dec!(575), dec!(158904)),
        EmiScheduleItem::new(2, ymd(2025, 2, 21), dec!(7822), dec!(507), dec!(151082)),
        EmiScheduleItem::new(3, ymd(2025, 3, 21), dec!(7890), dec!(439), dec!(143192)),
        EmiScheduleItem::new(4, ymd(2025, 4, 21), dec!(7959), dec!(370), dec!(135233)),
        EmiScheduleItem::new(5, ymd(2025, 5, 21), dec!(8029), dec!(300), dec!(127204)),
    ]
}
