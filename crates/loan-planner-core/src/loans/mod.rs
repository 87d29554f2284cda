pub mod book;
pub mod model;
mod seed;

pub use book::LoanBook;
pub use model::{EmiScheduleItem, EmiStatus, Loan, LoanStatus, ScheduleTotals};
