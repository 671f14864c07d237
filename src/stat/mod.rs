pub mod aggregate;
pub mod datatype;
pub mod sample_data;

pub use aggregate::{MonthGroup, MONTHS};
pub use datatype::ExpenseRecord;
pub use sample_data::sample_expenses;
