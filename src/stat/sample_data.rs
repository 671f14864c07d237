use super::datatype::ExpenseRecord;

/// Demo expenses spanning 2021-2023 so the year filter and chart have
/// data on first launch.
pub fn sample_expenses() -> Vec<ExpenseRecord> {
    vec![
        ExpenseRecord::new("Car insurance", "294.67", "2021-03-28"),
        ExpenseRecord::new("New desk", "450.00", "2021-05-12"),
        ExpenseRecord::new("Toilet paper", "94.12", "2021-07-14"),
        ExpenseRecord::new("Winter jacket", "189.99", "2021-11-02"),
        ExpenseRecord::new("Groceries", "145.30", "2022-01-15"),
        ExpenseRecord::new("Electricity bill", "90.25", "2022-01-20"),
        ExpenseRecord::new("Concert ticket", "120.00", "2022-03-01"),
        ExpenseRecord::new("Bike repair", "75.50", "2022-03-18"),
        ExpenseRecord::new("Flight to Halifax", "612.00", "2022-08-09"),
        ExpenseRecord::new("Rent", "1800.00", "2023-01-01"),
        ExpenseRecord::new("Coffee beans", "24.95", "2023-02-11"),
        ExpenseRecord::new("Laptop stand", "59.00", "2023-02-27"),
        ExpenseRecord::new("Dentist", "310.00", "2023-06-05"),
    ]
}
