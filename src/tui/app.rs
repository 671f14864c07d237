use tracing::debug;

use super::chart::{ChartBinding, ChartSpec, TuiChartRenderer};
use crate::stat::{aggregate, ExpenseRecord, MonthGroup};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    EditingExpense,
}

/// Form fields in focus order: title, amount, date.
pub const FORM_FIELDS: usize = 3;

pub struct App {
    pub expenses: Vec<ExpenseRecord>,
    pub selected_year: Option<String>,
    pub chart: ChartBinding<TuiChartRenderer>,
    pub input_mode: InputMode,
    pub show_input: bool,
    pub new_title: String,
    pub new_amount: String,
    pub new_date: String,
    pub new_field_idx: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(expenses: Vec<ExpenseRecord>) -> Self {
        Self {
            expenses,
            selected_year: None,
            chart: ChartBinding::new(TuiChartRenderer::new()),
            input_mode: InputMode::Normal,
            show_input: false,
            new_title: String::new(),
            new_amount: String::new(),
            new_date: String::new(),
            new_field_idx: 0,
            should_quit: false,
        }
    }

    /// Distinct 4-digit years present in the collection, ascending.
    pub fn years(&self) -> Vec<String> {
        let mut years: Vec<String> = self
            .expenses
            .iter()
            .filter_map(|e| e.date.split('-').next())
            .filter(|y| y.len() == 4 && y.chars().all(|c| c.is_ascii_digit()))
            .map(|y| y.to_string())
            .collect();
        years.sort();
        years.dedup();
        years
    }

    /// Set the active filter year and drive the chart lifecycle: a live
    /// chart for Some(year), none for None.
    pub fn select_year(&mut self, year: Option<String>) {
        debug!(?year, "year selected");
        self.selected_year = year;
        self.refresh_chart();
    }

    /// Cycle the year filter forward: none -> first year -> ... -> none.
    pub fn next_year(&mut self) {
        let years = self.years();
        let next = match &self.selected_year {
            None => years.first().cloned(),
            Some(cur) => years
                .iter()
                .position(|y| y == cur)
                .and_then(|i| years.get(i + 1))
                .cloned(),
        };
        self.select_year(next);
    }

    /// Cycle the year filter backward: none -> last year -> ... -> none.
    pub fn prev_year(&mut self) {
        let years = self.years();
        let prev = match &self.selected_year {
            None => years.last().cloned(),
            Some(cur) => match years.iter().position(|y| y == cur) {
                Some(0) | None => None,
                Some(i) => years.get(i - 1).cloned(),
            },
        };
        self.select_year(prev);
    }

    /// Append one record from the form fields. No-ops unless title, amount
    /// and date are all non-empty after trimming; a no-op leaves the
    /// collection and the form untouched.
    pub fn add_expense(&mut self) {
        let title = self.new_title.trim();
        let amount = self.new_amount.trim();
        let date = self.new_date.trim();
        if title.is_empty() || amount.is_empty() || date.is_empty() {
            debug!("expense submission ignored, required field empty");
            return;
        }

        let record = ExpenseRecord::new(title, amount, date);
        debug!(id = %record.id, %record.date, "expense appended");
        self.expenses.push(record);

        self.new_title.clear();
        self.new_amount.clear();
        self.new_date.clear();
        self.new_field_idx = 0;

        // a new record can change the live chart's buckets
        self.refresh_chart();
    }

    /// Show or hide the entry form; the form keeps keyboard focus while
    /// visible.
    pub fn toggle_panel(&mut self) {
        self.show_input = !self.show_input;
        self.input_mode = if self.show_input {
            InputMode::EditingExpense
        } else {
            InputMode::Normal
        };
        self.new_field_idx = 0;
    }

    pub fn next_field(&mut self) {
        self.new_field_idx = (self.new_field_idx + 1) % FORM_FIELDS;
    }

    pub fn prev_field(&mut self) {
        self.new_field_idx = (self.new_field_idx + FORM_FIELDS - 1) % FORM_FIELDS;
    }

    pub fn focused_field_mut(&mut self) -> &mut String {
        match self.new_field_idx {
            0 => &mut self.new_title,
            1 => &mut self.new_amount,
            _ => &mut self.new_date,
        }
    }

    /// Records matching the active year filter, in insertion order.
    pub fn filtered(&self) -> Vec<ExpenseRecord> {
        match &self.selected_year {
            Some(year) => aggregate::filter_by_year(&self.expenses, year),
            None => Vec::new(),
        }
    }

    /// Filtered records grouped by "Month YYYY" for the list view.
    pub fn grouped(&self) -> Vec<MonthGroup> {
        aggregate::group_by_month(&self.filtered())
    }

    fn refresh_chart(&mut self) {
        match &self.selected_year {
            Some(year) => self.chart.render(ChartSpec {
                year: year.clone(),
                totals: aggregate::monthly_totals(&self.expenses, year),
            }),
            None => self.chart.release(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with(dates_amounts: &[(&str, &str)]) -> App {
        let expenses = dates_amounts
            .iter()
            .map(|(amount, date)| ExpenseRecord::new("x", *amount, *date))
            .collect();
        App::new(expenses)
    }

    fn submit(app: &mut App, title: &str, amount: &str, date: &str) {
        app.new_title = title.to_string();
        app.new_amount = amount.to_string();
        app.new_date = date.to_string();
        app.add_expense();
    }

    #[test]
    fn empty_required_field_is_a_no_op() {
        let mut app = App::new(Vec::new());

        submit(&mut app, "", "100", "2022-01-15");
        assert_eq!(app.expenses.len(), 0);

        submit(&mut app, "Lunch", "   ", "2022-01-15");
        assert_eq!(app.expenses.len(), 0);

        submit(&mut app, "Lunch", "100", "");
        assert_eq!(app.expenses.len(), 0);
        // a rejected submission keeps the typed values
        assert_eq!(app.new_title, "Lunch");
    }

    #[test]
    fn valid_submission_appends_and_clears_form() {
        let mut app = App::new(Vec::new());
        submit(&mut app, " Lunch ", "12.50", "2022-06-01");

        assert_eq!(app.expenses.len(), 1);
        assert_eq!(app.expenses[0].title, "Lunch");
        assert_eq!(app.expenses[0].amount, "12.50");
        assert!(app.new_title.is_empty());
        assert!(app.new_amount.is_empty());
        assert!(app.new_date.is_empty());
    }

    #[test]
    fn years_are_distinct_and_sorted() {
        let app = app_with(&[
            ("10", "2023-01-01"),
            ("10", "2021-05-01"),
            ("10", "2023-09-09"),
            ("10", "bad-date"),
        ]);
        assert_eq!(app.years(), vec!["2021", "2023"]);
    }

    #[test]
    fn selecting_a_year_activates_the_chart() {
        let mut app = app_with(&[("100", "2022-01-15"), ("75", "2022-03-01")]);
        assert!(!app.chart.is_live());

        app.select_year(Some("2022".to_string()));
        assert!(app.chart.is_live());
        let spec = app.chart.spec().unwrap();
        assert_eq!(spec.year, "2022");
        assert_eq!(spec.totals[0], 100.0);
        assert_eq!(spec.totals[2], 75.0);

        app.select_year(None);
        assert!(!app.chart.is_live());
    }

    #[test]
    fn adding_while_selected_updates_the_chart() {
        let mut app = app_with(&[("100", "2022-01-15")]);
        app.select_year(Some("2022".to_string()));
        assert_eq!(app.chart.spec().unwrap().totals[0], 100.0);

        submit(&mut app, "More groceries", "50", "2022-01-20");
        assert_eq!(app.chart.spec().unwrap().totals[0], 150.0);
    }

    #[test]
    fn year_cycling_wraps_through_no_selection() {
        let mut app = app_with(&[("10", "2021-01-01"), ("10", "2022-01-01")]);

        app.next_year();
        assert_eq!(app.selected_year.as_deref(), Some("2021"));
        app.next_year();
        assert_eq!(app.selected_year.as_deref(), Some("2022"));
        app.next_year();
        assert_eq!(app.selected_year, None);
        assert!(!app.chart.is_live());

        app.prev_year();
        assert_eq!(app.selected_year.as_deref(), Some("2022"));
    }

    #[test]
    fn grouped_view_follows_filter_and_first_occurrence() {
        let mut app = app_with(&[
            ("10", "2022-03-05"),
            ("10", "2022-01-05"),
            ("10", "2023-03-05"),
        ]);
        app.select_year(Some("2022".to_string()));

        let groups = app.grouped();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, "March 2022");
        assert_eq!(groups[1].label, "January 2022");
    }

    #[test]
    fn toggle_panel_switches_input_mode() {
        let mut app = App::new(Vec::new());
        assert!(!app.show_input);
        assert_eq!(app.input_mode, InputMode::Normal);

        app.toggle_panel();
        assert!(app.show_input);
        assert_eq!(app.input_mode, InputMode::EditingExpense);

        app.toggle_panel();
        assert_eq!(app.input_mode, InputMode::Normal);
    }
}
