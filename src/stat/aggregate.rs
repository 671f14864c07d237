use super::datatype::ExpenseRecord;

pub const MONTHS: usize = 12;

/// Records from one calendar month, keyed by the "Month YYYY" label.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGroup {
    pub label: String,
    pub expenses: Vec<ExpenseRecord>,
}

fn year_token(date: &str) -> &str {
    date.split('-').next().unwrap_or("")
}

/// Ordered subsequence whose date starts with `year` (string equality on
/// the leading `YYYY` token). Malformed dates simply never match.
pub fn filter_by_year(expenses: &[ExpenseRecord], year: &str) -> Vec<ExpenseRecord> {
    if year.is_empty() {
        return Vec::new();
    }
    expenses
        .iter()
        .filter(|e| year_token(&e.date) == year)
        .cloned()
        .collect()
}

/// Twelve per-month sums for `year`, bucket 0 = January.
///
/// Non-numeric amounts contribute zero; records whose month token is
/// missing or outside 1..=12 are skipped. Recomputed from scratch on
/// every call.
pub fn monthly_totals(expenses: &[ExpenseRecord], year: &str) -> [f64; MONTHS] {
    let mut buckets = [0.0; MONTHS];
    for e in filter_by_year(expenses, year) {
        let month = e.date.split('-').nth(1).and_then(|m| m.parse::<usize>().ok());
        let Some(m @ 1..=MONTHS) = month else {
            continue;
        };
        buckets[m - 1] += e.amount.trim().parse::<f64>().unwrap_or(0.0);
    }
    buckets
}

/// Group records by their "Month YYYY" label, in order of first occurrence.
/// Records with an unparseable date are left out rather than failing the
/// whole grouping.
pub fn group_by_month(expenses: &[ExpenseRecord]) -> Vec<MonthGroup> {
    let mut groups: Vec<MonthGroup> = Vec::new();
    for e in expenses {
        let Some(label) = e.month_label() else {
            continue;
        };
        match groups.iter_mut().find(|g| g.label == label) {
            Some(g) => g.expenses.push(e.clone()),
            None => groups.push(MonthGroup {
                label,
                expenses: vec![e.clone()],
            }),
        }
    }
    groups
}
