//! Summary totals over a filtered record set

use serde::{Deserialize, Serialize};

use crate::models::{Amount, Record};

/// Summed income, expense, and net over a record set
///
/// Totals are computed over the filtered set, not the paginated one, so they
/// reflect the active filter regardless of which page is displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub income: Amount,
    pub expense: Amount,
}

impl Totals {
    /// Net amount in cents; negative when expenses exceed income
    pub fn net_cents(&self) -> i64 {
        self.income.cents() - self.expense.cents()
    }
}

/// Sum income and expense over the given records
///
/// Missing amounts have already degraded to zero at deserialization, so the
/// sums are total over any stored shape.
pub fn aggregate(records: &[Record]) -> Totals {
    Totals {
        income: records.iter().map(|r| r.income).sum(),
        expense: records.iter().map(|r| r.expense).sum(),
    }
}
