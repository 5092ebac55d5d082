//! Summary display formatting
//!
//! Renders filter-wide income, expense, and net totals.

use crate::models::amount::group_thousands;
use crate::query::Totals;

/// Format totals for display with the configured currency symbol
pub fn format_totals(totals: &Totals, currency_symbol: &str) -> String {
    format!(
        "Income:  {}{}\nExpense: {}{}\nNet:     {}\n",
        currency_symbol,
        totals.income,
        currency_symbol,
        totals.expense,
        format_net(totals.net_cents(), currency_symbol)
    )
}

/// Format a signed cent value, e.g. "-$40.00" or "$1,050.25"
fn format_net(cents: i64, currency_symbol: &str) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs() as i64;
    format!(
        "{}{}{}.{:02}",
        sign,
        currency_symbol,
        group_thousands(abs / 100),
        abs % 100
    )
}
