//! Totals display formatting

use crate::reports::Totals;

/// Format the totals block shown by `pocket totals`
pub fn format_totals(totals: &Totals, currency_symbol: &str) -> String {
    format!(
        "Income:   {}\nExpenses: {}\nBalance:  {}\n",
        totals.income.format_with_symbol(currency_symbol),
        totals.expense.format_with_symbol(currency_symbol),
        totals.balance.format_with_symbol(currency_symbol)
    )
}
