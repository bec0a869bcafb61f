//! Reports over the entry collection

pub mod categories;
pub mod totals;

pub use categories::{CategoryActivity, CategoryBreakdown};
pub use totals::Totals;
