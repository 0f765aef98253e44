//! The analytics page.
//!
//! Shows a donut chart of income by category and a donut chart of expenses by
//! category, with a totals table under each chart.

mod aggregation;
mod charts;
mod handlers;
mod tables;

pub use aggregation::{CategoryTotals, aggregate};
pub use handlers::get_analytics_page;
