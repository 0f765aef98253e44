//! Table views for the analytics page.

use maud::{Markup, html};

use crate::html::format_currency;

use super::aggregation::CategoryTotals;

const TABLE_HEADER_STYLE: &str = "text-xs text-gray-700 uppercase \
    bg-gray-50 dark:bg-gray-700 dark:text-gray-400";
const TABLE_ROW_STYLE: &str = "bg-white border-b dark:bg-gray-800 dark:border-gray-700";
const TABLE_CELL_STYLE: &str = "px-6 py-4";

/// Renders a table of category totals in the totals' iteration order.
///
/// Returns empty markup when there are no totals to show.
pub(super) fn totals_table(heading: &str, totals: &CategoryTotals) -> Markup {
    if totals.is_empty() {
        return html! {};
    }

    html! {
        div {
            h3 class="text-xl font-semibold mb-4" { (heading) " by category" }

            div class="overflow-x-auto rounded-lg shadow" {
                table class="w-full text-sm text-left text-gray-500 dark:text-gray-400" {
                    thead class=(TABLE_HEADER_STYLE) {
                        tr {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Total" }
                        }
                    }
                    tbody {
                        @for (category, total) in totals.iter() {
                            tr class=(TABLE_ROW_STYLE) {
                                th scope="row" class={(TABLE_CELL_STYLE) " font-medium text-gray-900 dark:text-white"} {
                                    (category)
                                }
                                td class=(TABLE_CELL_STYLE) {
                                    (format_currency(total))
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod totals_table_tests {
    use crate::{
        analytics::aggregate,
        transaction::{Transaction, TransactionType},
    };

    use super::totals_table;

    #[test]
    fn lists_each_category_with_formatted_total() {
        let totals = aggregate(&[
            Transaction::new("Food", 50.0, TransactionType::Expense),
            Transaction::new("Rent", 1200.0, TransactionType::Expense),
            Transaction::new("Food", 30.0, TransactionType::Expense),
        ]);

        let markup = totals_table("Expense", &totals).into_string();

        assert!(markup.contains("Food"));
        assert!(markup.contains("$80.00"));
        assert!(markup.contains("Rent"));
        assert!(markup.contains("$1,200.00"));
    }

    #[test]
    fn empty_totals_render_nothing() {
        let markup = totals_table("Income", &Default::default()).into_string();

        assert!(markup.is_empty());
    }
}
