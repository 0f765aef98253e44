//! HTTP handler and view rendering for the analytics page.

use std::sync::Arc;

use axum::{
    Extension,
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState,
    auth::CurrentUser,
    endpoints,
    html::{base, link},
    source::TransactionSource,
    transaction::{Transaction, TransactionType},
};

use super::{
    aggregation::aggregate,
    charts::{AnalyticsChart, analytics_chart, charts_script, charts_view},
    tables::totals_table,
};

/// The state needed for displaying the analytics page.
#[derive(Clone)]
pub struct AnalyticsState {
    /// The source of the transaction data to chart.
    pub transaction_source: Arc<dyn TransactionSource>,
}

impl FromRef<AppState> for AnalyticsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_source: state.transaction_source.clone(),
        }
    }
}

/// Display the income and expense donut charts for the current user.
///
/// A fetch failure is logged and the page renders with the default (empty)
/// chart state rather than an error page.
pub async fn get_analytics_page(
    State(state): State<AnalyticsState>,
    Extension(user): Extension<CurrentUser>,
) -> Response {
    let transactions = match state.transaction_source.fetch_transactions().await {
        Ok(transactions) => transactions,
        Err(error) => {
            tracing::error!("Error fetching transactions data: {error}");
            Vec::new()
        }
    };

    let income_totals = aggregate(
        transactions
            .iter()
            .filter(|transaction| transaction.transaction_type == TransactionType::Income),
    );
    let expense_totals = aggregate(
        transactions
            .iter()
            .filter(|transaction| transaction.transaction_type == TransactionType::Expense),
    );

    let charts = [
        analytics_chart("income-chart", "Income", &income_totals),
        analytics_chart("expense-chart", "Expense", &expense_totals),
    ];
    let tables = [
        totals_table("Income", &income_totals),
        totals_table("Expense", &expense_totals),
    ];

    analytics_view(&user, &transactions, &charts, &tables).into_response()
}

/// Renders the analytics page with charts and totals tables.
fn analytics_view(
    user: &CurrentUser,
    transactions: &[Transaction],
    charts: &[AnalyticsChart],
    tables: &[Markup],
) -> Markup {
    let content = html!(
        div
            id="analytics-content"
            class="flex flex-col items-center px-2 lg:px-6 lg:py-8 mx-auto
                max-w-screen-xl text-gray-900 dark:text-white"
        {
            div class="w-full flex justify-between items-center mb-4"
            {
                h1 class="text-2xl font-bold" { "Analytics" }

                p class="text-sm text-gray-600 dark:text-gray-400"
                {
                    "Signed in as " (user.0) " - " (link(endpoints::LOG_OUT, "log out"))
                }
            }

            @if transactions.is_empty() {
                p class="mb-4"
                {
                    "Nothing here yet... Charts will fill up once transactions
                    are recorded."
                }
            }

            (charts_view(charts))

            div class="grid grid-cols-1 xl:grid-cols-2 gap-4 w-full mb-8"
            {
                @for table in tables {
                    (table)
                }
            }
        }
    );

    let scripts = [charts_script(charts)];

    base("Analytics", &scripts, &content)
}
