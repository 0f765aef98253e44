//! Donut chart generation and rendering for the analytics page.
//!
//! Each chart is generated as an ECharts option object and rendered with a
//! corresponding HTML container and JavaScript initialization code. Failures
//! building a chart are confined to the chart they occur in: the failed chart
//! is replaced with a static apology while the other chart still renders.

use charming::{
    Chart,
    component::{Legend, Title},
    datatype::DataPointItem,
    element::{Emphasis, EmphasisFocus, ItemStyle, JsFunction, Tooltip, Trigger},
    series::Pie,
};
use maud::{Markup, PreEscaped, html};

use crate::{Error, html::HeadElement};

use super::aggregation::CategoryTotals;

/// The slice colors applied to each chart, cycled when a chart has more
/// categories than the palette has colors.
const SLICE_PALETTE: [&str; 6] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#E7E9ED", "#4BC0C0", "#9966FF",
];

/// An analytics chart with its HTML container ID and ECharts option object.
///
/// `options` is `None` when the chart could not be built; the view renders a
/// static fallback in its place.
pub(super) struct AnalyticsChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The heading shown above the chart.
    pub heading: &'static str,
    /// The rendered ECharts option object, if it could be built.
    pub options: Option<String>,
}

/// Builds one donut chart, confining any failure to this chart.
pub(super) fn analytics_chart(
    id: &'static str,
    heading: &'static str,
    totals: &CategoryTotals,
) -> AnalyticsChart {
    let options = match donut_chart_options(heading, totals) {
        Ok(options) => Some(options),
        Err(error) => {
            tracing::error!("Could not build the {heading} chart: {error}");
            None
        }
    };

    AnalyticsChart {
        id,
        heading,
        options,
    }
}

/// Builds the ECharts configuration for a donut chart of `totals`.
///
/// Slices appear in the totals' iteration order, i.e. the first-occurrence
/// order of each category in the source data.
///
/// # Errors
/// Returns [Error::ChartOptions] if a total is not a finite number, since
/// ECharts cannot chart it.
fn donut_chart_options(title: &str, totals: &CategoryTotals) -> Result<String, Error> {
    if let Some((category, total)) = totals.iter().find(|(_, total)| !total.is_finite()) {
        return Err(Error::ChartOptions(format!(
            "the total for category {category:?} is not a finite number: {total}"
        )));
    }

    let (labels, values) = totals.labels_and_values();
    let slices: Vec<DataPointItem> = labels
        .iter()
        .zip(values)
        .enumerate()
        .map(|(slice, (category, total))| {
            DataPointItem::new(total).name(category.as_str()).item_style(
                ItemStyle::new().color(SLICE_PALETTE[slice % SLICE_PALETTE.len()]),
            )
        })
        .collect();

    let chart = Chart::new()
        .title(Title::new().text(title).left("center"))
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .value_formatter(currency_formatter()),
        )
        .legend(
            Legend::new()
                .top("8%")
                .left("center")
                .data(labels.iter().map(String::as_str).collect::<Vec<_>>()),
        )
        .series(
            Pie::new()
                .name(title)
                .radius(vec!["40%", "70%"])
                .avoid_label_overlap(false)
                .item_style(
                    ItemStyle::new()
                        .border_radius(6)
                        .border_color("#fff")
                        .border_width(2),
                )
                .emphasis(Emphasis::new().focus(EmphasisFocus::Series))
                .data(slices),
        );

    // `Chart`'s string rendering emits the tooltip formatter as a bare
    // JavaScript function, which plain JSON serialization would leave as a
    // marker-wrapped string that ECharts cannot call.
    Ok(chart.to_string())
}

/// Renders the HTML containers for the analytics charts.
///
/// A chart without options renders a static "something went wrong" block so a
/// single broken chart cannot take the rest of the page down with it.
pub(super) fn charts_view(charts: &[AnalyticsChart]) -> Markup {
    html!(
        section
            id="charts"
            class="w-full mx-auto mb-4"
        {
            div class="grid grid-cols-1 xl:grid-cols-2 gap-4"
            {
                @for chart in charts {
                    div
                    {
                        h2 class="text-[32px] text-center font-semibold text-blue-500"
                        {
                            (chart.heading)
                        }

                        @if chart.options.is_some() {
                            div
                                id=(chart.id)
                                class="min-h-[380px] rounded dark:bg-gray-100"
                            {}
                        } @else {
                            h2 class="text-center text-gray-900 dark:text-white"
                            {
                                "Sorry, something went wrong."
                            }
                        }
                    }
                }
            }
        }
    )
}

/// Generates JavaScript initialization code for the analytics charts.
///
/// Creates scripts that initialize ECharts instances with responsive
/// resizing. Charts without options are skipped.
pub(super) fn charts_script(charts: &[AnalyticsChart]) -> HeadElement {
    let script_content = charts
        .iter()
        .filter_map(|chart| {
            chart.options.as_ref().map(|options| {
                format!(
                    r#"(function() {{
                        const chartDom = document.getElementById("{}");
                        const chart = echarts.init(chartDom);
                        const option = {};
                        chart.setOption(option);

                        window.addEventListener('resize', chart.resize);
                    }})();"#,
                    chart.id, options
                )
            })
        })
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}
