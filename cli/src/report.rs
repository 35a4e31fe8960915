use pizzadash_core::format::{format_count, format_money, format_share};
use pizzadash_core::{ChartSeries, DashboardView};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct MetricRow {
    #[tabled(rename = "Metric")]
    metric: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Revenue")]
    revenue: String,
    #[tabled(rename = "Orders")]
    orders: String,
}

#[derive(Tabled)]
struct CountRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Orders")]
    count: String,
}

#[derive(Tabled)]
struct SizeRow {
    #[tabled(rename = "Size")]
    size: String,
    #[tabled(rename = "Orders")]
    count: String,
    #[tabled(rename = "Share")]
    share: String,
}

#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "Product ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
}

fn render<T: Tabled>(title: &str, rows: Vec<T>) {
    println!("\n\x1b[1;36m{}\x1b[0m", title);
    if rows.is_empty() {
        println!("  (no data for this selection)");
        return;
    }
    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    println!("{}", table);
}

fn summary_rows(view: &DashboardView) -> Vec<MetricRow> {
    let d = &view.summary_display;
    vec![
        MetricRow { metric: "Total orders", value: d.total_orders.clone() },
        MetricRow { metric: "Pizza types", value: d.distinct_product_count.clone() },
        MetricRow { metric: "Total revenue", value: d.total_revenue.clone() },
        MetricRow { metric: "Avg revenue / month", value: d.average_revenue.clone() },
        MetricRow { metric: "Pizzas sold", value: d.total_units_sold.clone() },
    ]
}

fn count_rows(series: &ChartSeries) -> Vec<CountRow> {
    series
        .iter()
        .enumerate()
        .map(|(i, p)| CountRow {
            rank: i + 1,
            label: p.label.clone(),
            count: format_count(p.value),
        })
        .collect()
}

fn size_rows(series: &ChartSeries) -> Vec<SizeRow> {
    let total: u64 = series.iter().map(|p| p.value).sum();
    series
        .iter()
        .map(|p| SizeRow {
            size: p.label.clone(),
            count: format_count(p.value),
            share: format_share(p.value, total),
        })
        .collect()
}

pub fn print_summary(view: &DashboardView) {
    render("Summary", summary_rows(view));
}

pub fn print_report(view: &DashboardView) {
    print_summary(view);

    // Both monthly series come from the same grouping, so points line up.
    let months: Vec<MonthRow> = view
        .revenue_by_month
        .labels()
        .into_iter()
        .zip(view.revenue_by_month.values())
        .zip(view.orders_by_month.values())
        .map(|((month, revenue), orders)| MonthRow {
            month,
            revenue: format_money(revenue),
            orders: format_count(orders),
        })
        .collect();
    render("Revenue and orders by month", months);

    render("Top 10 pizzas", count_rows(&view.top_names));
    render("Orders by size", size_rows(&view.by_size));

    let categories: Vec<CountRow> = view
        .category_axis
        .pairs()
        .enumerate()
        .map(|(i, (category, count))| CountRow {
            rank: i + 1,
            label: category.label().to_string(),
            count: format_count(count),
        })
        .collect();
    let categories = if view.summary.total_orders == 0 { Vec::new() } else { categories };
    render("Orders by category", categories);
}

pub fn print_products(products: &[(String, String)]) {
    let rows = products
        .iter()
        .map(|(id, name)| ProductRow { id: id.clone(), name: name.clone() })
        .collect();
    render("Products", rows);
}
