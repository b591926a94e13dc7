use std::collections::HashSet;
use std::path::PathBuf;

use analytics::{
    date_span, filter_by_date, filter_by_status, warehouses_present, MarginCalculator,
    SummaryMetric,
};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use comfy_table::{presets::UTF8_FULL, Table};
use core_types::{OrderRow, OrderStatus};
use ledger::CostLedger;
use report::{write_xlsx, ReportAssembler, ReportBundle};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

/// The main entry point for the order profitability analyzer.
fn main() {
    // Route log output through tracing; RUST_LOG controls verbosity.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Execute the appropriate command
    let result = match cli.command {
        Commands::Analyze(args) => handle_analyze(args),
        Commands::Products(args) => handle_products(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Profitability analysis for a Kaspi order export.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline and print the profitability summary.
    Analyze(AnalyzeArgs),
    /// List the products of the working set, for cost entry.
    Products(ProductsArgs),
}

#[derive(Parser)]
struct AnalyzeArgs {
    /// Path to the .xlsx order export.
    #[arg(long)]
    file: PathBuf,

    /// Optional TOML file of `article = cost` unit-cost entries.
    #[arg(long)]
    costs: Option<PathBuf>,

    /// Start of the analysis period (format: YYYY-MM-DD).
    /// Defaults to the earliest order date in the export.
    #[arg(long)]
    from: Option<NaiveDate>,

    /// End of the analysis period (format: YYYY-MM-DD).
    /// Defaults to the latest order date in the export.
    #[arg(long)]
    to: Option<NaiveDate>,

    /// Restrict the analysis to these warehouses (repeatable).
    /// Defaults to every warehouse seen in the period's issued orders.
    #[arg(long = "warehouse")]
    warehouses: Vec<String>,

    /// Metric for the top-N ranking: orders, sales or margin.
    #[arg(long, default_value = "orders")]
    top_by: String,

    /// How many rows the top-N view shows.
    #[arg(long, default_value_t = 10)]
    top: usize,

    /// Write the two-sheet report workbook to the configured path.
    #[arg(long)]
    export: bool,

    /// Write the two-sheet report workbook to this path instead.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser)]
struct ProductsArgs {
    /// Path to the .xlsx order export.
    #[arg(long)]
    file: PathBuf,

    /// Start of the analysis period (format: YYYY-MM-DD).
    #[arg(long)]
    from: Option<NaiveDate>,

    /// End of the analysis period (format: YYYY-MM-DD).
    #[arg(long)]
    to: Option<NaiveDate>,

    /// Restrict to these warehouses (repeatable).
    #[arg(long = "warehouse")]
    warehouses: Vec<String>,

    /// Case-insensitive substring filter over article or product name.
    #[arg(long, default_value = "")]
    search: String,
}

// ==============================================================================
// Analyze Command Logic
// ==============================================================================

/// Handles one explicit pipeline run: load, filter, join costs, aggregate,
/// print, and optionally export.
fn handle_analyze(args: AnalyzeArgs) -> anyhow::Result<()> {
    let config = configuration::load_config()?;

    let rows = importer::load_orders(&args.file)?;
    println!("Загружено строк: {}", rows.len());

    let mut costs = CostLedger::new();
    if let Some(path) = &args.costs {
        for (article, cost) in configuration::load_costs(path)? {
            costs.set(&article, cost)?;
        }
        println!("Себестоимость задана для {} артикулов", costs.len());
    }

    let (start, end) = resolve_period(&rows, args.from, args.to)?;
    let allowed = resolve_warehouses(&rows, start, end, &args.warehouses);

    let metric: SummaryMetric = args.top_by.parse()?;
    let assembler = ReportAssembler::new(MarginCalculator::new(config.analysis.commission_rate));
    let bundle = assembler.assemble(&rows, start, end, &allowed, &mut costs);

    print_stats(&bundle);
    print_summary(&bundle);
    print_top(&bundle, metric, args.top);

    if args.export || args.out.is_some() {
        let out = args
            .out
            .unwrap_or_else(|| PathBuf::from(&config.export.report_path));
        write_xlsx(&bundle, &out)?;
        println!("Отчет сохранен: {}", out.display());
    }

    Ok(())
}

/// Handles the cost-entry product listing.
fn handle_products(args: ProductsArgs) -> anyhow::Result<()> {
    let rows = importer::load_orders(&args.file)?;

    let (start, end) = resolve_period(&rows, args.from, args.to)?;
    let allowed = resolve_warehouses(&rows, start, end, &args.warehouses);

    let mut costs = CostLedger::new();
    let assembler = ReportAssembler::default();
    assembler.assemble(&rows, start, end, &allowed, &mut costs);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Артикул", "Название товара"]);
    for product in costs.search(&args.search) {
        table.add_row(vec![&product.article, &product.product_name]);
    }
    println!("{table}");

    Ok(())
}

/// Resolves the analysis period, defaulting each missing bound to the
/// corresponding extreme of the export's parsed order dates.
fn resolve_period(
    rows: &[OrderRow],
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> anyhow::Result<(NaiveDate, NaiveDate)> {
    if let (Some(start), Some(end)) = (from, to) {
        return Ok((start, end));
    }

    let (min, max) = date_span(rows)
        .ok_or_else(|| anyhow::anyhow!("the export contains no parsable order dates"))?;

    Ok((from.unwrap_or(min), to.unwrap_or(max)))
}

/// Resolves the allowed-warehouse set: the operator's explicit selection, or
/// every warehouse present in the period's issued orders.
fn resolve_warehouses(
    rows: &[OrderRow],
    start: NaiveDate,
    end: NaiveDate,
    selected: &[String],
) -> HashSet<String> {
    if !selected.is_empty() {
        return selected.iter().cloned().collect();
    }

    let bounded = filter_by_date(rows, start, end);
    let issued = filter_by_status(&bounded, &OrderStatus::Issued);
    warehouses_present(&issued).into_iter().collect()
}

// ==============================================================================
// Console Rendering
// ==============================================================================

fn print_stats(bundle: &ReportBundle) {
    let (start, end) = bundle.period;
    println!("\nПериод: {} — {}", start.format("%d.%m.%Y"), end.format("%d.%m.%Y"));
    println!(
        "Возвратов: {} заказов на сумму {} ₸",
        bundle.stats.returns_count,
        money(bundle.stats.returns_amount)
    );
    println!("Оборот: {} ₸", money(bundle.stats.turnover));
}

fn print_summary(bundle: &ReportBundle) {
    println!("\nСводка по заказам:");
    println!("{}", summary_table(&bundle.summary));
}

fn print_top(bundle: &ReportBundle, metric: SummaryMetric, n: usize) {
    let top = analytics::top_n(&bundle.summary, metric, n);
    println!("\nТоп-{} товаров:", n);
    println!("{}", summary_table(&top));
}

fn summary_table(rows: &[core_types::SummaryRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        "Артикул",
        "Название товара",
        "Склад",
        "Кол_заказов",
        "Сумма_продаж",
        "Средняя_себестоимость",
        "Общая_маржа",
    ]);
    for row in rows {
        table.add_row(vec![
            row.article.clone(),
            row.product_name.clone(),
            row.warehouse.clone(),
            row.total_orders.to_string(),
            money(row.total_sales),
            money(row.avg_cost),
            money(row.total_margin),
        ]);
    }
    table
}

fn money(value: Decimal) -> String {
    value.round_dp(2).to_string()
}
