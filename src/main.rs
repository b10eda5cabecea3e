use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info};

use meat_tracker::{
    config::{self, AppConfig},
    models::{draft::parse_weight, inventory_item::SUGGESTED_CATEGORIES},
    services::listing::InventoryRow,
    convert, Action, ActiveView, DashboardSummary, DraftField, InventoryItem, InventoryStore,
    WeightUnit,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config =
        tracing::subscriber::with_default(config::bootstrap_subscriber(), config::load_config)
            .context("failed to load configuration")?;
    config::init_tracing(&config.log_level, config.log_json);
    info!(
        environment = %config.environment,
        log_level = %config.log_level,
        "Configuration loaded"
    );

    let mut store = InventoryStore::from_config(&config);
    debug!(items = store.items().len(), "Session started");
    run(cli, &mut store, &config)
}

fn run(cli: Cli, store: &mut InventoryStore, config: &AppConfig) -> Result<()> {
    match cli.command {
        Commands::Dashboard => handle_dashboard(store, cli.json),
        Commands::List(args) => handle_list(store, args, cli.json),
        Commands::Add(args) => handle_add(store, config, args, cli.json),
        Commands::Convert(args) => handle_convert(args, cli.json),
        Commands::Categories => handle_categories(cli.json),
    }
}

#[derive(Parser)]
#[command(
    name = "meat-tracker",
    about = "Inventory of weighed meat products. Every run starts from the sample inventory.",
    version
)]
struct Cli {
    #[arg(
        long,
        global = true,
        action = ArgAction::SetTrue,
        help = "Render command output as pretty JSON"
    )]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summary cards and recent activity
    Dashboard,
    /// Inventory listing
    List(ListArgs),
    /// Register a weighed product, then show the listing
    Add(AddArgs),
    /// Convert a weight between kg and lbs
    Convert(ConvertArgs),
    /// Suggested product categories
    Categories,
}

#[derive(Args)]
struct ListArgs {
    #[arg(long, help = "Only show items whose name, category or lot contains this text")]
    search: Option<String>,
}

#[derive(Args)]
struct AddArgs {
    #[arg(long, help = "Product name, e.g. \"Carne de Res Premium\"")]
    name: String,
    #[arg(long, help = "Weight as a decimal number, e.g. 150.5")]
    weight: String,
    #[arg(long, help = "kg or lbs; defaults to the configured unit")]
    unit: Option<WeightUnit>,
    #[arg(long, default_value = "", help = "Category, e.g. Res or Pollo")]
    category: String,
    #[arg(long, help = "Expiry date as YYYY-MM-DD")]
    expiry: String,
    #[arg(long, default_value = "", help = "Lot number, e.g. LOT-001")]
    lot: String,
}

#[derive(Args)]
struct ConvertArgs {
    weight: String,
    #[arg(long)]
    from: WeightUnit,
    #[arg(long)]
    to: WeightUnit,
}

#[derive(Serialize)]
struct AddResponse {
    added: Option<InventoryItem>,
    items: Vec<InventoryRow>,
}

#[derive(Serialize)]
struct ConvertResponse {
    weight: Decimal,
    from: WeightUnit,
    to: WeightUnit,
    result: Decimal,
}

fn handle_dashboard(store: &InventoryStore, json: bool) -> Result<()> {
    let summary = store.summary();
    if json {
        print_json(&summary)?;
    } else {
        render_dashboard(&summary);
    }
    Ok(())
}

fn handle_list(store: &mut InventoryStore, args: ListArgs, json: bool) -> Result<()> {
    store.dispatch(Action::SelectView(ActiveView::Inventory))?;
    let query = args.search.unwrap_or_default();
    let rows: Vec<InventoryRow> = store
        .state()
        .search(&query)
        .into_iter()
        .map(InventoryRow::from_item)
        .collect();

    if json {
        print_json(&rows)?;
    } else if rows.is_empty() {
        println!("No products match \"{}\"", query.trim());
    } else {
        rows.iter().for_each(render_row);
    }
    Ok(())
}

fn handle_add(
    store: &mut InventoryStore,
    config: &AppConfig,
    args: AddArgs,
    json: bool,
) -> Result<()> {
    store.dispatch(Action::SelectView(ActiveView::AddWeight))?;
    let fields = [
        DraftField::ProductName(args.name),
        DraftField::Weight(args.weight),
        DraftField::Unit(args.unit.unwrap_or(config.default_unit)),
        DraftField::Category(args.category),
        DraftField::ExpiryDate(args.expiry),
        DraftField::LotNumber(args.lot),
    ];
    for field in fields {
        store.dispatch(Action::EditDraft(field))?;
    }

    let before = store.items().len();
    store
        .dispatch(Action::SubmitDraft)
        .context("failed to add inventory item")?;
    let added = (store.items().len() > before)
        .then(|| store.items().last().cloned())
        .flatten();

    let rows: Vec<InventoryRow> = store.items().iter().map(InventoryRow::from_item).collect();
    if json {
        print_json(&AddResponse { added, items: rows })?;
    } else {
        if let Some(item) = &added {
            println!("Added {} ({} {}) as {}", item.product_name, item.weight, item.unit, item.id);
        }
        rows.iter().for_each(render_row);
    }
    Ok(())
}

fn handle_convert(args: ConvertArgs, json: bool) -> Result<()> {
    let weight = parse_weight(&args.weight)?;
    let result = convert(weight, args.from, args.to);
    if json {
        print_json(&ConvertResponse {
            weight,
            from: args.from,
            to: args.to,
            result,
        })?;
    } else {
        println!("{} {} = {} {}", weight, args.from, result.round_dp(2), args.to);
    }
    Ok(())
}

fn handle_categories(json: bool) -> Result<()> {
    if json {
        print_json(&SUGGESTED_CATEGORIES)?;
    } else {
        SUGGESTED_CATEGORIES.iter().for_each(|c| println!("{}", c));
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn render_dashboard(summary: &DashboardSummary) {
    println!("Total Productos: {}", summary.total_products);
    println!("Total Peso (kg): {}", summary.display_total_kg());
    println!("Alertas: {}", summary.warning_count);
    println!();
    println!("Actividad Reciente");
    for item in &summary.recent_activity {
        println!(
            "- {} • {} {} - Lote: {} • {} • {}",
            item.product_name,
            item.weight.normalize(),
            item.unit,
            item.lot_number,
            item.date_added.format("%d/%m/%Y"),
            item.status.dashboard_label()
        );
    }
}

fn render_row(row: &InventoryRow) {
    let item = &row.item;
    println!(
        "- {} • {} {} ({} {}) • {} • ingreso {} • vence {} • {} • {}",
        item.product_name,
        item.weight.normalize(),
        item.unit,
        row.alternate_weight,
        row.alternate_unit,
        item.category,
        item.date_added.format("%d/%m/%Y"),
        item.expiry_date.format("%d/%m/%Y"),
        item.lot_number,
        row.status_label
    );
}
