use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use mercado_core::VERSION;

/// Mercado - a dual-currency grocery list for dollar and bolívar shopping
#[derive(Parser)]
#[command(name = "mercado")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the store file
    #[arg(short, long, global = true, env = "MERCADO_STORE")]
    pub store: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Item name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Unit price, in the item's currency
    #[arg(long, value_name = "PRICE", allow_negative_numbers = true)]
    pub price: f64,

    /// Quantity to put on the list (negative values are rejected)
    #[arg(long, value_name = "QTY", default_value_t = 1.0, allow_negative_numbers = true)]
    pub qty: f64,

    /// Currency the price is quoted in (usd, ves)
    #[arg(long, value_name = "CUR", default_value = "usd")]
    pub currency: String,
}

/// Arguments for the `rm` command
#[derive(Args)]
pub struct RmArgs {
    /// Item id (see `mercado list`)
    #[arg(value_name = "ID")]
    pub id: u64,
}

/// Arguments for the `qty` command
#[derive(Args)]
pub struct QtyArgs {
    /// Item id (see `mercado list`)
    #[arg(value_name = "ID")]
    pub id: u64,

    /// New quantity (negative values clamp to 0)
    #[arg(value_name = "QUANTITY", allow_negative_numbers = true)]
    pub quantity: f64,
}

/// Arguments for the `inc` and `dec` commands
#[derive(Args)]
pub struct StepArgs {
    /// Item id (see `mercado list`)
    #[arg(value_name = "ID")]
    pub id: u64,

    /// Step size
    #[arg(long, value_name = "N", default_value_t = 1.0)]
    pub by: f64,
}

/// Arguments for the `rate` command
#[derive(Args)]
pub struct RateArgs {
    /// New exchange rate, VES per one USD (omit to show the current rate)
    #[arg(value_name = "VALUE")]
    pub value: Option<String>,

    /// Clear the exchange rate
    #[arg(long, conflicts_with = "value")]
    pub clear: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `total` command
#[derive(Args)]
pub struct TotalArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add an item to the list
    Add(AddArgs),

    /// Remove an item from the list
    Rm(RmArgs),

    /// Set an item's quantity
    Qty(QtyArgs),

    /// Increase an item's quantity
    Inc(StepArgs),

    /// Decrease an item's quantity
    Dec(StepArgs),

    /// Show or set the USD to VES exchange rate
    Rate(RateArgs),

    /// List items with per-item and grand totals
    List(ListArgs),

    /// Show grand totals in both currencies
    Total(TotalArgs),

    /// Show store location and metadata
    Info,

    /// Check the integrity of the persisted state
    Check,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
