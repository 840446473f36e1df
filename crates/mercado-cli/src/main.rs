//! Mercado CLI - a dual-currency grocery list for dollar and bolívar shopping
//!
//! This is the command-line interface for Mercado. It provides a thin
//! front-end over the core list and conversion logic.

mod app;
mod cli;
mod commands;
mod config;
mod ui;

use clap::Parser;
use mercado_core::VERSION;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{add, list, maintenance, misc, quantity, rate, remove, total};
use crate::ui::print_error;

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context(false, None);
        let error_msg = format!("{}", e);
        let hint = extract_error_hint(&error_msg);
        print_error(&ui_ctx, &error_msg, hint.as_deref());
        std::process::exit(1);
    }
}

/// Route log output to stderr so stdout stays parseable.
///
/// `MERCADO_LOG` takes the usual env-filter syntax (e.g. `debug`,
/// `mercado_core=trace`); the default is warnings only.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("MERCADO_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Provide contextual hints for common error messages.
fn extract_error_hint(error: &str) -> Option<String> {
    let error_lower = error.to_lowercase();

    // Rate not set or unusable
    if error_lower.contains("no usable exchange rate") {
        return Some("Run `mercado rate <VALUE>` to set the VES per USD rate.".to_string());
    }

    // Unknown currency code
    if error_lower.contains("unknown currency") {
        return Some("Use --currency usd or --currency ves.".to_string());
    }

    // Corrupt store contents
    if error_lower.contains("corrupt store") || error_lower.contains("integrity check failed") {
        return Some("Run `mercado check` for details, or point --store at a fresh file.".to_string());
    }

    // Store file problems
    if error_lower.contains("failed to open store") {
        return Some("Check the --store path or the MERCADO_STORE environment variable.".to_string());
    }

    None
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Add(args)) => {
            add::handle_add(ctx, args)?;
        }
        Some(Commands::Rm(args)) => {
            remove::handle_rm(ctx, args)?;
        }
        Some(Commands::Qty(args)) => {
            quantity::handle_qty(ctx, args)?;
        }
        Some(Commands::Inc(args)) => {
            quantity::handle_inc(ctx, args)?;
        }
        Some(Commands::Dec(args)) => {
            quantity::handle_dec(ctx, args)?;
        }
        Some(Commands::Rate(args)) => {
            rate::handle_rate(ctx, args)?;
        }
        Some(Commands::List(args)) => {
            list::handle_list(ctx, args)?;
        }
        Some(Commands::Total(args)) => {
            total::handle_total(ctx, args)?;
        }
        Some(Commands::Info) => {
            maintenance::handle_info(ctx)?;
        }
        Some(Commands::Check) => {
            maintenance::handle_check(ctx)?;
        }
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args.shell)?;
        }
        None => {
            println!("Mercado v{}", VERSION);
            println!("\nQuickstart:");
            println!("  mercado add Milk --price 1.50 --qty 2");
            println!("  mercado add Bread --price 80 --currency ves");
            println!("  mercado rate 40");
            println!("  mercado list");
            println!("\nRun `mercado --help` for full usage.");
        }
    }

    Ok(())
}
