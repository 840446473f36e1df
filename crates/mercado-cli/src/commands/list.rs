//! List command handler.

use mercado_core::Ledger;

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::ui::format;
use crate::ui::{badge, hint, items_table, kv, print, Badge, UiContext};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let ledger = Ledger::load(&store)?;
    let ui = ctx.ui_context(args.json, args.format.as_deref());

    if ui.mode.is_json() {
        return print_json(&ledger);
    }

    if ledger.is_empty() && ui.mode.is_pretty() {
        print(&ui, &badge(&ui, Badge::Info, "No items yet"));
        print(&ui, &hint(&ui, "mercado add <NAME> --price <PRICE>"));
        return Ok(());
    }

    let rows: Vec<Vec<String>> = ledger
        .items()
        .iter()
        .map(|item| {
            // A VES line without a usable rate has no USD total to show.
            let total = match ledger.item_total(item) {
                Ok(usd) => format::money(usd),
                Err(_) => "-".to_string(),
            };
            vec![
                item.id.to_string(),
                item.name.clone(),
                format::quantity(item.quantity),
                format::unit_price(item.price, item.currency),
                total,
            ]
        })
        .collect();

    if !rows.is_empty() {
        print(
            &ui,
            &items_table(&ui, &["ID", "ITEM", "QTY", "PRICE", "TOTAL (USD)"], &rows),
        );
    }

    print_totals(&ui, &ledger);
    Ok(())
}

fn print_totals(ui: &UiContext, ledger: &Ledger) {
    if ui.mode.is_pretty() {
        // Footer matches the shopping view: primary total first, converted
        // total under it.
        let usd_line = match ledger.grand_total_usd() {
            Ok(v) => format!("Total: {} USD", format::usd(v)),
            Err(_) => "Total: unavailable".to_string(),
        };
        let ves_line = match ledger.grand_total_ves() {
            Ok(v) => format!("Total: {}", format::ves(v)),
            Err(_) => "Total: unavailable".to_string(),
        };
        println!();
        print(ui, &usd_line);
        print(ui, &ves_line);
        if !ledger.exchange_rate().is_set() {
            print(ui, &hint(ui, "mercado rate <VALUE> sets the USD to VES rate"));
        }
    } else {
        let usd = ledger
            .grand_total_usd()
            .map(format::money)
            .unwrap_or_else(|_| "unavailable".to_string());
        let ves = ledger
            .grand_total_ves()
            .map(format::money)
            .unwrap_or_else(|_| "unavailable".to_string());
        print(ui, &kv(ui, "Total USD", &usd));
        print(ui, &kv(ui, "Total VES", &ves));
    }
}

fn print_json(ledger: &Ledger) -> anyhow::Result<()> {
    let items: Vec<serde_json::Value> = ledger
        .items()
        .iter()
        .map(|item| {
            serde_json::json!({
                "id": item.id,
                "name": item.name,
                "quantity": item.quantity,
                "price": item.price,
                "currency": item.currency,
                "total_usd": ledger.item_total(item).ok(),
            })
        })
        .collect();

    let doc = serde_json::json!({
        "items": items,
        "rate": ledger.exchange_rate().as_str(),
        "total_usd": ledger.grand_total_usd().ok(),
        "total_ves": ledger.grand_total_ves().ok(),
    });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
