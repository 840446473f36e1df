//! Grand totals command handler.

use mercado_core::Ledger;

use crate::app::AppContext;
use crate::cli::TotalArgs;
use crate::ui::format;
use crate::ui::{hint, kv, print};

pub fn handle_total(ctx: &AppContext, args: &TotalArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let ledger = Ledger::load(&store)?;
    let ui = ctx.ui_context(args.json, args.format.as_deref());

    if ui.mode.is_json() {
        let doc = serde_json::json!({
            "items": ledger.len(),
            "rate": ledger.exchange_rate().as_str(),
            "total_usd": ledger.grand_total_usd().ok(),
            "total_ves": ledger.grand_total_ves().ok(),
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    let count = ledger.len().to_string();
    if ui.mode.is_pretty() {
        let rate = ledger.exchange_rate();
        let rate_text = if rate.is_blank() {
            "(not set)".to_string()
        } else {
            rate.as_str().to_string()
        };
        let usd = ledger
            .grand_total_usd()
            .map(format::usd)
            .unwrap_or_else(|_| "unavailable".to_string());
        let ves = ledger
            .grand_total_ves()
            .map(format::ves)
            .unwrap_or_else(|_| "unavailable".to_string());
        print(&ui, &kv(&ui, "Items", &count));
        print(&ui, &kv(&ui, "Rate", &rate_text));
        print(&ui, &kv(&ui, "Total USD", &usd));
        print(&ui, &kv(&ui, "Total VES", &ves));
        if !ledger.exchange_rate().is_set() {
            print(&ui, &hint(&ui, "mercado rate <VALUE> sets the USD to VES rate"));
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
        print(&ui, &kv(&ui, "Items", &count));
        print(&ui, &kv(&ui, "Rate", ledger.exchange_rate().as_str()));
        print(&ui, &kv(&ui, "Total USD", &usd));
        print(&ui, &kv(&ui, "Total VES", &ves));
    }
    Ok(())
}
