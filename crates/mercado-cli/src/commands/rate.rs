//! Exchange rate command handler.

use mercado_core::{ExchangeRate, Ledger};

use crate::app::AppContext;
use crate::cli::RateArgs;
use crate::ui::{hint, kv, print, receipt, Badge};

pub fn handle_rate(ctx: &AppContext, args: &RateArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let mut ledger = Ledger::load(&store)?;
    let ui = ctx.ui_context(false, None);

    if args.clear {
        ledger.set_exchange_rate(ExchangeRate::unset());
        ledger.save(&mut store)?;
        if !ctx.quiet() {
            print(&ui, &receipt(&ui, Badge::Ok, "Cleared exchange rate", &[]));
        }
        return Ok(());
    }

    if let Some(ref value) = args.value {
        let rate = ExchangeRate::parse(value)?;
        let display = rate.as_str().to_string();
        ledger.set_exchange_rate(rate);
        ledger.save(&mut store)?;
        if !ctx.quiet() {
            if display.trim().is_empty() {
                // Blank input clears, same as --clear.
                print(&ui, &receipt(&ui, Badge::Ok, "Cleared exchange rate", &[]));
            } else {
                print(
                    &ui,
                    &receipt(&ui, Badge::Ok, "Set exchange rate", &[("Rate", &display)]),
                );
            }
        }
        return Ok(());
    }

    // No value and no --clear: show the current rate.
    let rate = ledger.exchange_rate();
    if ui.mode.is_pretty() {
        let shown = if rate.is_blank() {
            "(not set)"
        } else {
            rate.as_str()
        };
        print(&ui, &kv(&ui, "Rate", shown));
        if !rate.is_set() {
            print(
                &ui,
                &hint(&ui, "mercado rate <VALUE> sets the USD to VES rate"),
            );
        }
    } else {
        print(&ui, &kv(&ui, "Rate", rate.as_str()));
    }
    Ok(())
}
