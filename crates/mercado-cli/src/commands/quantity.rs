//! Quantity command handlers: `qty`, `inc`, `dec`.

use mercado_core::{ItemId, Ledger};

use crate::app::AppContext;
use crate::cli::{QtyArgs, StepArgs};
use crate::ui::format;
use crate::ui::{print, receipt, Badge};

pub fn handle_qty(ctx: &AppContext, args: &QtyArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let mut ledger = Ledger::load(&store)?;

    let updated = ledger.update_quantity(args.id, args.quantity)?;
    if updated {
        ledger.save(&mut store)?;
    }
    report(ctx, &ledger, args.id, updated);
    Ok(())
}

pub fn handle_inc(ctx: &AppContext, args: &StepArgs) -> anyhow::Result<()> {
    step(ctx, args, 1.0)
}

pub fn handle_dec(ctx: &AppContext, args: &StepArgs) -> anyhow::Result<()> {
    step(ctx, args, -1.0)
}

fn step(ctx: &AppContext, args: &StepArgs, sign: f64) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let mut ledger = Ledger::load(&store)?;

    let updated = ledger.adjust_quantity(args.id, sign * args.by)?;
    if updated {
        ledger.save(&mut store)?;
    }
    report(ctx, &ledger, args.id, updated);
    Ok(())
}

/// Print a receipt for a quantity change, or a no-op notice for a missing id.
fn report(ctx: &AppContext, ledger: &Ledger, id: ItemId, updated: bool) {
    if ctx.quiet() {
        return;
    }
    let ui = ctx.ui_context(false, None);
    let id_text = id.to_string();
    match (updated, ledger.item(id)) {
        (true, Some(item)) => {
            let qty_text = format::quantity(item.quantity);
            print(
                &ui,
                &receipt(
                    &ui,
                    Badge::Ok,
                    &format!("Updated {}", item.name),
                    &[("Id", &id_text), ("Qty", &qty_text)],
                ),
            );
        }
        _ => {
            print(
                &ui,
                &receipt(
                    &ui,
                    Badge::Warn,
                    &format!("No item with id {}", id),
                    &[("Id", &id_text)],
                ),
            );
        }
    }
}
