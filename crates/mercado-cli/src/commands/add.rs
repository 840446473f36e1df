//! Add item command handler.

use mercado_core::{Currency, Ledger};

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::ui::format;
use crate::ui::{hint, print, receipt, Badge};

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let currency: Currency = args.currency.parse()?;

    let mut store = ctx.open_store()?;
    let mut ledger = Ledger::load(&store)?;
    let id = ledger.add_item(&args.name, args.qty, args.price, currency)?;
    ledger.save(&mut store)?;

    if ctx.quiet() {
        return Ok(());
    }

    let ui = ctx.ui_context(false, None);
    let id_text = id.to_string();
    let qty_text = format::quantity(args.qty);
    let price_text = format::unit_price(args.price, currency);
    print(
        &ui,
        &receipt(
            &ui,
            Badge::Ok,
            &format!("Added {}", args.name.trim()),
            &[
                ("Id", &id_text),
                ("Qty", &qty_text),
                ("Price", &price_text),
            ],
        ),
    );
    if ui.mode.is_pretty() {
        print(
            &ui,
            &hint(
                &ui,
                &format!("mercado list  \u{00B7}  mercado qty {} <QUANTITY>", id),
            ),
        );
    }
    Ok(())
}
