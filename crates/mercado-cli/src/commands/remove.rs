//! Remove item command handler.

use mercado_core::Ledger;

use crate::app::AppContext;
use crate::cli::RmArgs;
use crate::ui::{print, receipt, Badge};

pub fn handle_rm(ctx: &AppContext, args: &RmArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let mut ledger = Ledger::load(&store)?;

    let name = ledger.item(args.id).map(|item| item.name.clone());
    let removed = ledger.remove_item(args.id);
    if removed {
        ledger.save(&mut store)?;
    }

    if ctx.quiet() {
        return Ok(());
    }

    let ui = ctx.ui_context(false, None);
    let id_text = args.id.to_string();
    if removed {
        let name = name.unwrap_or_default();
        print(
            &ui,
            &receipt(
                &ui,
                Badge::Ok,
                &format!("Removed {}", name),
                &[("Id", &id_text)],
            ),
        );
    } else {
        // Removing an absent id is a no-op, not an error.
        print(
            &ui,
            &receipt(
                &ui,
                Badge::Warn,
                &format!("No item with id {}", args.id),
                &[("Id", &id_text)],
            ),
        );
    }
    Ok(())
}
