//! Maintenance command handlers: `info` and `check`.

use mercado_core::{check_store, Ledger};

use crate::app::AppContext;
use crate::ui::format;
use crate::ui::{kv, print};

pub fn handle_info(ctx: &AppContext) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let ledger = Ledger::load(&store)?;
    let metadata = store.metadata()?;

    if ctx.quiet() {
        return Ok(());
    }

    let ui = ctx.ui_context(false, None);
    let path = store.path().display().to_string();
    let items = ledger.len().to_string();
    let rate = ledger.exchange_rate();
    let rate_text = if ui.mode.is_pretty() && rate.is_blank() {
        "(not set)".to_string()
    } else {
        rate.as_str().to_string()
    };
    print(&ui, &kv(&ui, "Store", &path));
    print(&ui, &kv(&ui, "Items", &items));
    print(&ui, &kv(&ui, "Rate", &rate_text));
    print(&ui, &kv(&ui, "Format", &metadata.format_version));
    print(
        &ui,
        &kv(&ui, "Created", &format::datetime(&metadata.created_at)),
    );
    print(
        &ui,
        &kv(&ui, "Modified", &format::datetime(&metadata.last_modified)),
    );
    Ok(())
}

pub fn handle_check(ctx: &AppContext) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    match check_store(&store) {
        Ok(()) => {
            if !ctx.quiet() {
                println!("Integrity check: OK");
                println!("- item list: OK");
                println!("- item ids: OK");
                println!("- exchange rate: OK");
            }
        }
        Err(err) => {
            eprintln!("Integrity check: FAILED");
            eprintln!("- error: {}", err);
            eprintln!("Hint: Repair the reported key with the sqlite3 shell or start a fresh store.");
            return Err(anyhow::anyhow!("Integrity check failed"));
        }
    }
    Ok(())
}
