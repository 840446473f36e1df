//! Rendering primitives for CLI output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table as ComfyTable};

use super::context::UiContext;
use super::theme::{colors, styled, Badge};

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let badge_text = kind.display(ctx.unicode);
    let colored_badge = styled(badge_text, kind.color(), ctx.color);

    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Render a key-value pair.
///
/// Pretty mode: "Key: value" with dim key
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let styled_key = styled(&format!("{}:", key), colors::DIM, ctx.color);
        format!("{} {}", styled_key, value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

/// Render a hint line.
///
/// Pretty mode: "Hint: text" with dim styling
/// Plain mode: "hint=text"
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled("Hint:", colors::DIM, ctx.color);
        format!("{} {}", label, text)
    } else {
        format!("hint={}", text)
    }
}

/// Render a receipt (summary block after an action).
///
/// Pretty mode: Badge + indented key-value pairs
/// Plain mode: status line + key=value lines
pub fn receipt(ctx: &UiContext, kind: Badge, title: &str, items: &[(&str, &str)]) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, kind, title));
        for (key, value) in items {
            lines.push(format!("  {}", kv(ctx, key, value)));
        }
    } else {
        let status = match kind {
            Badge::Ok => "ok",
            Badge::Warn => "noop",
            Badge::Err => "error",
            Badge::Info => "info",
        };
        lines.push(format!("status={}", status));
        for (key, value) in items {
            lines.push(kv(ctx, key, value));
        }
    }

    lines.join("\n")
}

/// Render the item table.
///
/// Pretty mode: bordered comfy-table
/// Plain mode: space-separated values, no header
pub fn items_table(ctx: &UiContext, headers: &[&str], rows: &[Vec<String>]) -> String {
    if ctx.mode.is_pretty() {
        let mut table = ComfyTable::new();

        if ctx.unicode {
            table
                .load_preset(UTF8_FULL)
                .apply_modifier(UTF8_ROUND_CORNERS);
        } else {
            table.load_preset(comfy_table::presets::ASCII_MARKDOWN);
        }

        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(headers.to_vec());
        for row in rows {
            table.add_row(row);
        }

        table.to_string()
    } else {
        rows.iter()
            .map(|row| row.join(" "))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Print a message to stdout with proper mode handling.
///
/// In JSON mode this does nothing; JSON output is emitted separately.
pub fn print(ctx: &UiContext, message: &str) {
    if !ctx.mode.is_json() {
        println!("{}", message);
    }
}

/// Format an error message with optional hint.
///
/// Pretty mode: "[ERR] message" with optional "Hint: ..." on next line
/// Plain mode: "error=message" with optional "hint=suggestion"
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Err, message));
        if let Some(h) = error_hint {
            lines.push(hint(ctx, h));
        }
    } else {
        lines.push(format!("error={}", message));
        if let Some(h) = error_hint {
            lines.push(format!("hint={}", h));
        }
    }

    lines.join("\n")
}

/// Print an error message to stderr with optional hint.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::OutputMode;

    fn plain_ctx() -> UiContext {
        UiContext {
            is_tty: false,
            color: false,
            unicode: false,
            width: 80,
            mode: OutputMode::Plain,
        }
    }

    fn pretty_ctx() -> UiContext {
        UiContext {
            is_tty: true,
            color: false,
            unicode: true,
            width: 80,
            mode: OutputMode::Pretty,
        }
    }

    #[test]
    fn test_kv_plain() {
        let ctx = plain_ctx();
        assert_eq!(kv(&ctx, "Total USD", "5.00"), "total_usd=5.00");
    }

    #[test]
    fn test_kv_pretty() {
        let ctx = pretty_ctx();
        assert_eq!(kv(&ctx, "Total USD", "5.00"), "Total USD: 5.00");
    }

    #[test]
    fn test_hint_modes() {
        assert_eq!(hint(&plain_ctx(), "run it"), "hint=run it");
        assert_eq!(hint(&pretty_ctx(), "run it"), "Hint: run it");
    }

    #[test]
    fn test_receipt_plain_status_lines() {
        let ctx = plain_ctx();
        let out = receipt(&ctx, Badge::Ok, "Added Milk", &[("Id", "1")]);
        assert_eq!(out, "status=ok\nid=1");

        let out = receipt(&ctx, Badge::Warn, "No item with id 9", &[("Id", "9")]);
        assert_eq!(out, "status=noop\nid=9");
    }

    #[test]
    fn test_receipt_pretty_has_badge_and_indent() {
        let ctx = pretty_ctx();
        let out = receipt(&ctx, Badge::Ok, "Added Milk", &[("Id", "1")]);
        assert!(out.starts_with("[\u{2713}] Added Milk"));
        assert!(out.contains("\n  Id: 1"));
    }

    #[test]
    fn test_items_table_plain_is_rows_only() {
        let ctx = plain_ctx();
        let rows = vec![vec!["1".to_string(), "Milk".to_string(), "3.00".to_string()]];
        let out = items_table(&ctx, &["ID", "ITEM", "TOTAL"], &rows);
        assert_eq!(out, "1 Milk 3.00");
    }

    #[test]
    fn test_items_table_pretty_has_header() {
        let ctx = pretty_ctx();
        let rows = vec![vec!["1".to_string(), "Milk".to_string(), "3.00".to_string()]];
        let out = items_table(&ctx, &["ID", "ITEM", "TOTAL"], &rows);
        assert!(out.contains("ID"));
        assert!(out.contains("Milk"));
    }

    #[test]
    fn test_error_message_plain() {
        let ctx = plain_ctx();
        let out = error_message(&ctx, "boom", Some("try again"));
        assert_eq!(out, "error=boom\nhint=try again");
    }
}
