//! Config cleanup with compaction and safe key conversion.
//!
//! A deploy pipeline hands over a JSON config full of nulls and abandoned
//! sections. Compaction strips the noise, safe key conversion turns only
//! the registered keys symbolic, and flattening produces a diff-friendly
//! single-level view.
//!
//! Run: cargo run --example config_cleanup

use remold::{
    flatten, symbolize_deep, try_compact_deep, KeyMode, SymbolRegistry, Value,
};

// =============================================================================
// Rendering
// =============================================================================

fn render(value: &Value) -> String {
    match value {
        Value::Scalar(s) => s.to_string(),
        Value::List(items) => {
            let inner: Vec<String> = items.iter().map(render).collect();
            format!("[{}]", inner.join(", "))
        }
        Value::Map(map) => {
            let inner: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", k, render(v)))
                .collect();
            format!("{{{}}}", inner.join(", "))
        }
        Value::Record(rec) => format!("#{}<{} fields>", rec.tag(), rec.fields().len()),
    }
}

fn print_header(title: &str) {
    println!();
    println!("{}", "=".repeat(65));
    println!("  {}", title);
    println!("{}", "=".repeat(65));
}

// =============================================================================
// Main
// =============================================================================

fn main() -> remold::Result<()> {
    print_header("CONFIG CLEANUP\n  Compaction and Safe Key Conversion");

    let raw = Value::from(serde_json::json!({
        "service": "billing",
        "owner": null,
        "db": {
            "host": "db-primary.internal",
            "port": 5432,
            "replica": null,
            "tuning": {}
        },
        "cache": {
            "ttl": null
        },
        "endpoints": [
            {"path": "/charge", "auth": "token"},
            {"path": "/refund", "auth": null}
        ],
        "x-debug-probe": "injected-by-tooling"
    }));

    println!("\nRaw config:");
    println!("  {}", render(&raw));

    // =========================================================================
    // Compact: nulls and hollow sections disappear, lists stay intact
    // =========================================================================
    let clean = try_compact_deep(&raw)?;

    println!("\nAfter deep compaction:");
    println!("  {}", render(&clean));
    println!("  (cache emptied out and vanished with its last entry;");
    println!("   the null inside endpoints is list content and stays)");

    // =========================================================================
    // Symbolize safely: only keys the registry already knows
    // =========================================================================
    let registry = SymbolRegistry::new();
    registry.register_all([
        "service", "owner", "db", "host", "port", "cache", "ttl", "endpoints", "path", "auth",
    ]);

    let keyed = symbolize_deep(&clean, KeyMode::Known(&registry));

    println!("\nAfter safe conversion ({} registered names):", registry.len());
    println!("  {}", render(&keyed));
    println!("  (\"x-debug-probe\" was never registered, so it stays a string key)");

    // An empty allow list converts nothing at all
    let untouched = symbolize_deep(&clean, KeyMode::Allowed(&[]));
    println!("\nWith an empty allow list: unchanged = {}", untouched == clean);

    // =========================================================================
    // Flatten: one level, first leaf under each key wins
    // =========================================================================
    let flat = flatten(&clean);

    println!("\nFlattened for diffing:");
    println!("  {}", render(&flat));

    println!();
    Ok(())
}
