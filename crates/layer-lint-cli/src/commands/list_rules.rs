//! List rules command implementation.

use layer_lint_rules::all_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<8} {:<35} Description", "Code", "Name");
    println!("{}", "-".repeat(80));

    for info in all_rules().infos() {
        println!("{:<8} {:<35} {}", info.code, info.name, info.description);
    }

    println!("\nAll rules run by default. Use --rules (names or codes) or the");
    println!("manifest's [rules] table to select a subset, e.g.:");
    println!("  layer-lint check --rules no-domain-to-infrastructure,no-cyclic-dependency");
    println!("  layer-lint check --rules LL002,LL005");
}
