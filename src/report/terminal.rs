use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, CellAlignment, Table};
use owo_colors::OwoColorize;

use crate::dedup::RuleTally;
use crate::engine::DedupStats;

/// Render the dedup summary to the terminal with colors
pub fn render_summary(stats: &DedupStats) {
    println!();
    if stats.removed() == 0 {
        println!(
            "  {}  {} results, no duplicates found",
            "✅".bold(),
            stats.original.to_string().bold()
        );
    } else {
        println!(
            "  {}  {} results -> {} unique",
            "🔍".bold(),
            stats.original.to_string().bold(),
            stats.unique.to_string().bold()
        );
        println!(
            "      removed {}",
            format!("{} duplicate entries", stats.removed()).yellow().bold()
        );
    }
    println!();
}

/// Render per-rule duplicate counts as a table (the `stats` subcommand)
pub fn render_rule_table(tallies: &[RuleTally]) {
    println!();
    if tallies.is_empty() {
        println!("  {}  No results in this run", "✅".bold());
        println!();
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Rule", "Results", "Duplicates"]);

    let mut total = 0;
    let mut duplicates = 0;
    for tally in tallies {
        total += tally.total;
        duplicates += tally.duplicates;
        table.add_row(vec![
            Cell::new(&tally.rule_id),
            Cell::new(tally.total).set_alignment(CellAlignment::Right),
            Cell::new(tally.duplicates).set_alignment(CellAlignment::Right),
        ]);
    }

    println!("{table}");

    if duplicates > 0 {
        println!(
            " {} of {} results are duplicates — run `sarif-dedup dedup` to collapse them",
            duplicates.to_string().yellow().bold(),
            total.to_string().bold()
        );
    } else {
        println!(" {} results, all unique", total.to_string().bold());
    }
    println!();
}
