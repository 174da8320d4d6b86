use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{
        comparison::Comparison,
        slot::parse_slot_label,
        summary::{ComparisonSummary, SavingsBand},
        tariff::{RateTable, RateTier, TimeOfUseTariff},
    },
    fmt::FormattedPercentage,
    prelude::*,
};

pub fn try_build_rate_table(tariff: &TimeOfUseTariff, rates: &RateTable) -> Result<Table> {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.set_header(vec!["Slot", "Tier", "Rate"]);
    for (label, rate) in rates.iter() {
        let tier = tariff.tier(parse_slot_label(label)?);
        let tier_color = match tier {
            RateTier::Peak => Color::Red,
            RateTier::Night => Color::Green,
            RateTier::Day => Color::Reset,
        };
        table.add_row(vec![
            Cell::new(label),
            Cell::new(format!("{tier:?}")).fg(tier_color),
            Cell::new(rate).set_alignment(CellAlignment::Right).fg(tier_color),
        ]);
    }
    Ok(table)
}

#[must_use]
pub fn build_comparison_table(comparison: &Comparison) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.set_header(vec!["MPRN", "Original usage", "Simulated cost", "Difference", "Difference %"]);
    for row in &comparison.rows {
        let difference_color = match row.difference {
            Some(difference) if difference > 0.0 => Color::Red,
            Some(difference) if difference < 0.0 => Color::Green,
            _ => Color::Reset,
        };
        table.add_row(vec![
            Cell::new(&row.mprn),
            row.original_usage
                .map(|original| Cell::new(format!("{original:.2}")))
                .unwrap_or_else(|| Cell::new("n/a").add_attribute(Attribute::Dim))
                .set_alignment(CellAlignment::Right),
            Cell::new(row.simulated_cost).set_alignment(CellAlignment::Right),
            row.difference
                .map(|difference| Cell::new(format!("{difference:+.2}")))
                .unwrap_or_else(|| Cell::new("n/a").add_attribute(Attribute::Dim))
                .set_alignment(CellAlignment::Right)
                .fg(difference_color),
            row.percent_difference
                .map(|percent| Cell::new(FormattedPercentage(percent)))
                .unwrap_or_else(|| Cell::new("n/a").add_attribute(Attribute::Dim))
                .set_alignment(CellAlignment::Right)
                .fg(difference_color),
        ]);
    }
    table
}

#[must_use]
pub fn build_change_counts_table(summary: &ComparisonSummary) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.set_header(vec!["Change", "Customers"]);
    table.add_row(vec![
        Cell::new("Increase").fg(Color::Red),
        Cell::new(summary.increases).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Decrease").fg(Color::Green),
        Cell::new(summary.decreases).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("No change"),
        Cell::new(summary.unchanged).set_alignment(CellAlignment::Right),
    ]);
    if summary.unmatched > 0 {
        table.add_row(vec![
            Cell::new("Not compared").add_attribute(Attribute::Dim),
            Cell::new(summary.unmatched).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

#[must_use]
pub fn build_savings_bands_table(summary: &ComparisonSummary) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.set_header(vec!["Segment", "Customers"]);
    for band in SavingsBand::ALL {
        let color = match band {
            SavingsBand::HighSavings | SavingsBand::ModerateSavings => Color::Green,
            SavingsBand::MinimalChange => Color::Reset,
            SavingsBand::ModerateLoss | SavingsBand::HighLoss => Color::Red,
        };
        table.add_row(vec![
            Cell::new(band).fg(color),
            Cell::new(summary.band_count(band)).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}
