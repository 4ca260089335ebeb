use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use itertools::Itertools;

use crate::ledger::Ledger;

#[must_use]
pub fn build_ledger_table(ledger: &Ledger) -> Table {
    let top_emitter = if ledger.len() > 1 {
        ledger.iter().position_max_by_key(|record| record.co2_emission())
    } else {
        None
    };

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_header(vec!["#", "Device", "Type", "Power", "Usage", "Energy/day", "CO₂/day"]);
    for (index, record) in ledger.iter().enumerate() {
        let emission_color = if top_emitter == Some(index) { Color::Red } else { Color::Reset };
        table.add_row(vec![
            Cell::new(index + 1).add_attribute(Attribute::Dim),
            Cell::new(record.name()),
            Cell::new(record.category()),
            Cell::new(record.power_rating()).set_alignment(CellAlignment::Right),
            Cell::new(record.daily_usage()).set_alignment(CellAlignment::Right),
            Cell::new(record.energy_consumption()).set_alignment(CellAlignment::Right),
            Cell::new(record.co2_emission())
                .set_alignment(CellAlignment::Right)
                .fg(emission_color),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        catalog::DeviceCategory,
        device::{DailyUsage, Device},
        quantity::{emission::EmissionFactor, time::Hours},
    };

    fn ledger(entries: &[(&str, DeviceCategory, f64)]) -> Ledger {
        entries
            .iter()
            .map(|(name, category, hours)| {
                Device::new(*name, *category).with_daily_usage(
                    DailyUsage::try_from(Hours(*hours)).unwrap(),
                    EmissionFactor::PENINSULAR_MALAYSIA,
                )
            })
            .collect()
    }

    #[test]
    fn test_rows() {
        let ledger = ledger(&[
            ("Work laptop", DeviceCategory::Laptop, 8.0),
            ("Phone", DeviceCategory::Smartphone, 2.0),
        ]);
        let rendered = build_ledger_table(&ledger).to_string();
        assert!(rendered.contains("Work laptop"));
        assert!(rendered.contains("Smartphone"));
        assert!(rendered.contains("50 W"));
        assert!(rendered.contains("8.0 h"));
        assert!(rendered.contains("0.400 kWh"));
        assert!(rendered.contains("0.303 kg CO₂"));
        assert!(rendered.contains("0.010 kWh"));
        assert!(rendered.contains("0.008 kg CO₂"));
    }

    #[test]
    fn test_header_only_when_empty() {
        let table = build_ledger_table(&Ledger::default());
        assert_eq!(table.row_iter().count(), 0);
    }
}
