//! Daily consumption and footprint report over the collected ledger.

use std::io::Write;

use crate::{
    banner::{RULE, SEPARATOR},
    config::Config,
    ledger::Ledger,
    prelude::*,
    quantity::{emission::KilogramsCo2, energy::KilowattHours, proportions::Percentage},
    tables::build_ledger_table,
};

#[derive(Copy, Clone, Debug)]
pub struct Totals {
    pub energy_consumption: KilowattHours,
    pub co2_emission: KilogramsCo2,
}

/// What the power-saving mode might save per day.
#[derive(Copy, Clone, Debug)]
pub struct Savings {
    pub rate: Percentage,
    pub energy: KilowattHours,
    pub co2_reduction: KilogramsCo2,
}

impl Savings {
    /// The reduction is derived from the saved energy, not from the total emission.
    pub fn simulate(total_energy_consumption: KilowattHours, config: &Config) -> Self {
        let energy = total_energy_consumption * config.saving_rate;
        Self { rate: config.saving_rate, energy, co2_reduction: energy * config.emission_factor }
    }
}

#[must_use]
pub struct Report<'a> {
    ledger: &'a Ledger,
    pub totals: Totals,

    /// Absent for an empty ledger.
    pub savings: Option<Savings>,
}

impl<'a> Report<'a> {
    pub fn new(ledger: &'a Ledger, config: &Config) -> Self {
        let totals = Totals {
            energy_consumption: ledger.total_energy_consumption(),
            co2_emission: ledger.total_co2_emission(),
        };
        let savings = (!ledger.is_empty())
            .then(|| Savings::simulate(totals.energy_consumption, config));
        Self { ledger, totals, savings }
    }

    pub fn write_to(&self, output: &mut impl Write) -> Result {
        writeln!(output, "\n{RULE}")?;
        writeln!(output, "             Daily Energy Consumption & Carbon Footprint")?;
        writeln!(output, "{RULE}\n")?;

        if !self.ledger.is_empty() {
            writeln!(output, "{}\n", build_ledger_table(self.ledger))?;
        }

        writeln!(output, "{SEPARATOR}")?;
        writeln!(output, "Total Energy Consumption: \t\t{}/day", self.totals.energy_consumption)?;
        writeln!(output, "Total CO₂ Emissions:      \t\t{}/day", self.totals.co2_emission)?;

        if let Some(savings) = self.savings {
            writeln!(output, "{SEPARATOR}\n")?;
            writeln!(output, "Energy-Saving Simulation")?;
            writeln!(
                output,
                "If you enable power-saving mode (assumed {}% saving), you might save:",
                savings.rate.0,
            )?;
            writeln!(output, "  Energy Saved: {}/day", savings.energy)?;
            writeln!(output, "  CO₂ Reduction: {}/day", savings.co2_reduction)?;
        }

        Ok(())
    }
}
