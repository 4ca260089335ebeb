use crate::{
    cli::Args,
    quantity::{emission::EmissionFactor, proportions::Percentage},
};

/// Session-wide settings, built once at startup and passed around by reference.
#[must_use]
#[derive(Copy, Clone, Debug, bon::Builder)]
pub struct Config {
    /// Regional grid CO₂ intensity.
    #[builder(default = EmissionFactor::PENINSULAR_MALAYSIA)]
    pub emission_factor: EmissionFactor,

    /// Assumed share of energy saved in the power-saving simulation.
    #[builder(default = Config::DEFAULT_SAVING_RATE)]
    pub saving_rate: Percentage,
}

impl Config {
    pub const DEFAULT_SAVING_RATE: Percentage = Percentage(10);
}

impl Default for Config {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        Self::builder().saving_rate(args.saving_rate).build()
    }
}
