use clap::{Parser, builder::TypedValueParser};
use tracing::Level;

use crate::quantity::proportions::Percentage;

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    /// Maximum level of the diagnostic messages written to stderr.
    #[clap(long, env = "LOG_LEVEL", default_value = "warn")]
    pub log_level: Level,

    /// Assumed energy saving of the power-saving mode, in percent.
    #[clap(
        long = "saving-rate-percent",
        env = "SAVING_RATE_PERCENT",
        default_value = "10",
        value_parser = clap::value_parser!(u16).range(0..=100).map(Percentage),
    )]
    pub saving_rate: Percentage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["wattprint"]).unwrap();
        assert_eq!(args.log_level, Level::WARN);
        assert_eq!(args.saving_rate, Percentage(10));
    }

    #[test]
    fn test_invalid_saving_rate() {
        assert!(Args::try_parse_from(["wattprint", "--saving-rate-percent", "ten"]).is_err());
    }

    #[test]
    fn test_saving_rate_bounds() {
        assert!(Args::try_parse_from(["wattprint", "--saving-rate-percent", "500"]).is_err());
        assert!(Args::try_parse_from(["wattprint", "--saving-rate-percent", "101"]).is_err());
        let args = Args::try_parse_from(["wattprint", "--saving-rate-percent", "100"]).unwrap();
        assert_eq!(args.saving_rate, Percentage(100));
        let args = Args::try_parse_from(["wattprint", "--saving-rate-percent", "0"]).unwrap();
        assert_eq!(args.saving_rate, Percentage(0));
    }
}
