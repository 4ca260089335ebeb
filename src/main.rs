mod banner;
mod catalog;
mod cli;
mod config;
mod device;
mod intake;
mod ledger;
mod prelude;
mod quantity;
mod report;
mod tables;

use std::io::{self, BufRead, Write};

use clap::{Parser, crate_version};

use crate::{cli::Args, config::Config, intake::Intake, prelude::*, report::Report};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(args.log_level)
        .without_time()
        .compact()
        .init();
    info!(version = crate_version!(), "starting…");

    let config = Config::from(&args);
    debug!(?config, "configured");

    let mut stdout = io::stdout().lock();
    run(io::stdin().lock(), &mut stdout, &config)?;
    stdout.flush()?;

    info!("done!");
    Ok(())
}

/// Run the whole interactive session: header, intake, report, tips, and footer.
fn run(input: impl BufRead, output: &mut impl Write, config: &Config) -> Result {
    banner::write_header(output)?;
    let ledger = Intake::new(input, &mut *output).collect_ledger(config)?;
    Report::new(&ledger, config).write_to(output)?;
    banner::write_tips(output)?;
    banner::write_footer(output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn position(haystack: &str, needle: &str) -> usize {
        haystack.find(needle).unwrap_or_else(|| panic!("`{needle}` is missing"))
    }

    #[test]
    fn test_session_order() {
        let mut output = Vec::new();
        run(Cursor::new("1\n1\nWork laptop\n8\n"), &mut output, &Config::default()).unwrap();
        let output = String::from_utf8(output).unwrap();

        let header = position(&output, "Energy Consumption Tracker");
        let intake = position(&output, "Enter the number of devices");
        let report = position(&output, "Daily Energy Consumption & Carbon Footprint");
        let savings = position(&output, "Energy-Saving Simulation");
        let tips = position(&output, "General Energy-Saving Tips:");
        let footer = position(&output, "Thank you for using the Energy Consumption Tracker!");
        assert!(header < intake);
        assert!(intake < report);
        assert!(report < savings);
        assert!(savings < tips);
        assert!(tips < footer);
        assert!(output.contains("0.400 kWh/day"));
    }

    #[test]
    fn test_session_without_devices() {
        let mut output = Vec::new();
        run(Cursor::new("0\n"), &mut output, &Config::default()).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("0.000 kWh/day"));
        assert!(!output.contains("Energy-Saving Simulation"));
        assert!(position(&output, "General Energy-Saving Tips:") < position(&output, "Thank you"));
    }
}
