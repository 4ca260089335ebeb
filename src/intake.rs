//! Interactive collection of the device ledger.

use std::io::{BufRead, Write};

use crate::{
    catalog::DeviceCategory,
    config::Config,
    device::{DailyUsage, Device, DeviceRecord},
    ledger::Ledger,
    prelude::*,
    quantity::time::Hours,
};

/// Reason for turning down a line of interactive input.
#[derive(Debug, thiserror::Error)]
pub enum Rejection {
    #[error("`{0}` is not a number")]
    NotANumber(String),

    #[error("there is no device category #{0}")]
    UnknownCategory(i64),

    #[error("daily usage of {0} is outside of 1-24 hours")]
    UsageOutOfRange(Hours),
}

/// Line-oriented prompter over arbitrary input and output streams.
pub struct Intake<R, W> {
    input: R,
    output: W,
    buffer: String,
}

impl<R: BufRead, W: Write> Intake<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output, buffer: String::new() }
    }

    /// Read the device count and then each of the devices.
    pub fn collect_ledger(&mut self, config: &Config) -> Result<Ledger> {
        let requested = self.prompt_device_count()?;
        let count = usize::try_from(requested).unwrap_or_else(|_| {
            warn!(requested, "negative device count, nothing to track");
            0
        });
        let mut ledger = Ledger::default();
        for number in 1..=count {
            ledger.push(self.build_record(number, config)?);
        }
        info!(n_devices = ledger.len(), "collected");
        Ok(ledger)
    }

    /// Prompt for all the device properties and finalize the record.
    #[instrument(skip_all, fields(number = number))]
    pub fn build_record(&mut self, number: usize, config: &Config) -> Result<DeviceRecord> {
        writeln!(self.output, "\n--- Device {number} ---")?;
        let category = self.prompt_category()?;
        let name = self.prompt_name()?;
        let usage = self.prompt_usage_hours()?;
        let record = Device::new(name, category).with_daily_usage(usage, config.emission_factor);
        debug!(
            name = record.name(),
            %category,
            energy = ?record.energy_consumption(),
            co2 = ?record.co2_emission(),
            "recorded",
        );
        Ok(record)
    }

    /// Any integer is accepted here, the caller decides what a non-positive count means.
    pub fn prompt_device_count(&mut self) -> Result<i64> {
        self.read_valid(
            "Enter the number of devices you want to track: ",
            "Invalid number! Please try again.",
            parse_integer,
        )
    }

    pub fn prompt_category(&mut self) -> Result<DeviceCategory> {
        let prompt =
            format!("Select device type:\n{}\nEnter your choice (1-5): ", DeviceCategory::menu());
        self.read_valid(&prompt, "Invalid choice! Please try again.", |line| {
            DeviceCategory::try_from(parse_integer(line)?)
        })
    }

    pub fn prompt_name(&mut self) -> Result<String> {
        self.write_prompt("Enter the device name: ")?;
        Ok(self.read_line()?.to_owned())
    }

    pub fn prompt_usage_hours(&mut self) -> Result<DailyUsage> {
        self.read_valid(
            "Enter daily usage (in hours): ",
            "Invalid input! Please try again.",
            |line| {
                let hours = line
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| Rejection::NotANumber(line.to_owned()))?;
                DailyUsage::try_from(Hours(hours))
            },
        )
    }

    /// Keep prompting until `parse` accepts the line. There is no retry limit.
    pub fn read_valid<T>(
        &mut self,
        prompt: &str,
        complaint: &str,
        parse: impl Fn(&str) -> Result<T, Rejection>,
    ) -> Result<T> {
        loop {
            self.write_prompt(prompt)?;
            let line = self.read_line()?;
            match parse(line) {
                Ok(value) => return Ok(value),
                Err(rejection) => {
                    warn!(%rejection, "rejected");
                    writeln!(self.output, "{complaint}")?;
                }
            }
        }
    }

    fn write_prompt(&mut self, prompt: &str) -> Result {
        write!(self.output, "{prompt}")?;
        self.output.flush().context("failed to flush the prompt")
    }

    /// Read the next line without its terminator.
    fn read_line(&mut self) -> Result<&str> {
        self.buffer.clear();
        let n_bytes = self.input.read_line(&mut self.buffer).context("failed to read the input")?;
        ensure!(n_bytes != 0, "the input ended before all the devices were entered");
        Ok(self.buffer.trim_end_matches(['\n', '\r']))
    }
}

fn parse_integer(line: &str) -> Result<i64, Rejection> {
    line.trim().parse().map_err(|_| Rejection::NotANumber(line.to_owned()))
}
