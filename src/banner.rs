//! Fixed text around the interactive session and the report.

use std::io::Write;

use crate::prelude::*;

pub const RULE: &str = "=======================================================================";
pub const SEPARATOR: &str =
    "-----------------------------------------------------------------------";

const TIPS: [&str; 4] = [
    "Use power-saving mode on your devices.",
    "Reduce screen brightness when possible.",
    "Turn off devices when not in use.",
    "Unplug chargers once devices are fully charged.",
];

pub fn write_header(output: &mut impl Write) -> Result {
    writeln!(output, "{RULE}")?;
    writeln!(output, "                     Energy Consumption Tracker")?;
    writeln!(output, "{RULE}\n")?;
    writeln!(output, "This tracker calculates your daily energy consumption and carbon footprint")?;
    writeln!(
        output,
        "for common devices such as laptops, smartphones, gaming consoles, tablets, and desktops.\n",
    )?;
    Ok(())
}

pub fn write_tips(output: &mut impl Write) -> Result {
    writeln!(output, "\nGeneral Energy-Saving Tips:")?;
    for (number, tip) in TIPS.iter().enumerate() {
        writeln!(output, "{}. {tip}", number + 1)?;
    }
    Ok(())
}

pub fn write_footer(output: &mut impl Write) -> Result {
    writeln!(output, "\n{RULE}")?;
    writeln!(output, "       Thank you for using the Energy Consumption Tracker!")?;
    writeln!(output, "{RULE}")?;
    Ok(())
}
