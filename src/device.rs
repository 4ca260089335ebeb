use std::ops::RangeInclusive;

use crate::{
    catalog::DeviceCategory,
    intake::Rejection,
    quantity::{
        emission::{EmissionFactor, KilogramsCo2},
        energy::KilowattHours,
        power::Watts,
        time::Hours,
    },
};

/// Daily usage which is guaranteed to fit in a single day and to be at least an hour.
#[derive(Copy, Clone, Debug, PartialEq, Eq, derive_more::Display)]
pub struct DailyUsage(Hours);

impl DailyUsage {
    pub const RANGE: RangeInclusive<Hours> = Hours(1.0)..=Hours(24.0);

    pub const fn hours(self) -> Hours {
        self.0
    }
}

impl TryFrom<Hours> for DailyUsage {
    type Error = Rejection;

    fn try_from(hours: Hours) -> Result<Self, Self::Error> {
        if Self::RANGE.contains(&hours) {
            Ok(Self(hours))
        } else {
            Err(Rejection::UsageOutOfRange(hours))
        }
    }
}

/// Device which is yet to be given its daily usage.
#[must_use]
pub struct Device {
    name: String,
    category: DeviceCategory,
    power_rating: Watts,
}

impl Device {
    pub fn new(name: impl Into<String>, category: DeviceCategory) -> Self {
        Self { name: name.into(), category, power_rating: category.power_rating() }
    }

    /// Apply the daily usage and derive the consumption and the emission from it.
    pub fn with_daily_usage(self, usage: DailyUsage, factor: EmissionFactor) -> DeviceRecord {
        let energy_consumption = self.power_rating * usage.hours();
        DeviceRecord {
            name: self.name,
            category: self.category,
            power_rating: self.power_rating,
            daily_usage: usage,
            energy_consumption,
            co2_emission: energy_consumption * factor,
        }
    }
}

/// Finalized device entry. The derived values are only computed once, in [`Device::with_daily_usage`].
#[must_use]
#[derive(Clone, Debug)]
pub struct DeviceRecord {
    name: String,
    category: DeviceCategory,
    power_rating: Watts,
    daily_usage: DailyUsage,
    energy_consumption: KilowattHours,
    co2_emission: KilogramsCo2,
}

impl DeviceRecord {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn category(&self) -> DeviceCategory {
        self.category
    }

    pub const fn power_rating(&self) -> Watts {
        self.power_rating
    }

    pub const fn daily_usage(&self) -> DailyUsage {
        self.daily_usage
    }

    /// Energy consumed per day.
    pub const fn energy_consumption(&self) -> KilowattHours {
        self.energy_consumption
    }

    /// CO₂ emitted per day.
    pub const fn co2_emission(&self) -> KilogramsCo2 {
        self.co2_emission
    }
}
