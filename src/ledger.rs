use crate::{
    device::DeviceRecord,
    quantity::{emission::KilogramsCo2, energy::KilowattHours},
};

/// Device records in the order they were entered.
#[must_use]
#[derive(Default)]
pub struct Ledger(Vec<DeviceRecord>);

impl Ledger {
    pub fn push(&mut self, record: DeviceRecord) {
        self.0.push(record);
    }

    pub const fn len(&self) -> usize {
        self.0.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DeviceRecord> {
        self.0.iter()
    }

    pub fn total_energy_consumption(&self) -> KilowattHours {
        self.iter().map(DeviceRecord::energy_consumption).sum()
    }

    pub fn total_co2_emission(&self) -> KilogramsCo2 {
        self.iter().map(DeviceRecord::co2_emission).sum()
    }
}

impl FromIterator<DeviceRecord> for Ledger {
    fn from_iter<T: IntoIterator<Item = DeviceRecord>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
