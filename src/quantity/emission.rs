quantity!(KilogramsCo2, via: f64, suffix: "kg CO₂", precision: 3);
quantity!(EmissionFactor, via: f64, suffix: "kg CO₂/kWh", precision: 3);

impl EmissionFactor {
    /// Energy Commission's 2021 grid emission factor for Peninsular Malaysia.
    pub const PENINSULAR_MALAYSIA: Self = Self(0.758);
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::quantity::energy::KilowattHours;

    #[test]
    fn test_emission() {
        let emission = KilowattHours(0.4) * EmissionFactor::PENINSULAR_MALAYSIA;
        assert_abs_diff_eq!(emission.0, 0.3032, epsilon = 1e-9);
        assert_eq!(emission.to_string(), "0.303 kg CO₂");
    }

    #[test]
    fn test_display_rounding() {
        assert_eq!(KilogramsCo2(3.6384).to_string(), "3.638 kg CO₂");
        assert_eq!(EmissionFactor::PENINSULAR_MALAYSIA.to_string(), "0.758 kg CO₂/kWh");
    }
}
