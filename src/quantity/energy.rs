use std::ops::Mul;

use crate::quantity::{
    emission::{EmissionFactor, KilogramsCo2},
    proportions::Percentage,
};

quantity!(KilowattHours, via: f64, suffix: "kWh", precision: 3);

impl Mul<Percentage> for KilowattHours {
    type Output = Self;

    fn mul(self, percentage: Percentage) -> Self::Output {
        self * percentage.to_ratio()
    }
}

impl Mul<EmissionFactor> for KilowattHours {
    type Output = KilogramsCo2;

    fn mul(self, factor: EmissionFactor) -> Self::Output {
        KilogramsCo2(self.0 * factor.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_display_precision() {
        assert_eq!(KilowattHours(0.4).to_string(), "0.400 kWh");
        assert_eq!(KilowattHours(4.8).to_string(), "4.800 kWh");
        assert_eq!(KilowattHours::ZERO.to_string(), "0.000 kWh");
    }

    #[test]
    fn test_percentage_share() {
        assert_abs_diff_eq!((KilowattHours(0.41) * Percentage(10)).0, 0.041, epsilon = 1e-12);
    }

    #[test]
    fn test_sum() {
        let total: KilowattHours = [KilowattHours(0.4), KilowattHours(0.01)].into_iter().sum();
        assert_abs_diff_eq!(total.0, 0.41, epsilon = 1e-12);
    }

    #[test]
    fn test_ordering() {
        assert!(KilowattHours(0.4) > KilowattHours(0.01));
        assert_eq!(KilowattHours(0.4).max(KilowattHours(4.8)), KilowattHours(4.8));
    }
}
