quantity!(Percentage, via: u16, suffix: "%", precision: 0);

impl Percentage {
    /// Convert the percentage into `0.0..=1.0`.
    pub fn to_ratio(self) -> f64 {
        0.01 * f64::from(self.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_to_ratio() {
        assert_abs_diff_eq!(Percentage(10).to_ratio(), 0.1);
        assert_abs_diff_eq!(Percentage(0).to_ratio(), 0.0);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("25".parse::<Percentage>().ok(), Some(Percentage(25)));
        assert_eq!(Percentage(10).to_string(), "10 %");
    }
}
