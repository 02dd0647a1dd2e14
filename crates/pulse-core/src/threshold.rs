// File: crates/pulse-core/src/threshold.rs
// Summary: Three-way threshold classification of sample values.

/// Values strictly below this are `Low`.
pub const MIN_THRESHOLD: f64 = 30.0;
/// Values strictly above this are `High`.
pub const MAX_THRESHOLD: f64 = 70.0;

/// Ordered low < neutral < high.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ThresholdClass {
    Low,
    Neutral,
    High,
}

/// Pure function of `v`; NaN lands in `Neutral`.
pub fn classify(v: f64) -> ThresholdClass {
    if v > MAX_THRESHOLD {
        ThresholdClass::High
    } else if v < MIN_THRESHOLD {
        ThresholdClass::Low
    } else {
        ThresholdClass::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_neutral() {
        assert_eq!(classify(30.0), ThresholdClass::Neutral);
        assert_eq!(classify(70.0), ThresholdClass::Neutral);
        assert_eq!(classify(29.999), ThresholdClass::Low);
        assert_eq!(classify(70.001), ThresholdClass::High);
        assert_eq!(classify(0.0), ThresholdClass::Low);
        assert_eq!(classify(100.0), ThresholdClass::High);
    }

    #[test]
    fn classification_is_stable_and_ordered() {
        for i in 0..=1000 {
            let v = i as f64 / 10.0;
            let c = classify(v);
            assert_eq!(c, classify(v));
            let expected = if v < 30.0 {
                ThresholdClass::Low
            } else if v > 70.0 {
                ThresholdClass::High
            } else {
                ThresholdClass::Neutral
            };
            assert_eq!(c, expected, "v = {v}");
        }
        assert!(ThresholdClass::Low < ThresholdClass::Neutral);
        assert!(ThresholdClass::Neutral < ThresholdClass::High);
    }

    #[test]
    fn nan_is_neutral() {
        assert_eq!(classify(f64::NAN), ThresholdClass::Neutral);
    }
}
