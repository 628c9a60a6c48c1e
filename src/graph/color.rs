use serde::{Deserialize, Serialize};

/// Color bucket for a day, ordered from no activity to the busiest days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    None,
    Low,
    Medium,
    High,
    Highest,
}

/// Lower bounds (exclusive) checked from the top down.
const THRESHOLDS: [(f64, Tier); 4] = [
    (0.75, Tier::Highest),
    (0.50, Tier::High),
    (0.25, Tier::Medium),
    (0.00, Tier::Low),
];

impl Tier {
    pub fn for_ratio(ratio: f64) -> Self {
        THRESHOLDS
            .iter()
            .find(|(limit, _)| ratio > *limit)
            .map(|(_, tier)| *tier)
            .unwrap_or(Tier::None)
    }

    /// Tier of `commits` relative to the busiest day `max`. A zero `max`
    /// puts every day in [`Tier::None`].
    pub fn classify(commits: u32, max: u32) -> Self {
        if max == 0 {
            return Tier::None;
        }
        Self::for_ratio(f64::from(commits) / f64::from(max))
    }

    pub fn color(self) -> &'static str {
        match self {
            Tier::Highest => "#1e6823",
            Tier::High => "#44a340",
            Tier::Medium => "#8cc665",
            Tier::Low => "#d6e685",
            Tier::None => "#eee",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn thresholds_are_strict() {
        assert_eq!(Tier::for_ratio(1.0), Tier::Highest);
        assert_eq!(Tier::for_ratio(0.75), Tier::High);
        assert_eq!(Tier::for_ratio(0.50), Tier::Medium);
        assert_eq!(Tier::for_ratio(0.25), Tier::Low);
        assert_eq!(Tier::for_ratio(0.01), Tier::Low);
        assert_eq!(Tier::for_ratio(0.0), Tier::None);
    }

    #[test]
    fn classify_matches_example_window() {
        assert_eq!(Tier::classify(3, 3), Tier::Highest);
        assert_eq!(Tier::classify(0, 3), Tier::None);
        assert_eq!(Tier::classify(1, 3), Tier::Medium);
        assert_eq!(Tier::classify(1, 4), Tier::Low);
        assert_eq!(Tier::classify(2, 3), Tier::High);
        assert_eq!(Tier::classify(1, 2), Tier::Medium);
    }

    #[test]
    fn zero_max_is_no_activity() {
        assert_eq!(Tier::classify(0, 0), Tier::None);
        assert_eq!(Tier::None.color(), "#eee");
    }

    #[test]
    fn colors_are_distinct() {
        let tiers = [Tier::None, Tier::Low, Tier::Medium, Tier::High, Tier::Highest];
        let colors: std::collections::HashSet<_> = tiers.iter().map(|t| t.color()).collect();
        assert_eq!(colors.len(), tiers.len());
    }

    proptest! {
        #[test]
        fn tier_is_monotonic_in_commits(max in 1u32..500, a in 0u32..500, b in 0u32..500) {
            let (a, b) = (a.min(max), b.min(max));
            if a > b {
                prop_assert!(Tier::classify(a, max) >= Tier::classify(b, max));
            }
        }
    }
}
