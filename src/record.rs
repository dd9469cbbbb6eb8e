use serde::{Deserialize, Serialize};

/// Binary outcome class for a launch.
///
/// Serializes as the numeric class used by the source data (success = 1,
/// failure = 0). Charts that need a human-readable name use `label()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Successful launch (class 1)
    Success,
    /// Failed launch (class 0)
    Failure,
}

impl Outcome {
    /// Converts a raw numeric class (0 or 1) into an Outcome.
    ///
    /// # Returns
    /// Returns `None` for any value other than 0 or 1.
    pub fn from_class(class: u8) -> Option<Self> {
        match class {
            1 => Some(Outcome::Success),
            0 => Some(Outcome::Failure),
            _ => None,
        }
    }

    /// Numeric class value (success = 1, failure = 0).
    pub fn class(self) -> u8 {
        match self {
            Outcome::Success => 1,
            Outcome::Failure => 0,
        }
    }

    /// Human-readable outcome name for chart labels.
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Success => "Success",
            Outcome::Failure => "Failure",
        }
    }

    /// Whether this outcome is a success.
    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }
}

/// A single launch record — one row of the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    /// Launch site identifier (one of a small fixed catalog)
    pub site: String,
    /// Payload mass in kilograms (non-negative)
    pub payload_mass_kg: f64,
    /// Booster version category, used only for chart coloring/grouping
    pub booster_category: String,
    /// Launch outcome class
    pub outcome: Outcome,
}

impl LaunchRecord {
    /// Creates a new LaunchRecord.
    pub fn new(
        site: impl Into<String>,
        payload_mass_kg: f64,
        booster_category: impl Into<String>,
        outcome: Outcome,
    ) -> Self {
        LaunchRecord {
            site: site.into(),
            payload_mass_kg,
            booster_category: booster_category.into(),
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_class() {
        assert_eq!(Outcome::from_class(1), Some(Outcome::Success));
        assert_eq!(Outcome::from_class(0), Some(Outcome::Failure));
        assert_eq!(Outcome::from_class(2), None);
    }

    #[test]
    fn test_outcome_class_round_trip() {
        assert_eq!(Outcome::Success.class(), 1);
        assert_eq!(Outcome::Failure.class(), 0);
    }

    #[test]
    fn test_outcome_labels() {
        assert_eq!(Outcome::Success.label(), "Success");
        assert_eq!(Outcome::Failure.label(), "Failure");
    }

    #[test]
    fn test_launch_record_creation() {
        let record = LaunchRecord::new("CCAFS LC-40", 2500.0, "v1.0", Outcome::Success);
        assert_eq!(record.site, "CCAFS LC-40");
        assert_eq!(record.payload_mass_kg, 2500.0);
        assert!(record.outcome.is_success());
    }
}
