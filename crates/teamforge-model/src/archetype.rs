//! Named weighting profiles over the three team objectives.

use serde::{Deserialize, Serialize};

/// Relative weights of the three fitness sub-metrics.
///
/// The upstream archetype generator is instructed to make these sum to 1.0,
/// but that is intentionally not enforced here: the reference pipeline
/// accepted arbitrary weightings, and a profile that over- or under-weights
/// the total only rescales fitness within that archetype's independent run.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Weightings {
    /// Weight for the mean individual quality of the team.
    pub individual_quality: f64,
    /// Weight for intra-team synergy (specialists + balanced coverage).
    pub team_synergy: f64,
    /// Weight for diversity of scores and skills across the team.
    pub team_diversity: f64,
}

/// A named team-building philosophy with its objective weightings.
///
/// `name` keys the optimization results; `description` is opaque text
/// carried through to output unchanged.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Archetype {
    /// Unique archetype name, e.g. `"Core"` or `"Balance"`.
    pub name: String,
    /// Free-form description of the archetype's philosophy.
    pub description: String,
    /// Objective weightings applied during fitness evaluation.
    pub weightings: Weightings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_generator_output_shape() {
        let json = r#"{
            "name": "Core",
            "description": "High individual performers first.",
            "weightings": {
                "individual_quality": 0.6,
                "team_synergy": 0.2,
                "team_diversity": 0.2
            }
        }"#;
        let archetype: Archetype = serde_json::from_str(json).unwrap();
        assert_eq!(archetype.name, "Core");
        assert_eq!(archetype.weightings.individual_quality, 0.6);
    }

    #[test]
    fn weightings_are_not_required_to_sum_to_one() {
        let json = r#"{"individual_quality": 2.0, "team_synergy": 0.0, "team_diversity": 0.0}"#;
        let w: Weightings = serde_json::from_str(json).unwrap();
        assert_eq!(w.individual_quality, 2.0);
    }
}
