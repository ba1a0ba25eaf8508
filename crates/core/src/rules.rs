//! Typed badge criteria and challenge objectives.
//!
//! The original data model stored these as open key/value bags with no
//! evaluator anywhere in the codebase. They are represented here as a tagged
//! union so the storage and wire shape is pinned down; awarding logic remains
//! deliberately unimplemented.

use serde::{Deserialize, Serialize};

/// A progress rule attached to a badge (`criteria`) or challenge (`objective`).
///
/// Serialized as `{"rule": "...", ...fields}` and stored as JSONB.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum ProgressRule {
    /// Total visit count reaches `count`.
    VisitCountAtLeast { count: u32 },
    /// Visits to `count` distinct islands of the given type.
    IslandTypeCountAtLeast { island_type: String, count: u32 },
    /// Visits to `count` distinct islands in the given atoll.
    AtollCountAtLeast { atoll: String, count: u32 },
}

/// What completing a challenge grants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeReward {
    /// Name of the badge awarded on completion, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    pub points: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visit_count_rule_round_trips() {
        let rule = ProgressRule::VisitCountAtLeast { count: 5 };
        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(json["rule"], "visit_count_at_least");
        assert_eq!(json["count"], 5);

        let parsed: ProgressRule = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, rule);
    }

    #[test]
    fn island_type_rule_carries_type() {
        let rule = ProgressRule::IslandTypeCountAtLeast {
            island_type: "resort".into(),
            count: 3,
        };
        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(json["rule"], "island_type_count_at_least");
        assert_eq!(json["island_type"], "resort");
    }

    #[test]
    fn unknown_rule_tag_is_rejected() {
        let json = serde_json::json!({"rule": "teleport_count", "count": 1});
        assert!(serde_json::from_value::<ProgressRule>(json).is_err());
    }

    #[test]
    fn reward_omits_absent_badge() {
        let reward = ChallengeReward {
            badge: None,
            points: 100,
        };
        let json = serde_json::to_value(&reward).unwrap();
        assert!(json.get("badge").is_none());
        assert_eq!(json["points"], 100);
    }
}
