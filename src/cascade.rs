//! Domain model for the strategy cascade: the five steps, the answer
//! set, and the records exchanged with callers.

use crate::error::CoachError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One of the five fixed stages of the cascade, in wizard order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StepId {
    WinningAspiration,
    WhereToPlay,
    HowToWin,
    CoreCapabilities,
    ManagementSystems,
}

impl StepId {
    /// All steps in wizard order. Later steps may reference earlier
    /// answers, so the order is meaningful.
    pub const ALL: [StepId; 5] = [
        StepId::WinningAspiration,
        StepId::WhereToPlay,
        StepId::HowToWin,
        StepId::CoreCapabilities,
        StepId::ManagementSystems,
    ];

    /// Wire identifier, matching the JSON field name of the answer.
    pub fn key(&self) -> &'static str {
        match self {
            StepId::WinningAspiration => "winningAspiration",
            StepId::WhereToPlay => "whereToPlay",
            StepId::HowToWin => "howToWin",
            StepId::CoreCapabilities => "coreCapabilities",
            StepId::ManagementSystems => "managementSystems",
        }
    }

    /// Human-readable step title.
    pub fn title(&self) -> &'static str {
        match self {
            StepId::WinningAspiration => "Winning Aspiration",
            StepId::WhereToPlay => "Where to Play",
            StepId::HowToWin => "How to Win",
            StepId::CoreCapabilities => "Core Capabilities",
            StepId::ManagementSystems => "Management Systems",
        }
    }

    /// Parse a wire identifier. Anything outside the five recognized
    /// values is a contract error, not user input to be tolerated.
    pub fn parse(s: &str) -> Result<Self, CoachError> {
        match s {
            "winningAspiration" => Ok(StepId::WinningAspiration),
            "whereToPlay" => Ok(StepId::WhereToPlay),
            "howToWin" => Ok(StepId::HowToWin),
            "coreCapabilities" => Ok(StepId::CoreCapabilities),
            "managementSystems" => Ok(StepId::ManagementSystems),
            other => Err(CoachError::UnknownStep {
                step: other.to_string(),
            }),
        }
    }
}

impl std::str::FromStr for StepId {
    type Err = CoachError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StepId::parse(s)
    }
}

impl std::fmt::Display for StepId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// The full answer set for one strategy exercise. All five answers are
/// always present; an unanswered step is the empty string, never null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Cascade {
    pub winning_aspiration: String,
    pub where_to_play: String,
    pub how_to_win: String,
    pub core_capabilities: String,
    pub management_systems: String,
}

impl Cascade {
    pub fn answer(&self, step: StepId) -> &str {
        match step {
            StepId::WinningAspiration => &self.winning_aspiration,
            StepId::WhereToPlay => &self.where_to_play,
            StepId::HowToWin => &self.how_to_win,
            StepId::CoreCapabilities => &self.core_capabilities,
            StepId::ManagementSystems => &self.management_systems,
        }
    }

    pub fn set_answer(&mut self, step: StepId, text: impl Into<String>) {
        let slot = match step {
            StepId::WinningAspiration => &mut self.winning_aspiration,
            StepId::WhereToPlay => &mut self.where_to_play,
            StepId::HowToWin => &mut self.how_to_win,
            StepId::CoreCapabilities => &mut self.core_capabilities,
            StepId::ManagementSystems => &mut self.management_systems,
        };
        *slot = text.into();
    }

    /// Number of steps with a non-blank answer.
    pub fn completed_count(&self) -> usize {
        StepId::ALL
            .iter()
            .filter(|step| !self.answer(**step).trim().is_empty())
            .count()
    }
}

/// The structured critique returned for one coaching request.
/// Immutable once created; callers typically prepend it to a
/// newest-first history list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachResponse {
    pub step_name: String,
    pub feedback: String,
    pub questions: Vec<String>,
    pub suggestions: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

/// A persisted coach remark attached to an exported document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachComment {
    pub step: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// A stored cascade, keyed by id and scoped to its owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CascadeRecord {
    pub id: Uuid,
    pub owner: String,
    pub name: String,
    pub cascade: Cascade,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Outcome of validating one answer. Empty errors means valid; the
/// errors are user-facing reasons, returned as data rather than thrown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_parse_round_trips_all_keys() {
        for step in StepId::ALL {
            assert_eq!(StepId::parse(step.key()).unwrap(), step);
        }
    }

    #[test]
    fn step_parse_rejects_unknown() {
        let err = StepId::parse("unknownStep").unwrap_err();
        assert!(matches!(err, CoachError::UnknownStep { .. }));
    }

    #[test]
    fn cascade_json_uses_camel_case_keys() {
        let mut cascade = Cascade::default();
        cascade.set_answer(StepId::WinningAspiration, "win");
        let json = serde_json::to_value(&cascade).unwrap();
        assert_eq!(json["winningAspiration"], "win");
        assert_eq!(json["whereToPlay"], "");
    }

    #[test]
    fn completed_count_ignores_blank_answers() {
        let mut cascade = Cascade::default();
        assert_eq!(cascade.completed_count(), 0);
        cascade.set_answer(StepId::WinningAspiration, "something");
        cascade.set_answer(StepId::HowToWin, "   ");
        assert_eq!(cascade.completed_count(), 1);
    }
}
