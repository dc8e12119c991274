//! Coaching module: per-step analyzers, response composition, and the
//! provider seam callers dispatch through.
//!
//! The analyzers are deterministic, dependency-free heuristics; the
//! only nondeterminism in a response is the sampled question and
//! suggestion pools and the timestamp.

pub mod aspiration;
pub mod capabilities;
pub mod compose;
pub mod how_to_win;
pub mod signals;
pub mod systems;
pub mod where_to_play;

use crate::cascade::{Cascade, CoachResponse, StepId};
use crate::config::CoachConfig;
use crate::error::Result;
use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;

/// Output of one step analyzer: the assembled prose plus that step's
/// fixed question and suggestion pools.
pub struct StepAnalysis {
    pub feedback: String,
    pub questions: &'static [&'static str; 5],
    pub suggestions: &'static [&'static str; 5],
}

/// One analyzer per cascade step. Pure over the answer set; cross-step
/// variants read earlier answers from the same snapshot.
pub trait StepAnalyzer: Send + Sync {
    fn step(&self) -> StepId;
    fn analyze(&self, cascade: &Cascade) -> StepAnalysis;
}

/// The seam between callers and whatever produces coaching feedback.
/// [`RuleBasedCoach`] is the shipped implementation; a model-backed
/// provider can be swapped in without touching callers.
///
/// Providers do NOT validate input. Callers must gate with
/// [`crate::validate::validate`] first, or they will receive feedback
/// on empty or invalid answers.
#[async_trait]
pub trait CoachProvider: Send + Sync {
    async fn feedback(&self, step: StepId, cascade: &Cascade) -> Result<CoachResponse>;
}

/// Rule-based coach: dispatches strictly by step to the matching
/// analyzer and composes the response. Stateless; every call takes the
/// answer-set snapshot and returns a brand-new response.
pub struct RuleBasedCoach {
    /// Simulated processing latency range in milliseconds, standing in
    /// for the round trip a real reasoning backend would take. `None`
    /// disables the delay (tests, batch callers).
    latency_ms: Option<(u64, u64)>,
}

impl RuleBasedCoach {
    pub fn new(config: &CoachConfig) -> Self {
        let latency_ms = config
            .simulate_latency
            .then_some((config.latency_min_ms, config.latency_max_ms));
        Self { latency_ms }
    }

    /// A coach with the simulated latency disabled.
    pub fn instant() -> Self {
        Self { latency_ms: None }
    }

    fn analyzer(step: StepId) -> &'static dyn StepAnalyzer {
        match step {
            StepId::WinningAspiration => &aspiration::WinningAspiration,
            StepId::WhereToPlay => &where_to_play::WhereToPlay,
            StepId::HowToWin => &how_to_win::HowToWin,
            StepId::CoreCapabilities => &capabilities::CoreCapabilities,
            StepId::ManagementSystems => &systems::ManagementSystems,
        }
    }

    /// Entry point for callers holding a raw step identifier. Fails
    /// with [`crate::error::CoachError::UnknownStep`] before any
    /// analysis runs, so no partial response is produced.
    pub async fn get_feedback(&self, step_id: &str, cascade: &Cascade) -> Result<CoachResponse> {
        let step = StepId::parse(step_id)?;
        self.feedback(step, cascade).await
    }
}

#[async_trait]
impl CoachProvider for RuleBasedCoach {
    async fn feedback(&self, step: StepId, cascade: &Cascade) -> Result<CoachResponse> {
        if let Some((lo, hi)) = self.latency_ms {
            let ms = if hi > lo {
                rand::thread_rng().gen_range(lo..=hi)
            } else {
                lo
            };
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
        tracing::debug!(step = %step, "running rule-based analysis");
        let analysis = Self::analyzer(step).analyze(cascade);
        Ok(compose::compose(step.title(), analysis))
    }
}
