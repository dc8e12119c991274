//! Management Systems analyzer. The last step looks back at the whole
//! cascade: once at least three of the four prior answers exist, its
//! alignment clause compares against their combined vocabulary.

use super::signals::{LexicalSignals, overlap};
use super::{StepAnalysis, StepAnalyzer};
use crate::cascade::{Cascade, StepId};

pub struct ManagementSystems;

/// Prior answers required before the combined overlap check runs.
pub const ALIGNMENT_THRESHOLD: usize = 3;

const QUESTIONS: [&str; 5] = [
    "What systems enable success?",
    "How will you measure progress against your aspiration?",
    "What review cadence will keep the strategy honest?",
    "Which existing processes conflict with the new strategy?",
    "Who owns each measure, and what happens when it goes red?",
];

const SUGGESTIONS: [&str; 5] = [
    "Design measurement systems",
    "Plan organizational support",
    "Set a regular strategy review cadence",
    "Assign an owner to every key metric",
    "Retire reports that no longer serve the strategy",
];

pub const ALIGNED: &str = "Your systems reference earlier choices in the cascade, which suggests \
     they'll reinforce the strategy rather than sit beside it. ";
pub const MISALIGNED: &str = "Your systems don't yet reference the rest of the cascade. Each \
     system should exist to support a specific earlier choice. ";

impl StepAnalyzer for ManagementSystems {
    fn step(&self) -> StepId {
        StepId::ManagementSystems
    }

    fn analyze(&self, cascade: &Cascade) -> StepAnalysis {
        let input = cascade.answer(StepId::ManagementSystems);
        let signals = LexicalSignals::compute(input);

        let prior = [
            cascade.answer(StepId::WinningAspiration),
            cascade.answer(StepId::WhereToPlay),
            cascade.answer(StepId::HowToWin),
            cascade.answer(StepId::CoreCapabilities),
        ];
        let completed = prior.iter().filter(|a| !a.trim().is_empty()).count();

        let mut feedback = String::from("I've reviewed your management systems. ");
        if completed >= ALIGNMENT_THRESHOLD {
            let combined = prior.join(" ");
            if overlap(&combined, input) > 0 {
                feedback.push_str(ALIGNED);
            } else {
                feedback.push_str(MISALIGNED);
            }
        }
        if signals.length < 100 {
            feedback.push_str(
                "Describe the specific reviews, dashboards, or processes you'll rely on, not just their intent. ",
            );
        }
        if !signals.has_numeric_metric {
            feedback.push_str(
                "Management systems need measures. Add the metrics each system will track. ",
            );
        }
        if !signals.has_timeframe {
            feedback.push_str(
                "State the cadence: how often will each review or measurement actually happen? ",
            );
        }
        feedback.push_str(
            "Remember, management systems are what keep a strategy alive after the planning \
             workshop ends. If nothing in your calendar or dashboards changes, the cascade stays \
             on paper.",
        );

        StepAnalysis {
            feedback,
            questions: &QUESTIONS,
            suggestions: &SUGGESTIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alignment_clause_skipped_below_threshold() {
        let mut cascade = Cascade::default();
        cascade.set_answer(StepId::WinningAspiration, "grow lending volume");
        cascade.set_answer(StepId::ManagementSystems, "weekly lending review");
        let analysis = ManagementSystems.analyze(&cascade);
        assert!(!analysis.feedback.contains("reference earlier choices"));
        assert!(!analysis.feedback.contains("don't yet reference the rest"));
    }

    #[test]
    fn alignment_clause_runs_at_threshold() {
        let mut cascade = Cascade::default();
        cascade.set_answer(StepId::WinningAspiration, "grow lending volume");
        cascade.set_answer(StepId::WhereToPlay, "small businesses needing lending");
        cascade.set_answer(StepId::HowToWin, "instant lending decisions");
        cascade.set_answer(StepId::ManagementSystems, "weekly lending pipeline review");
        let analysis = ManagementSystems.analyze(&cascade);
        assert!(analysis.feedback.contains("reference earlier choices"));
    }
}
