//! Winning Aspiration analyzer.

use super::signals::LexicalSignals;
use super::{StepAnalysis, StepAnalyzer};
use crate::cascade::{Cascade, StepId};

pub struct WinningAspiration;

const QUESTIONS: [&str; 5] = [
    "Is this aspiration bold enough to inspire your team and differentiate you from competitors?",
    "What would success look like in concrete, measurable terms?",
    "How does this aspiration connect to a genuine customer need or market opportunity?",
    "What assumptions are you making about the market or your capabilities?",
    "If you achieved this aspiration, what would be fundamentally different about your organization?",
];

const SUGGESTIONS: [&str; 5] = [
    "Consider adding specific timeframes or metrics",
    "Make it more customer-focused",
    "Clarify the unique value you'll create",
    "Ensure it's ambitious but achievable",
    "Connect to your organization's core purpose",
];

pub const CLOSING: &str = "Remember, a strong winning aspiration should inspire action while \
     being specific enough to guide strategic decisions. What matters most is that it represents \
     a meaningful and achievable stretch for your organization.";

impl StepAnalyzer for WinningAspiration {
    fn step(&self) -> StepId {
        StepId::WinningAspiration
    }

    fn analyze(&self, cascade: &Cascade) -> StepAnalysis {
        let input = cascade.answer(StepId::WinningAspiration);
        let signals = LexicalSignals::compute(input);

        let mut feedback = String::from("I've reviewed your winning aspiration. ");
        if signals.length < 100 {
            feedback.push_str(
                "Consider expanding on your vision to provide more clarity about what success looks like. ",
            );
        }
        if !signals.has_customer_focus {
            feedback.push_str(
                "Think about how this aspiration directly benefits your customers or creates value for them. ",
            );
        }
        if !signals.has_timeframe {
            feedback.push_str(
                "Adding a timeframe can help make your aspiration more concrete and actionable. ",
            );
        }
        if !signals.has_numeric_metric {
            feedback.push_str(
                "Consider including measurable outcomes to make your aspiration more specific. ",
            );
        }
        feedback.push_str(CLOSING);

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
    fn closing_sentence_present_even_for_empty_input() {
        let analysis = WinningAspiration.analyze(&Cascade::default());
        assert!(analysis.feedback.contains("Remember, a strong winning aspiration"));
    }

    #[test]
    fn complete_aspiration_skips_remediation() {
        let mut cascade = Cascade::default();
        cascade.set_answer(
            StepId::WinningAspiration,
            "Serve 10000 small-business customers by 2028 with instant lending decisions, \
             growing originations to $50M and keeping approval under five minutes end to end.",
        );
        let analysis = WinningAspiration.analyze(&cascade);
        assert!(!analysis.feedback.contains("Consider expanding on your vision"));
        assert!(!analysis.feedback.contains("Adding a timeframe"));
        assert!(!analysis.feedback.contains("measurable outcomes"));
    }
}
