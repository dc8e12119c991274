//! Core Capabilities analyzer. Capabilities exist to deliver the
//! how-to-win on the chosen playing field, so alignment is checked
//! against both of those steps.

use super::signals::{LexicalSignals, overlap};
use super::{StepAnalysis, StepAnalyzer};
use crate::cascade::{Cascade, StepId};

pub struct CoreCapabilities;

const QUESTIONS: [&str; 5] = [
    "What capabilities are critical to winning the way you've chosen?",
    "Which of these capabilities do you already have, and which must you build?",
    "What would it cost to close the biggest capability gap?",
    "Which capability, if missing, would sink the strategy?",
    "Are any of the listed capabilities merely nice to have?",
];

const SUGGESTIONS: [&str; 5] = [
    "Map required skills",
    "Identify capability gaps",
    "Rank capabilities by how directly they support your how-to-win",
    "Separate existing strengths from capabilities still to be built",
    "Drop capabilities that don't serve the chosen advantage",
];

pub const ADVANTAGE_ALIGNED: &str = "They reference your how-to-win strategy, which is exactly \
     what capabilities are for. ";
pub const ADVANTAGE_MISALIGNED: &str = "They don't yet reference your how-to-win strategy. \
     Capabilities should exist to deliver the advantage you chose. ";
pub const PLAYING_FIELD_ALIGNED: &str = "They also speak to where you've chosen to play. ";
pub const PLAYING_FIELD_MISALIGNED: &str = "They don't clearly relate to where you've chosen to \
     play. Check that each capability matters on your chosen playing field. ";

impl StepAnalyzer for CoreCapabilities {
    fn step(&self) -> StepId {
        StepId::CoreCapabilities
    }

    fn analyze(&self, cascade: &Cascade) -> StepAnalysis {
        let input = cascade.answer(StepId::CoreCapabilities);
        let advantage = cascade.answer(StepId::HowToWin);
        let playing_field = cascade.answer(StepId::WhereToPlay);
        let signals = LexicalSignals::compute(input);

        let mut feedback = String::from("I've reviewed your core capabilities. ");
        if overlap(advantage, input) > 0 {
            feedback.push_str(ADVANTAGE_ALIGNED);
        } else {
            feedback.push_str(ADVANTAGE_MISALIGNED);
        }
        if overlap(playing_field, input) > 0 {
            feedback.push_str(PLAYING_FIELD_ALIGNED);
        } else {
            feedback.push_str(PLAYING_FIELD_MISALIGNED);
        }
        if signals.length < 100 {
            feedback.push_str(
                "Describe each capability in enough detail that someone could tell whether you have it today. ",
            );
        }
        if !signals.has_numeric_metric {
            feedback.push_str(
                "Consider quantifying capability gaps, even roughly, so you know what to build first. ",
            );
        }
        feedback.push_str(
            "Remember, core capabilities are the handful of things you must do at a world-class \
             level for the strategy to work. A long list usually means no real choice has been made.",
        );

        StepAnalysis {
            feedback,
            questions: &QUESTIONS,
            suggestions: &SUGGESTIONS,
        }
    }
}
