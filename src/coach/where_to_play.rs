//! Where to Play analyzer. First of the cross-step analyzers: its
//! alignment clause compares vocabulary with the winning aspiration.

use super::signals::{LexicalSignals, overlap};
use super::{StepAnalysis, StepAnalyzer};
use crate::cascade::{Cascade, StepId};

pub struct WhereToPlay;

const QUESTIONS: [&str; 5] = [
    "Where will you compete, and where will you deliberately not compete?",
    "Who are your target customers, and who are you choosing not to serve?",
    "Which geographies, channels, and product categories fall inside your boundaries?",
    "Is this playing field large enough to support your winning aspiration?",
    "Which competitors will you face directly in this arena?",
];

const SUGGESTIONS: [&str; 5] = [
    "Define market segments",
    "Consider geographic boundaries",
    "List the markets you are explicitly excluding",
    "Check the playing field against your winning aspiration",
    "Choose distribution channels that fit your segments",
];

pub const ALIGNED: &str = "Your choices here build on the language of your winning aspiration, \
     which is a good sign of alignment. ";
pub const MISALIGNED: &str = "Your choices here don't yet echo your winning aspiration. Revisit \
     both and check that they point at the same ambition. ";

impl StepAnalyzer for WhereToPlay {
    fn step(&self) -> StepId {
        StepId::WhereToPlay
    }

    fn analyze(&self, cascade: &Cascade) -> StepAnalysis {
        let input = cascade.answer(StepId::WhereToPlay);
        let aspiration = cascade.answer(StepId::WinningAspiration);
        let signals = LexicalSignals::compute(input);

        let mut feedback = String::from("I've reviewed your where-to-play choices. ");
        if overlap(aspiration, input) > 0 {
            feedback.push_str(ALIGNED);
        } else {
            feedback.push_str(MISALIGNED);
        }
        if signals.length < 100 {
            feedback.push_str(
                "Consider describing your chosen markets and segments in more detail so the boundaries are unambiguous. ",
            );
        }
        if !signals.has_boundary_language {
            feedback.push_str(
                "Use boundary-setting language: say what you will focus on and, just as importantly, what you will exclude. ",
            );
        }
        if !signals.has_customer_focus {
            feedback.push_str("Name the specific customers or segments you are choosing to serve. ");
        }
        feedback.push_str(
            "Remember, where-to-play choices are as much about what you won't do as what you \
             will. Clear boundaries are what make the rest of the cascade coherent.",
        );

        StepAnalysis {
            feedback,
            questions: &QUESTIONS,
            suggestions: &SUGGESTIONS,
        }
    }
}
