//! How to Win analyzer. Checks alignment against both the winning
//! aspiration and the where-to-play choices.

use super::signals::{LexicalSignals, overlap};
use super::{StepAnalysis, StepAnalyzer};
use crate::cascade::{Cascade, StepId};

pub struct HowToWin;

const QUESTIONS: [&str; 5] = [
    "What makes you different?",
    "Why will customers choose you over the alternatives?",
    "What can you do that competitors cannot easily copy?",
    "Does your advantage rest on cost, differentiation, or both?",
    "How will you sustain this advantage over time?",
];

const SUGGESTIONS: [&str; 5] = [
    "Identify unique strengths",
    "Consider competitive positioning",
    "Describe the mechanism behind your advantage",
    "Link the advantage to a measurable customer outcome",
    "Stress-test the advantage against your strongest competitor",
];

pub const ASPIRATION_ALIGNED: &str = "It picks up themes from your winning aspiration, which \
     suggests the cascade is holding together. ";
pub const ASPIRATION_MISALIGNED: &str = "It doesn't yet reference your winning aspiration. Make \
     sure the advantage actually serves the ambition you set. ";
pub const PLAYING_FIELD_ALIGNED: &str = "It also connects to your where-to-play choices. ";
pub const PLAYING_FIELD_MISALIGNED: &str = "It doesn't clearly connect to your where-to-play \
     choices. An advantage only counts on the playing field you picked. ";

impl StepAnalyzer for HowToWin {
    fn step(&self) -> StepId {
        StepId::HowToWin
    }

    fn analyze(&self, cascade: &Cascade) -> StepAnalysis {
        let input = cascade.answer(StepId::HowToWin);
        let aspiration = cascade.answer(StepId::WinningAspiration);
        let playing_field = cascade.answer(StepId::WhereToPlay);
        let signals = LexicalSignals::compute(input);

        let mut feedback = String::from("I've reviewed your how-to-win strategy. ");
        if overlap(aspiration, input) > 0 {
            feedback.push_str(ASPIRATION_ALIGNED);
        } else {
            feedback.push_str(ASPIRATION_MISALIGNED);
        }
        if overlap(playing_field, input) > 0 {
            feedback.push_str(PLAYING_FIELD_ALIGNED);
        } else {
            feedback.push_str(PLAYING_FIELD_MISALIGNED);
        }
        if signals.has_generic_advantage_term {
            feedback.push_str(
                "Terms like 'better' or 'cheaper' describe generic advantages. Spell out the specific mechanism that makes you hard to copy. ",
            );
        }
        if signals.length < 80 {
            feedback.push_str("Expand on how the advantage works in practice. ");
        }
        if !signals.has_customer_focus {
            feedback.push_str(
                "Tie the advantage to a customer outcome: why would they choose you because of it? ",
            );
        }
        feedback.push_str(
            "Remember, a real how-to-win is a choice competitors cannot easily imitate. If \
             everyone in your market could write the same sentence, keep sharpening it.",
        );

        StepAnalysis {
            feedback,
            questions: &QUESTIONS,
            suggestions: &SUGGESTIONS,
        }
    }
}
