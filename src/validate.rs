//! Structural validation of one answer. This is the gate for both step
//! advancement and feedback requests; the two call sites must share the
//! same thresholds and rule set, so they both come through here.

use crate::cascade::{StepId, ValidationReport};
use crate::coach::signals::LexicalSignals;

/// Fixed upper bound on answer length, matching the wizard's textarea.
pub const MAX_CHARS: usize = 500;

/// Validate one answer against the length gates and the step's
/// heuristic. Rules are evaluated independently and all triggered
/// errors are appended, in a fixed order: length-low, length-high,
/// heuristic. An empty report is the valid terminal state.
pub fn validate(step: StepId, text: &str, min_chars: usize, max_chars: usize) -> ValidationReport {
    let mut errors = Vec::new();
    let trimmed_len = text.trim().chars().count();

    if trimmed_len < min_chars {
        errors.push(format!(
            "Please provide at least {min_chars} characters for sufficient detail."
        ));
    }
    if trimmed_len > max_chars {
        errors.push(
            "Try to keep your response under 500 characters for clarity and focus.".to_string(),
        );
    }

    // Heuristics use the raw (untrimmed) length, as the wizard does.
    let signals = LexicalSignals::compute(text);
    match step {
        StepId::WinningAspiration if signals.has_vague_term => {
            errors.push(
                "Avoid vague terms like 'best' or 'leading'. Be specific about what you want to achieve."
                    .to_string(),
            );
        }
        StepId::WhereToPlay if signals.has_broad_term && signals.length < 100 => {
            errors.push(
                "Avoid being too broad. Be specific about your target segments and markets."
                    .to_string(),
            );
        }
        StepId::HowToWin if signals.has_generic_advantage_term && signals.length < 80 => {
            errors.push(
                "Avoid generic advantages. Be specific about what makes you uniquely competitive."
                    .to_string(),
            );
        }
        _ => {}
    }

    ValidationReport { errors }
}
