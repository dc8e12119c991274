//! Composition of a coach response from analyzer output.

use super::StepAnalysis;
use crate::cascade::CoachResponse;
use chrono::Utc;
use rand::seq::SliceRandom;

/// How many questions and suggestions a response carries at most.
pub const PICK_COUNT: usize = 3;

/// Wrap analyzer prose with a random sample of the step's canned
/// question and suggestion pools. Sampling is without replacement and
/// the order is shuffled per call; these prompts are supplementary, so
/// reproducibility is intentionally not a goal.
pub fn compose(step_name: &str, analysis: StepAnalysis) -> CoachResponse {
    CoachResponse {
        step_name: step_name.to_string(),
        feedback: analysis.feedback,
        questions: sample(analysis.questions, PICK_COUNT),
        suggestions: sample(analysis.suggestions, PICK_COUNT),
        timestamp: Utc::now(),
    }
}

fn sample(pool: &[&str], count: usize) -> Vec<String> {
    let mut items: Vec<&str> = pool.to_vec();
    items.shuffle(&mut rand::thread_rng());
    items.truncate(count);
    items.into_iter().map(str::to_string).collect()
}
