//! End-to-end tests of the rule-based coaching engine, driven through
//! the same entry points the HTTP handlers use.

use strategy_coach::cascade::{Cascade, StepId};
use strategy_coach::coach::{CoachProvider, RuleBasedCoach, compose::PICK_COUNT};
use strategy_coach::error::CoachError;

fn linked_cascade() -> Cascade {
    let mut cascade = Cascade::default();
    cascade.set_answer(
        StepId::WinningAspiration,
        "Win the small-business lending market in regional cities by 2027 with 40% share",
    );
    cascade.set_answer(
        StepId::WhereToPlay,
        "Focus on regional community banks and credit unions that run small-business lending desks",
    );
    cascade.set_answer(
        StepId::HowToWin,
        "We deliver same-day small-business lending decisions in regional cities through our own \
         underwriting models that national banks cannot retrain quickly",
    );
    cascade
}

#[tokio::test]
async fn every_step_yields_a_full_response() {
    let coach = RuleBasedCoach::instant();
    let cascade = linked_cascade();
    for step in StepId::ALL {
        let response = coach.feedback(step, &cascade).await.unwrap();
        assert_eq!(response.step_name, step.title());
        assert!(!response.feedback.is_empty());
        assert_eq!(response.questions.len(), PICK_COUNT);
        assert_eq!(response.suggestions.len(), PICK_COUNT);
    }
}

#[tokio::test]
async fn raw_step_id_dispatch_rejects_unknown_steps() {
    let coach = RuleBasedCoach::instant();
    let err = coach
        .get_feedback("unknownStep", &Cascade::default())
        .await
        .unwrap_err();
    assert!(matches!(err, CoachError::UnknownStep { .. }));
}

#[tokio::test]
async fn how_to_win_affirms_both_upstream_links() {
    let coach = RuleBasedCoach::instant();
    let response = coach
        .feedback(StepId::HowToWin, &linked_cascade())
        .await
        .unwrap();
    assert!(
        response
            .feedback
            .contains("picks up themes from your winning aspiration")
    );
    assert!(
        response
            .feedback
            .contains("also connects to your where-to-play choices")
    );
}

#[tokio::test]
async fn how_to_win_flags_missing_upstream_links() {
    let mut cascade = linked_cascade();
    cascade.set_answer(
        StepId::HowToWin,
        "Proprietary logistics telemetry nobody upstream ever mentioned before anywhere",
    );
    let coach = RuleBasedCoach::instant();
    let response = coach.feedback(StepId::HowToWin, &cascade).await.unwrap();
    assert!(
        response
            .feedback
            .contains("doesn't yet reference your winning aspiration")
    );
    assert!(
        response
            .feedback
            .contains("doesn't clearly connect to your where-to-play")
    );
}

#[tokio::test]
async fn empty_aspiration_still_gets_coached() {
    // Feedback on a blank answer is the caller's prerogative; the coach
    // responds with every remediation clause plus the closing sentence.
    let coach = RuleBasedCoach::instant();
    let response = coach
        .feedback(StepId::WinningAspiration, &Cascade::default())
        .await
        .unwrap();
    assert!(response.feedback.contains("Consider expanding on your vision"));
    assert!(
        response
            .feedback
            .contains("Remember, a strong winning aspiration")
    );
}
