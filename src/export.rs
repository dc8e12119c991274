//! Plain-text export of a finished cascade. A pure formatter: the
//! answer set and any persisted coach comments go in, a printable
//! document comes out. Rendering to richer formats is a downstream
//! concern.

use crate::cascade::{Cascade, CoachComment, StepId};
use chrono::Utc;

const RULE: &str = "============================================================";

pub fn render_document(name: &str, cascade: &Cascade, comments: &[CoachComment]) -> String {
    let mut doc = String::new();
    doc.push_str(RULE);
    doc.push('\n');
    doc.push_str("STRATEGY CASCADE\n");
    doc.push_str(name);
    doc.push('\n');
    doc.push_str(&format!("Generated {}\n", Utc::now().format("%Y-%m-%d")));
    doc.push_str(RULE);
    doc.push_str("\n\n");

    for (idx, step) in StepId::ALL.iter().enumerate() {
        doc.push_str(&format!("{}. {}\n", idx + 1, step.title()));
        let answer = cascade.answer(*step).trim();
        if answer.is_empty() {
            doc.push_str("   (not completed)\n\n");
        } else {
            doc.push_str(&format!("   {}\n\n", answer));
        }
    }

    if !comments.is_empty() {
        doc.push_str("COACH NOTES\n");
        doc.push_str("-----------\n");
        for comment in comments {
            doc.push_str(&format!("[{}] {}\n", comment.step, comment.message));
        }
    }

    doc
}
