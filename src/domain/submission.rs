// SPDX-License-Identifier: MPL-2.0
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    Pending,
    Graded,
    Late,
}

impl SubmissionStatus {
    pub const ALL: [SubmissionStatus; 3] = [
        SubmissionStatus::Pending,
        SubmissionStatus::Graded,
        SubmissionStatus::Late,
    ];

    pub fn i18n_key(&self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "submission-status-pending",
            SubmissionStatus::Graded => "submission-status-graded",
            SubmissionStatus::Late => "submission-status-late",
        }
    }
}

/// A student's answer to one question, paired with the prompt for display.
#[derive(Debug, Clone)]
pub struct SubmissionAnswer {
    pub prompt: String,
    pub response: String,
}

/// One student submission for an activity, as surfaced in the corrections
/// queue and the submission detail screen.
#[derive(Debug, Clone)]
pub struct Submission {
    pub id: SubmissionId,
    pub student_name: String,
    pub activity_title: String,
    pub submitted_at: DateTime<Utc>,
    pub status: SubmissionStatus,
    pub score: Option<u32>,
    pub max_score: u32,
    /// Score suggested by the AI pre-grader, if it has run for this submission.
    pub ai_suggested_score: Option<u32>,
    pub ai_rationale: Option<String>,
    pub answers: Vec<SubmissionAnswer>,
}

impl Submission {
    pub fn is_pending(&self) -> bool {
        matches!(self.status, SubmissionStatus::Pending | SubmissionStatus::Late)
    }
}
