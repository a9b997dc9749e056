// SPDX-License-Identifier: MPL-2.0
//! Static fixture data for every screen.
//!
//! Each function hands out a fresh owned copy so screens can mutate their
//! local state freely without sharing structure.

use crate::domain::{
    Activity, ActivityId, AnalyticsSnapshot, ClassPerformance, Difficulty, Insight, InsightId,
    InsightSeverity, InstitutionProfile, Question, QuestionKind, ReportId, ReportKind,
    ReportStatus, ReportSummary, Submission, SubmissionAnswer, SubmissionId, SubmissionStatus,
    TrendPoint, UserAccount, UserId, UserRole, UserStatus,
};
use chrono::{NaiveDate, TimeZone, Utc};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
}

fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

pub fn activities() -> Vec<Activity> {
    let mut fractions = vec![
        Question::with_prompt(QuestionKind::MultipleChoice, "What is 1/2 + 1/4?"),
        Question::with_prompt(QuestionKind::TrueFalse, "3/6 is equivalent to 1/2."),
        Question::with_prompt(QuestionKind::ShortAnswer, "Simplify 12/18."),
        Question::with_prompt(
            QuestionKind::Problem,
            "A recipe needs 3/4 cup of flour. How much for half the recipe?",
        ),
    ];
    fractions[0].options = vec!["1/6".into(), "2/6".into(), "3/4".into(), "2/4".into()];
    fractions[0].correct_answer = "C".into();
    fractions[1].correct_answer = "true".into();
    fractions[1].difficulty = Difficulty::Easy;
    fractions[2].correct_answer = "2/3".into();
    fractions[3].points = 3;
    fractions[3].difficulty = Difficulty::Hard;

    let mut revolutions = vec![
        Question::with_prompt(
            QuestionKind::MultipleChoice,
            "In which year did the French Revolution begin?",
        ),
        Question::with_prompt(
            QuestionKind::Essay,
            "Compare the causes of the French and American revolutions.",
        ),
    ];
    revolutions[0].options = vec!["1776".into(), "1789".into(), "1798".into(), "1815".into()];
    revolutions[0].correct_answer = "B".into();
    revolutions[1].points = 5;
    revolutions[1].difficulty = Difficulty::Hard;

    vec![
        Activity {
            id: ActivityId(1),
            title: "Fractions quiz".into(),
            subject: "Mathematics".into(),
            due_date: date(2025, 6, 2),
            questions: fractions,
        },
        Activity {
            id: ActivityId(2),
            title: "Age of Revolutions essay".into(),
            subject: "History".into(),
            due_date: date(2025, 6, 9),
            questions: revolutions,
        },
    ]
}

pub fn submissions() -> Vec<Submission> {
    vec![
        Submission {
            id: SubmissionId(1),
            student_name: "Lina Moreau".into(),
            activity_title: "Fractions quiz".into(),
            submitted_at: datetime(2025, 6, 1, 16, 42),
            status: SubmissionStatus::Pending,
            score: None,
            max_score: 6,
            ai_suggested_score: Some(5),
            ai_rationale: Some(
                "All answers correct except the recipe problem, where the \
                 halving step is missing."
                    .into(),
            ),
            answers: vec![
                SubmissionAnswer {
                    prompt: "What is 1/2 + 1/4?".into(),
                    response: "C".into(),
                },
                SubmissionAnswer {
                    prompt: "3/6 is equivalent to 1/2.".into(),
                    response: "true".into(),
                },
                SubmissionAnswer {
                    prompt: "Simplify 12/18.".into(),
                    response: "2/3".into(),
                },
                SubmissionAnswer {
                    prompt: "A recipe needs 3/4 cup of flour. How much for half the recipe?"
                        .into(),
                    response: "3/4 cup".into(),
                },
            ],
        },
        Submission {
            id: SubmissionId(2),
            student_name: "Omar Haddad".into(),
            activity_title: "Fractions quiz".into(),
            submitted_at: datetime(2025, 6, 2, 9, 15),
            status: SubmissionStatus::Graded,
            score: Some(6),
            max_score: 6,
            ai_suggested_score: Some(6),
            ai_rationale: None,
            answers: vec![
                SubmissionAnswer {
                    prompt: "What is 1/2 + 1/4?".into(),
                    response: "C".into(),
                },
                SubmissionAnswer {
                    prompt: "3/6 is equivalent to 1/2.".into(),
                    response: "true".into(),
                },
                SubmissionAnswer {
                    prompt: "Simplify 12/18.".into(),
                    response: "2/3".into(),
                },
                SubmissionAnswer {
                    prompt: "A recipe needs 3/4 cup of flour. How much for half the recipe?"
                        .into(),
                    response: "3/8 cup".into(),
                },
            ],
        },
        Submission {
            id: SubmissionId(3),
            student_name: "Sofia Petrova".into(),
            activity_title: "Age of Revolutions essay".into(),
            submitted_at: datetime(2025, 6, 10, 22, 3),
            status: SubmissionStatus::Late,
            score: None,
            max_score: 6,
            ai_suggested_score: None,
            ai_rationale: None,
            answers: vec![
                SubmissionAnswer {
                    prompt: "In which year did the French Revolution begin?".into(),
                    response: "1789".into(),
                },
                SubmissionAnswer {
                    prompt: "Compare the causes of the French and American revolutions.".into(),
                    response: "Both revolutions grew out of fiscal crisis and Enlightenment \
                               ideas, but the French one also turned against its own \
                               aristocracy..."
                        .into(),
                },
            ],
        },
    ]
}

pub fn users() -> Vec<UserAccount> {
    vec![
        UserAccount {
            id: UserId(1),
            name: "Amelia Torres".into(),
            email: "amelia.torres@northgate.edu".into(),
            role: UserRole::Manager,
            status: UserStatus::Active,
            last_active: date(2025, 5, 30),
        },
        UserAccount {
            id: UserId(2),
            name: "Daniel Okafor".into(),
            email: "daniel.okafor@northgate.edu".into(),
            role: UserRole::Teacher,
            status: UserStatus::Active,
            last_active: date(2025, 5, 29),
        },
        UserAccount {
            id: UserId(3),
            name: "Maja Lindqvist".into(),
            email: "maja.lindqvist@northgate.edu".into(),
            role: UserRole::Teacher,
            status: UserStatus::Inactive,
            last_active: date(2025, 3, 14),
        },
        UserAccount {
            id: UserId(4),
            name: "Lina Moreau".into(),
            email: "lina.moreau@students.northgate.edu".into(),
            role: UserRole::Student,
            status: UserStatus::Active,
            last_active: date(2025, 5, 30),
        },
        UserAccount {
            id: UserId(5),
            name: "Omar Haddad".into(),
            email: "omar.haddad@students.northgate.edu".into(),
            role: UserRole::Student,
            status: UserStatus::Active,
            last_active: date(2025, 5, 28),
        },
    ]
}

pub fn insights() -> Vec<Insight> {
    vec![
        Insight {
            id: InsightId(1),
            title: "Attendance is recovering".into(),
            body: "Attendance climbed for the third week in a row, driven by \
                   year 8 and year 9 classes."
                .into(),
            severity: InsightSeverity::Positive,
            metric_delta: Some(2.4),
        },
        Insight {
            id: InsightId(2),
            title: "Mathematics grades slipping in 9B".into(),
            body: "Average quiz scores in class 9B dropped below the term \
                   average. Consider scheduling a review session."
                .into(),
            severity: InsightSeverity::Warning,
            metric_delta: Some(-5.1),
        },
        Insight {
            id: InsightId(3),
            title: "Three teachers have overdue corrections".into(),
            body: "27 submissions have waited more than a week for grading, \
                   concentrated in History and Physics."
                .into(),
            severity: InsightSeverity::Critical,
            metric_delta: None,
        },
        Insight {
            id: InsightId(4),
            title: "Essay activities engage students".into(),
            body: "Activities with at least one essay question see 12% higher \
                   completion than multiple-choice-only ones."
                .into(),
            severity: InsightSeverity::Positive,
            metric_delta: Some(12.0),
        },
    ]
}

pub fn analytics() -> AnalyticsSnapshot {
    AnalyticsSnapshot {
        enrollment: 642,
        attendance_rate: 93.5,
        average_grade: 76.2,
        classes: vec![
            ClassPerformance {
                class_name: "8A".into(),
                students: 28,
                average_grade: 79.4,
                attendance_rate: 95.1,
            },
            ClassPerformance {
                class_name: "8B".into(),
                students: 27,
                average_grade: 74.8,
                attendance_rate: 94.0,
            },
            ClassPerformance {
                class_name: "9A".into(),
                students: 30,
                average_grade: 77.9,
                attendance_rate: 92.6,
            },
            ClassPerformance {
                class_name: "9B".into(),
                students: 29,
                average_grade: 71.3,
                attendance_rate: 91.2,
            },
        ],
        trend: vec![
            TrendPoint {
                label: "Jan".into(),
                value: 74.1,
            },
            TrendPoint {
                label: "Feb".into(),
                value: 74.9,
            },
            TrendPoint {
                label: "Mar".into(),
                value: 75.6,
            },
            TrendPoint {
                label: "Apr".into(),
                value: 75.2,
            },
            TrendPoint {
                label: "May".into(),
                value: 76.2,
            },
        ],
    }
}

pub fn reports() -> Vec<ReportSummary> {
    vec![
        ReportSummary {
            id: ReportId(1),
            kind: ReportKind::Attendance,
            period: "2024–2025 · Term 2".into(),
            generated_at: Some(date(2025, 4, 4)),
            status: ReportStatus::Ready,
        },
        ReportSummary {
            id: ReportId(2),
            kind: ReportKind::Grades,
            period: "2024–2025 · Term 2".into(),
            generated_at: Some(date(2025, 4, 5)),
            status: ReportStatus::Ready,
        },
        ReportSummary {
            id: ReportId(3),
            kind: ReportKind::Activities,
            period: "2024–2025 · Term 3".into(),
            generated_at: None,
            status: ReportStatus::Requested,
        },
        ReportSummary {
            id: ReportId(4),
            kind: ReportKind::Enrollment,
            period: "2024–2025".into(),
            generated_at: Some(date(2025, 1, 10)),
            status: ReportStatus::Ready,
        },
    ]
}

pub fn institution() -> InstitutionProfile {
    InstitutionProfile {
        name: "Northgate Secondary School".into(),
        address: "14 Elm Park Road, Northgate".into(),
        contact_email: "office@northgate.edu".into(),
        phone: "+44 20 7946 0912".into(),
        academic_year: "2024–2025".into(),
        grading_scale: "0–100".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_activities_have_unique_question_ids() {
        for activity in activities() {
            let mut ids: Vec<_> = activity.questions.iter().map(|q| q.id).collect();
            let before = ids.len();
            ids.sort_by_key(|id| id.to_string());
            ids.dedup();
            assert_eq!(ids.len(), before);
        }
    }

    #[test]
    fn fixture_calls_return_independent_copies() {
        let mut first = activities();
        let second = activities();
        first[0].questions.clear();
        assert!(!second[0].questions.is_empty());
    }

    #[test]
    fn submission_answers_align_with_activity_questions() {
        let activities = activities();
        for submission in submissions() {
            let activity = activities
                .iter()
                .find(|a| a.title == submission.activity_title)
                .expect("submission references a known activity");
            assert_eq!(submission.answers.len(), activity.questions.len());
        }
    }
}
