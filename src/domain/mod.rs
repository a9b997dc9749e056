// SPDX-License-Identifier: MPL-2.0
//! Core school-domain records rendered by the screens.
//!
//! These types are deliberately plain data: screens own copies, mutate them
//! locally, and nothing here touches persistence or transport.

pub mod activity;
pub mod insight;
pub mod institution;
pub mod question;
pub mod report;
pub mod submission;
pub mod user;

pub use activity::{Activity, ActivityId};
pub use insight::{
    AnalyticsSnapshot, ClassPerformance, Insight, InsightId, InsightSeverity, TrendPoint,
};
pub use institution::InstitutionProfile;
pub use question::{Difficulty, Question, QuestionId, QuestionKind};
pub use report::{ReportId, ReportKind, ReportStatus, ReportSummary};
pub use submission::{Submission, SubmissionAnswer, SubmissionId, SubmissionStatus};
pub use user::{UserAccount, UserId, UserRole, UserStatus};
