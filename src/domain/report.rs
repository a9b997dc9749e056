// SPDX-License-Identifier: MPL-2.0
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReportId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Attendance,
    Grades,
    Activities,
    Enrollment,
}

impl ReportKind {
    pub const ALL: [ReportKind; 4] = [
        ReportKind::Attendance,
        ReportKind::Grades,
        ReportKind::Activities,
        ReportKind::Enrollment,
    ];

    pub fn i18n_key(&self) -> &'static str {
        match self {
            ReportKind::Attendance => "report-kind-attendance",
            ReportKind::Grades => "report-kind-grades",
            ReportKind::Activities => "report-kind-activities",
            ReportKind::Enrollment => "report-kind-enrollment",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStatus {
    Ready,
    Requested,
}

impl ReportStatus {
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ReportStatus::Ready => "report-status-ready",
            ReportStatus::Requested => "report-status-requested",
        }
    }
}

/// One row on the manager's reports screen.
#[derive(Debug, Clone)]
pub struct ReportSummary {
    pub id: ReportId,
    pub kind: ReportKind,
    /// Human-readable period label, e.g. `"2024–2025 · Term 2"`.
    pub period: String,
    pub generated_at: Option<NaiveDate>,
    pub status: ReportStatus,
}
