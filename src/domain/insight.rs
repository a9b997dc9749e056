// SPDX-License-Identifier: MPL-2.0
//! AI insight cards and analytics figures shown on the manager dashboards.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InsightId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightSeverity {
    Positive,
    Warning,
    Critical,
}

impl InsightSeverity {
    pub const ALL: [InsightSeverity; 3] = [
        InsightSeverity::Positive,
        InsightSeverity::Warning,
        InsightSeverity::Critical,
    ];

    pub fn i18n_key(&self) -> &'static str {
        match self {
            InsightSeverity::Positive => "insight-severity-positive",
            InsightSeverity::Warning => "insight-severity-warning",
            InsightSeverity::Critical => "insight-severity-critical",
        }
    }
}

/// One AI-generated observation about the institution.
#[derive(Debug, Clone)]
pub struct Insight {
    pub id: InsightId,
    pub title: String,
    pub body: String,
    pub severity: InsightSeverity,
    /// Signed percentage-point change behind the observation, when one applies.
    pub metric_delta: Option<f32>,
}

/// Aggregate row for one class on the analytics screen.
#[derive(Debug, Clone)]
pub struct ClassPerformance {
    pub class_name: String,
    pub students: u32,
    pub average_grade: f32,
    pub attendance_rate: f32,
}

/// One point of the monthly average-grade trend.
#[derive(Debug, Clone)]
pub struct TrendPoint {
    pub label: String,
    pub value: f32,
}

/// Institution-wide analytics for one reporting period.
#[derive(Debug, Clone)]
pub struct AnalyticsSnapshot {
    pub enrollment: u32,
    pub attendance_rate: f32,
    pub average_grade: f32,
    pub classes: Vec<ClassPerformance>,
    pub trend: Vec<TrendPoint>,
}
