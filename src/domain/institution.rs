// SPDX-License-Identifier: MPL-2.0
/// Institution-wide profile edited on the manager's settings screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstitutionProfile {
    pub name: String,
    pub address: String,
    pub contact_email: String,
    pub phone: String,
    /// Display label, e.g. `"2024–2025"`.
    pub academic_year: String,
    /// Grading scale label, e.g. `"0–100"` or `"A–F"`.
    pub grading_scale: String,
}
