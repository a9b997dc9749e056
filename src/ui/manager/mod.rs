// SPDX-License-Identifier: MPL-2.0
//! Manager-facing dashboard screens.

pub mod analytics;
pub mod insights;
pub mod institution;
pub mod reports;
pub mod users;
