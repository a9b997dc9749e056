// SPDX-License-Identifier: MPL-2.0
//! Teacher-facing workflow screens.

pub mod corrections;
pub mod feedback;
pub mod submission_detail;
