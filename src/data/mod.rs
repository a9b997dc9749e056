// SPDX-License-Identifier: MPL-2.0
//! Stand-in data access layer.
//!
//! Screens are fed from [`mock`], which plays the role of the backend the
//! production deployment would talk to. Persistence and transport stay on the
//! caller's side of this boundary.

pub mod mock;
