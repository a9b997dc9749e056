// SPDX-License-Identifier: MPL-2.0
//! `classdesk` is a school-management desktop app built with the Iced GUI
//! framework.
//!
//! It provides manager dashboards and teacher grading workflows over mock
//! data, and demonstrates internationalization with Fluent, user preference
//! management, and modular UI design.

pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
