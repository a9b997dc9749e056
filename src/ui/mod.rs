// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`manager`] - Manager dashboards (insights, analytics, institution,
//!   reports, users)
//! - [`teacher`] - Teacher workflows (corrections, feedback, submission
//!   detail)
//! - [`question_editor`] - Question list editor for one activity
//! - [`settings`] - Application preferences
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (stat card, badge)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`navbar`] - Top navigation bar

pub mod components;
pub mod design_tokens;
pub mod manager;
pub mod navbar;
pub mod question_editor;
pub mod settings;
pub mod styles;
pub mod teacher;
pub mod theming;
