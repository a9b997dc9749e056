// SPDX-License-Identifier: MPL-2.0
//! Localization support backed by Fluent resource files.

pub mod fluent;
