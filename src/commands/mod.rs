// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI Commands

pub(crate) mod common;
pub mod datetime;
pub mod language;
pub mod theme;
pub mod translate;
