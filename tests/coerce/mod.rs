// SPDX-FileCopyrightText: 2026 mdlest contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Module containing tests for input coercion.
mod coerce_test;
