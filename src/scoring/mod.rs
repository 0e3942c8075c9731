// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how candidates get their numbers.
//!
//! `core` turns a query and candidate texts into cosine scores in input order.
//! `ranking` sorts those scores for display, keeping ties in upload order.

mod core;
pub mod ranking;

pub use self::core::*;
