// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Waiting for a set of resources to become ready.

pub mod poll;
pub mod verdict;

pub use poll::{evaluate, report, run, WaitConfig};
pub use verdict::{evaluate_snapshot, ItemVerdict, ReadinessVerdict};
