// SPDX-FileCopyrightText: 2026 LocalLocal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Seams for the non-deterministic parts of the simulated models.
//!
//! Both the artificial processing delay and the random joke selection are
//! injected through these traits so the engine stays testable.

pub mod choice;
pub mod latency;

pub use choice::ChoiceSource;
pub use latency::Latency;
