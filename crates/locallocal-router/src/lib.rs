// SPDX-FileCopyrightText: 2026 LocalLocal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rule-based simulated models for LocalLocal AI Chat.
//!
//! This crate provides:
//! - [`respond`]: direct answers from an ordered keyword table
//! - [`classify`]: intent classification into eight fixed categories
//! - [`SimulatedModels`]: both of the above behind injectable latency and randomness
//! - [`ChatHandler`]: the request boundary that selects models and absorbs failures
//!
//! No inference happens anywhere; replies are canned or keyword-matched.

pub mod chat;
pub mod choice;
pub mod classifier;
pub mod latency;
pub mod models;
pub mod responder;
pub mod rules;

pub use chat::{ChatHandler, EMPTY_INPUT_REPLY, INVALID_CHOICE_REPLY};
pub use choice::{FixedChoice, SeededRandom, ThreadRandom};
pub use classifier::{classify, RouteCategory, RoutingAnalysis};
pub use latency::{NoLatency, SleepLatency};
pub use models::SimulatedModels;
pub use responder::{respond, DirectResponse, DirectTopic};
