//! hitl-gate: a human-in-the-loop gate for agent responses.
//!
//! Inspects text produced by an automated agent and decides whether it
//! describes an actionable command aimed at a physical device (a robot or
//! similar hardware). When it does, the returned [`eval::Decision`] marks
//! the response as requiring approval and carries the full text for a human
//! reviewer; downstream execution must wait for that approval.
//!
//! # Architecture
//!
//! - **[`patterns`]** — Rule set: the `Matcher` trait, regex rules, the built-in Korean pack.
//! - **[`eval`]** — Decision engine and the `Decision` / `Reason` value types.
//! - **[`config`]** — Configuration loading: embedded defaults + user overlay merge.
//! - **[`logging`]** — stderr logger setup and one-line decision records.
//! - **[`error`]** — Construction errors for rules and configuration.

/// Configuration types, loading, and overlay merge logic.
pub mod config;
/// Errors raised while building rules or loading configuration.
pub mod error;
/// Decision engine and decision types.
pub mod eval;
/// Logger setup and decision records.
pub mod logging;
/// Pattern matchers and the built-in rule packs.
pub mod patterns;

use std::sync::LazyLock;

use eval::{Decision, DecisionEngine};

static DEFAULT_ENGINE: LazyLock<DecisionEngine> = LazyLock::new(DecisionEngine::default);

/// Engine with the built-in Korean rule pack, built on first use.
pub fn default_engine() -> &'static DecisionEngine {
    &DEFAULT_ENGINE
}

/// Evaluate a response against the built-in rules.
///
/// This is the main entry point for tests and simple usage.
/// For user config and extra rules, build a [`DecisionEngine`] directly.
pub fn evaluate(text: &str) -> Decision {
    DEFAULT_ENGINE.evaluate(Some(text))
}

/// Like [`evaluate`], for callers whose response may be missing.
pub fn evaluate_optional(text: Option<&str>) -> Decision {
    DEFAULT_ENGINE.evaluate(text)
}
