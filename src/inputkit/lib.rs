//! # Inputkit Architecture
//!
//! Inputkit is the **headless core of enhanced form inputs**: the part that
//! decides what a typed value becomes and whether it is acceptable. It has no
//! notion of a DOM, events or rendering. A UI binds to it; the bundled CLI is
//! one such binding.
//!
//! ## Two Pipelines
//!
//! ```text
//!               ┌──────────────── transform ────────────────┐
//! raw value ──► │ filters ──► modifiers ──► model modifiers │ ──► model
//!               └───────────────────────────────────────────┘
//!                                                              │
//!                                                              ▼
//!               ┌──────────────── validation ───────────────┐
//!               │ every validator runs, messages collected  │ ──► ValidationResult
//!               └───────────────────────────────────────────┘
//! ```
//!
//! Both pipelines are configured with **spec lists**: preset names, patterns
//! or user functions. Specs are resolved into functions once per
//! configuration change and the functions are run on every value change.
//!
//! ## Resolution Never Fails
//!
//! An unknown preset name does not abort resolution. The entry is dropped and
//! a [`diagnostics::Diagnostic`] is returned alongside the resolved functions
//! (a field logs it once through `tracing`). Callers that want hard failures,
//! like the CLI's `--strict` mode, turn diagnostics into errors themselves.
//!
//! ## Module Overview
//!
//! - [`transform`]: `Transform`, the filter/modifier registry and [`transform::apply`].
//! - [`validation`]: verdicts, the `required` preset per model kind, and the
//!   `validate*` functions.
//! - [`collections`]: add/remove/has over list- or set-backed selections.
//! - [`model`]: checkbox, radio and file model shapes.
//! - [`field`]: headless bindings that own specs and run both pipelines.
//! - [`diagnostics`]: the non-fatal warning side channel.
//! - [`config`]: layered `confique` configuration for the CLI.
//! - [`commands`]: CLI-facing operations returning `CmdResult`.
//! - [`error`]: `InputkitError` and the crate `Result` alias.

pub mod collections;
pub mod commands;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod field;
pub mod model;
pub mod transform;
pub mod validation;
