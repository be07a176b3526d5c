//! # Airside
//!
//! A resource-constrained scheduler for passenger flow through an airport
//! terminal pipeline: check-in, security, boarding.
//!
//! Passengers enter a priority-ordered admission queue and are pulled into
//! check-in whenever a counter is free. Late passengers outrank everyone
//! else; among passengers with equal lateness, higher effective priority
//! (base priority plus a frequent-flyer boost) wins, and passengers tied on
//! both keys are served in arrival order. Each stage owns a finite pool of
//! interchangeable resource units (counters, lanes, gates) and a FIFO
//! holding queue; the scheduler advances passengers stage by stage until the
//! whole pipeline drains.
//!
//! ## Core pieces
//!
//! - [`core::Passenger`] — immutable passenger record with a derived
//!   boarding rank.
//! - [`core::AdmissionQueue`] — priority queue ordered by
//!   `(late, effective priority, arrival)`.
//! - [`core::Stage`] — FIFO queue gated by a [`core::ResourceTokens`] pool.
//! - [`core::TerminalScheduler`] — owns the admission queue and the three
//!   stages and runs the check-in → security → boarding cycle.
//!
//! ## Example
//!
//! ```rust,ignore
//! use airside::builders::build_scheduler;
//! use airside::config::{Manifest, TerminalConfig};
//! use airside::core::InstantAction;
//!
//! let cfg = TerminalConfig::new(2, 3, 1);
//! let manifest = Manifest::from_json_str(input)?;
//! let mut scheduler = build_scheduler(&cfg)?;
//! for spec in &manifest.passengers {
//!     scheduler.admit(spec.build(cfg.priority_policy)?);
//! }
//! let report = scheduler.run(&InstantAction);
//! println!("boarded {} passengers in {} cycles", report.boarded.len(), report.cycles);
//! ```
//!
//! The crate performs no I/O of its own: input arrives as plain data
//! ([`config::Manifest`], [`config::TerminalConfig`]) and progress leaves as
//! lifecycle events through [`core::EventSink`].

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core scheduling types: passengers, stages, admission, orchestration.
pub mod core;
/// Configuration models for the terminal and passenger manifests.
pub mod config;
/// Builders to construct scheduler components from configuration.
pub mod builders;
/// Shared utilities.
pub mod util;
