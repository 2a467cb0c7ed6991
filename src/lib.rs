//! Taskplan: schedule legalization for AI-assisted task planning.
//!
//! A task-management application asks a language model to propose a work
//! schedule. The proposal is untrusted: it may put work on weekends,
//! outside business hours, across the lunch break, or carry inverted and
//! malformed times. This crate deterministically repairs such proposals
//! into schedules that honour a configurable work window, and reports the
//! entries it had to drop.
//!
//! # Architecture
//!
//! Taskplan follows hexagonal architecture principles:
//!
//! - **Domain**: Pure scheduling rules with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (canned proposals, files)
//!
//! # Modules
//!
//! - [`schedule`]: Constraint model, repair engine and planning service

pub mod schedule;
