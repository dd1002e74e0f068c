// SPDX-License-Identifier: MIT OR Apache-2.0
//! Run-order sequencing for the OSMOS showcase.
//!
//! This crate drives the decorative pipeline animation:
//! - A fixed cyclic visiting order over node ids
//! - An elapsed-time-gated animator that flips node statuses
//!
//! ## Architecture
//!
//! The animator is a tiny state machine: its state is an index into the run
//! order. It is advanced once per rendered frame with the frame's delta time
//! and mutates nothing but node statuses. It has no terminal state and no
//! failure modes; an id missing from the graph is silently skipped.

pub mod animator;
pub mod run_order;

pub use animator::{PlaybackState, StatusAnimator, DEFAULT_TICK_INTERVAL};
pub use run_order::RunOrder;
