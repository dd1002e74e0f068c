// SPDX-License-Identifier: MIT OR Apache-2.0
//! Pipeline node graph for the OSMOS showcase.
//!
//! This crate provides the decorative "Lead Scraper & Outreach" diagram shown
//! on the landing page:
//! - Static, hand-authored node layouts (wide and compact)
//! - Auto-fit viewport transform (scale + centering)
//! - Non-interactive canvas painting
//!
//! ## Architecture
//!
//! The graph is pure display data. Node positions are fixed at construction;
//! the only mutable field is each node's run status, driven externally by the
//! sequencer crate. There is no evaluation, no connections to validate, and
//! no user interaction with the canvas.

pub mod fit;
pub mod layout;
pub mod node;
pub mod ui;

pub use fit::{fit_to_rect, FitParams, ViewTransform};
pub use layout::LayoutMode;
pub use node::{Node, NodeId, NodeKind, NodeStatus, PipelineGraph};
pub use ui::PipelineCanvas;
