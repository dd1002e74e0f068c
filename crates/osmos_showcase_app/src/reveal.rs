// SPDX-License-Identifier: MIT OR Apache-2.0
//! Scroll-triggered reveal animation.
//!
//! Sections fade and slide in the first time they scroll into view, then stay
//! revealed (animate-once). Visibility is judged against the rect a section
//! reported on the previous frame; all bookkeeping lives here and is dropped
//! with the page, nothing is registered globally.

use egui::{Id, Rect, Ui};
use std::collections::{HashMap, HashSet};

/// Seconds for a section to fade in
const REVEAL_TIME: f32 = 0.55;

/// Slide-in distance while fading, in points
const REVEAL_SLIDE: f32 = 14.0;

/// Tracks which sections have been seen and their last-frame rects
#[derive(Default)]
pub struct Reveal {
    seen: HashSet<Id>,
    rects: HashMap<Id, Rect>,
}

impl Reveal {
    /// Create an empty reveal tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Opacity for a section, advancing its animation when it first becomes
    /// visible. Call before drawing the section's content.
    pub fn begin(&mut self, ui: &Ui, salt: &str) -> f32 {
        let id = Self::id(salt);
        let visible = self
            .rects
            .get(&id)
            .is_some_and(|rect| rect.intersects(ui.clip_rect()));
        if visible {
            self.seen.insert(id);
        }
        let target = self.seen.contains(&id);
        ui.ctx().animate_bool_with_time(id, target, REVEAL_TIME)
    }

    /// Record the section's rect for next frame's visibility check
    pub fn end(&mut self, salt: &str, rect: Rect) {
        self.rects.insert(Self::id(salt), rect);
    }

    /// Vertical slide offset matching the current fade
    pub fn slide(fade: f32) -> f32 {
        (1.0 - fade) * REVEAL_SLIDE
    }

    fn id(salt: &str) -> Id {
        Id::new(("reveal", salt))
    }
}
