use crate::foundation::core::ScrollProgress;

/// Raw scroll geometry for one section, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollMetrics {
    /// Page scroll offset (`window.scrollY`).
    pub scroll_offset: f64,
    /// Section top relative to the page.
    pub section_origin: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_offset: f64, section_origin: f64, viewport_height: f64) -> Self {
        Self {
            scroll_offset,
            section_origin,
            viewport_height,
        }
    }
}

/// `clamp((scroll_offset - section_origin) / viewport_height, 0, 1)`.
///
/// A degenerate viewport (zero, negative or non-finite height) reports zero progress.
pub fn scroll_progress(m: ScrollMetrics) -> ScrollProgress {
    if !m.viewport_height.is_finite() || m.viewport_height <= 0.0 {
        return ScrollProgress::ZERO;
    }
    ScrollProgress::new((m.scroll_offset - m.section_origin) / m.viewport_height)
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum TrackerState {
    Inactive,
    Active { progress: ScrollProgress },
}

/// Scroll listener for one section.
///
/// Listening is scoped to activation: an inactive tracker ignores scroll and resize events
/// and reports zero progress. Deactivating drops the listener and resets progress.
#[derive(Clone, Debug)]
pub struct ScrollTracker {
    section_index: usize,
    state: TrackerState,
}

impl ScrollTracker {
    pub fn new(section_index: usize) -> Self {
        Self {
            section_index,
            state: TrackerState::Inactive,
        }
    }

    pub fn section_index(&self) -> usize {
        self.section_index
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, TrackerState::Active { .. })
    }

    /// Current progress; zero while inactive.
    pub fn progress(&self) -> ScrollProgress {
        match self.state {
            TrackerState::Inactive => ScrollProgress::ZERO,
            TrackerState::Active { progress } => progress,
        }
    }

    /// Register the listener and run the initial calculation.
    pub fn activate(&mut self, metrics: ScrollMetrics) -> ScrollProgress {
        let progress = scroll_progress(metrics);
        tracing::debug!(
            section = self.section_index,
            progress = progress.get(),
            "scroll tracker activated"
        );
        self.state = TrackerState::Active { progress };
        progress
    }

    /// Handle a scroll event. Returns the new progress, or `None` when not listening.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> Option<ScrollProgress> {
        match self.state {
            TrackerState::Inactive => None,
            TrackerState::Active { .. } => {
                let progress = scroll_progress(metrics);
                self.state = TrackerState::Active { progress };
                Some(progress)
            }
        }
    }

    /// Handle a viewport resize; the section origin and height may both have moved.
    pub fn on_resize(&mut self, metrics: ScrollMetrics) -> Option<ScrollProgress> {
        self.on_scroll(metrics)
    }

    /// Drop the listener and reset progress.
    pub fn deactivate(&mut self) {
        if self.is_active() {
            tracing::debug!(section = self.section_index, "scroll tracker deactivated");
        }
        self.state = TrackerState::Inactive;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/tracker.rs"]
mod tests;
