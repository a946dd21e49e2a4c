use crate::{
    config::site::SiteConfig,
    content::model::{SiteContent, ThemeMode},
    field::starfield::StarField,
    foundation::core::{ScrollProgress, Viewport},
    foundation::error::{SkyError, SkyResult},
    scroll::tracker::{ScrollMetrics, ScrollTracker},
    theme::selector::ThemeSelector,
    visual::mapper::{VisualParams, map_visual_state},
    visual::transition::{EntranceTransition, HeadlineTransition},
};

/// One visibility observation for a section.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VisibilityReport {
    pub section_index: usize,
    /// Fraction of the section inside the viewport, `[0, 1]`.
    pub visible_fraction: f64,
}

impl VisibilityReport {
    pub fn new(section_index: usize, visible_fraction: f64) -> Self {
        Self {
            section_index,
            visible_fraction,
        }
    }

    pub fn is_intersecting(&self, threshold: f64) -> bool {
        self.visible_fraction >= threshold
    }
}

#[derive(Clone, Debug)]
struct SectionRuntime {
    tracker: ScrollTracker,
    entrance: EntranceTransition,
    headline: HeadlineTransition,
    /// Time the current entrance/headline transitions started.
    changed_at_s: f64,
}

/// Owner of all per-page state: the active section, each section's scroll tracker and
/// entrance transition, the theme, and the star field generated at mount.
///
/// Sections are stacked, each one viewport tall, so section `i` starts at
/// `i * viewport.height`.
#[derive(Clone, Debug)]
pub struct PageController {
    content: SiteContent,
    config: SiteConfig,
    field: StarField,
    sections: Vec<SectionRuntime>,
    active: usize,
    theme: ThemeSelector,
}

impl PageController {
    /// Mount the page at scroll offset zero and time zero with the first section active.
    pub fn new(content: SiteContent, config: SiteConfig) -> SkyResult<Self> {
        content.validate()?;
        config.validate()?;

        let field = StarField::generate(&config.field);
        let sections = content
            .sections
            .iter()
            .enumerate()
            .map(|(i, s)| SectionRuntime {
                tracker: ScrollTracker::new(i),
                entrance: EntranceTransition::settled(s.position, false),
                headline: HeadlineTransition::settled(false),
                changed_at_s: 0.0,
            })
            .collect();
        let theme = ThemeSelector::from_content(&content);

        let mut page = Self {
            content,
            config,
            field,
            sections,
            active: 0,
            theme,
        };
        page.enter(0, 0.0, 0.0);
        Ok(page)
    }

    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn field(&self) -> &StarField {
        &self.field
    }

    pub fn active_section(&self) -> usize {
        self.active
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme.current()
    }

    /// Class the document root carries for the current theme.
    pub fn root_class(&self) -> &'static str {
        self.theme.root_class()
    }

    pub fn section_origin(&self, index: usize) -> f64 {
        index as f64 * self.config.viewport.height
    }

    /// Scroll offset at `progress` through section `index`.
    pub fn scroll_offset_for(&self, index: usize, progress: ScrollProgress) -> f64 {
        self.section_origin(index) + progress.get() * self.config.viewport.height
    }

    fn metrics(&self, index: usize, scroll_offset: f64) -> ScrollMetrics {
        ScrollMetrics::new(
            scroll_offset,
            self.section_origin(index),
            self.config.viewport.height,
        )
    }

    /// Progress of section `index`; zero unless it is the active section.
    pub fn progress(&self, index: usize) -> ScrollProgress {
        self.sections
            .get(index)
            .map(|s| s.tracker.progress())
            .unwrap_or(ScrollProgress::ZERO)
    }

    /// Consume one batch of visibility reports.
    ///
    /// Reports at or above the threshold are candidates; when several cross in the same
    /// batch the last one processed wins. Reports for unknown sections are ignored.
    /// Returns the newly activated index, if it changed.
    #[tracing::instrument(skip(self, reports), fields(n = reports.len()))]
    pub fn handle_visibility(
        &mut self,
        reports: &[VisibilityReport],
        scroll_offset: f64,
        now_s: f64,
    ) -> Option<usize> {
        let threshold = self.config.visibility_threshold;
        let mut candidate = None;
        for r in reports {
            if r.section_index >= self.sections.len() {
                tracing::warn!(section = r.section_index, "visibility report for unknown section");
                continue;
            }
            if r.is_intersecting(threshold) {
                candidate = Some(r.section_index);
            }
        }

        let next = candidate?;
        if next == self.active {
            return None;
        }
        self.switch_to(next, scroll_offset, now_s);
        Some(next)
    }

    /// Forward a scroll event to the active section's tracker.
    pub fn handle_scroll(&mut self, scroll_offset: f64) -> ScrollProgress {
        let metrics = self.metrics(self.active, scroll_offset);
        self.sections[self.active]
            .tracker
            .on_scroll(metrics)
            .unwrap_or(ScrollProgress::ZERO)
    }

    /// Apply a viewport change and recompute the active section's progress.
    pub fn handle_resize(&mut self, viewport: Viewport, scroll_offset: f64) -> ScrollProgress {
        self.config.viewport = viewport;
        let metrics = self.metrics(self.active, scroll_offset);
        self.sections[self.active]
            .tracker
            .on_resize(metrics)
            .unwrap_or(ScrollProgress::ZERO)
    }

    /// Jump straight to `progress` through section `index`, as if the user scrolled there
    /// and the section crossed the visibility threshold at `now_s`.
    pub fn scroll_to(
        &mut self,
        index: usize,
        progress: ScrollProgress,
        now_s: f64,
    ) -> SkyResult<ScrollProgress> {
        if index >= self.sections.len() {
            return Err(SkyError::validation(format!("no section at index {index}")));
        }
        let offset = self.scroll_offset_for(index, progress);
        self.handle_visibility(&[VisibilityReport::new(index, 1.0)], offset, now_s);
        Ok(self.handle_scroll(offset))
    }

    /// Navigation: back to the top with the initial theme.
    pub fn reset(&mut self, now_s: f64) {
        self.theme.reset();
        if self.active != 0 {
            self.switch_to(0, 0.0, now_s);
        } else {
            let metrics = self.metrics(0, 0.0);
            self.sections[0].tracker.activate(metrics);
        }
    }

    fn switch_to(&mut self, next: usize, scroll_offset: f64, now_s: f64) {
        let prev = self.active;
        let position = self.content.sections[prev].position;
        let rt = &mut self.sections[prev];
        let elapsed = now_s - rt.changed_at_s;
        let entrance_now = rt.entrance.sample(elapsed);
        let headline_now = rt.headline.sample(elapsed);
        rt.tracker.deactivate();
        rt.entrance = EntranceTransition::toward(
            entrance_now,
            position,
            false,
            self.config.entrance_duration_s,
            self.config.entrance_ease,
        );
        rt.headline = HeadlineTransition::toward(
            headline_now,
            false,
            self.config.headline_duration_s,
            self.config.headline_ease,
        );
        rt.changed_at_s = now_s;

        self.enter(next, scroll_offset, now_s);
        tracing::debug!(from = prev, to = next, theme = self.root_class(), "section activated");
    }

    fn enter(&mut self, index: usize, scroll_offset: f64, now_s: f64) {
        let metrics = self.metrics(index, scroll_offset);
        let position = self.content.sections[index].position;
        let entrance_duration_s = self.config.entrance_duration_s;
        let headline_duration_s = self.config.headline_duration_s;
        let entrance_ease = self.config.entrance_ease;
        let headline_ease = self.config.headline_ease;
        let rt = &mut self.sections[index];
        let elapsed = now_s - rt.changed_at_s;
        let entrance_now = rt.entrance.sample(elapsed);
        let headline_now = rt.headline.sample(elapsed);
        rt.tracker.activate(metrics);
        rt.entrance = EntranceTransition::toward(
            entrance_now,
            position,
            true,
            entrance_duration_s,
            entrance_ease,
        );
        rt.headline =
            HeadlineTransition::toward(headline_now, true, headline_duration_s, headline_ease);
        rt.changed_at_s = now_s;

        self.active = index;
        self.theme.select(index);
    }

    /// Visual parameters of section `index` at time `now_s`, entrance transitions included.
    pub fn visual_state(&self, index: usize, now_s: f64) -> SkyResult<VisualParams> {
        let desc = self
            .content
            .get(index)
            .ok_or_else(|| SkyError::validation(format!("no section at index {index}")))?;
        let rt = &self.sections[index];
        let mut params = map_visual_state(
            rt.tracker.progress(),
            desc.celestial,
            desc.position,
            index == self.active,
        );
        let elapsed = now_s - rt.changed_at_s;
        params.entrance = rt.entrance.sample(elapsed);
        params.headline = rt.headline.sample(elapsed);
        Ok(params)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/controller.rs"]
mod tests;
