use crate::{
    content::model::{SiteContent, ThemeMode},
    foundation::color::Rgba8,
};

impl ThemeMode {
    /// Class applied to the document root while this theme is current.
    pub fn root_class(self) -> &'static str {
        match self {
            Self::Light => "light-theme",
            Self::Dark => "dark-theme",
        }
    }

    /// Headline text color.
    pub fn text_color(self) -> Rgba8 {
        match self {
            Self::Light => Rgba8::rgb(0x0f, 0x17, 0x2a),
            Self::Dark => Rgba8::WHITE,
        }
    }

    /// Shadow under headline text, `(blur_px, opacity)`.
    pub fn text_shadow(self) -> (f64, f64) {
        match self {
            Self::Light => (8.0, 0.7),
            Self::Dark => (16.0, 0.8),
        }
    }

    /// Color the section fades toward at its bottom edge.
    pub fn overlay_color(self) -> Rgba8 {
        match self {
            Self::Light => Rgba8::rgba(255, 255, 255, 51),
            Self::Dark => Rgba8::rgba(0, 0, 0, 77),
        }
    }
}

/// Active section index to page theme, via a fixed lookup table.
///
/// This is the only page-wide mutable value; an index outside the table keeps the current
/// theme.
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeSelector {
    table: Vec<ThemeMode>,
    initial: ThemeMode,
    current: ThemeMode,
}

impl ThemeSelector {
    pub fn new(table: Vec<ThemeMode>, initial: ThemeMode) -> Self {
        Self {
            table,
            initial,
            current: initial,
        }
    }

    /// Table from the content list; starts on the first section's theme.
    pub fn from_content(content: &SiteContent) -> Self {
        let table = content.theme_table();
        let initial = table.first().copied().unwrap_or_default();
        Self::new(table, initial)
    }

    pub fn current(&self) -> ThemeMode {
        self.current
    }

    pub fn root_class(&self) -> &'static str {
        self.current.root_class()
    }

    /// Apply the theme for `active_index` and return the resulting theme.
    pub fn select(&mut self, active_index: usize) -> ThemeMode {
        if let Some(&theme) = self.table.get(active_index) {
            if theme != self.current {
                tracing::debug!(
                    from = self.current.root_class(),
                    to = theme.root_class(),
                    active_index,
                    "theme changed"
                );
            }
            self.current = theme;
        }
        self.current
    }

    /// Back to the initial theme, as on navigation.
    pub fn reset(&mut self) {
        self.current = self.initial;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/theme/selector.rs"]
mod tests;
