use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::color::Rgba8;
use crate::foundation::error::{SkyError, SkyResult};

/// Which body a section shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CelestialType {
    Sun,
    Moon,
}

/// Light or dark page theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// Side of the viewport the celestial body sits on (and enters from).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutPosition {
    Left,
    Right,
}

impl LayoutPosition {
    /// `-1` for left, `1` for right.
    pub fn sign(self) -> f64 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// Vertical background gradient; `from` at the top, `to` at the bottom, with an optional
/// `via` color at the midpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Background {
    pub from: Rgba8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub via: Option<Rgba8>,
    pub to: Rgba8,
}

impl Background {
    pub const fn solid(c: Rgba8) -> Self {
        Self {
            from: c,
            via: None,
            to: c,
        }
    }

    pub fn is_solid(&self) -> bool {
        self.from == self.to && self.via.is_none_or(|v| v == self.from)
    }

    /// Gradient stops from top to bottom.
    pub fn stops(&self) -> Vec<(f64, Rgba8)> {
        match self.via {
            Some(via) => vec![(0.0, self.from), (0.5, via), (1.0, self.to)],
            None => vec![(0.0, self.from), (1.0, self.to)],
        }
    }
}

/// One full-height section of the page.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SectionDescriptor {
    pub title: String,
    pub description: String,
    pub celestial: CelestialType,
    pub theme: ThemeMode,
    pub position: LayoutPosition,
    pub background: Background,
}

/// Ordered list of sections driving the page.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SiteContent {
    pub sections: Vec<SectionDescriptor>,
}

impl SiteContent {
    /// Parse content from a JSON reader and validate it.
    pub fn from_reader<R: std::io::Read>(r: R) -> SkyResult<Self> {
        let content: Self = serde_json::from_reader(r)
            .map_err(|e| SkyError::serde(format!("parse site content JSON: {e}")))?;
        content.validate()?;
        Ok(content)
    }

    /// Parse content from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> SkyResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SkyError::validation(format!("open site content JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> SkyResult<()> {
        if self.sections.is_empty() {
            return Err(SkyError::validation("site content must have at least one section"));
        }
        for (i, s) in self.sections.iter().enumerate() {
            if s.title.trim().is_empty() {
                return Err(SkyError::validation(format!(
                    "section {i} title must be non-empty"
                )));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SectionDescriptor> {
        self.sections.get(index)
    }

    /// Theme of each section, in page order.
    pub fn theme_table(&self) -> Vec<ThemeMode> {
        self.sections.iter().map(|s| s.theme).collect()
    }
}

impl Default for SiteContent {
    /// The built-in summer campaign: alternating day and night sections.
    fn default() -> Self {
        Self {
            sections: vec![
                SectionDescriptor {
                    title: "Experience Summer 2024".to_owned(),
                    description: "Discover vibrant adventures, sunny escapes, and unforgettable memories waiting to be made this season.".to_owned(),
                    celestial: CelestialType::Sun,
                    theme: ThemeMode::Light,
                    position: LayoutPosition::Left,
                    background: Background {
                        from: Rgba8::rgb(0xf0, 0xf9, 0xff),
                        via: Some(Rgba8::rgb(0xe0, 0xf2, 0xfe)),
                        to: Rgba8::rgb(0xba, 0xe6, 0xfd),
                    },
                },
                SectionDescriptor {
                    title: "Magical Summer Nights".to_owned(),
                    description: "When the sun sets, the summer truly awakens. Explore nighttime festivals, beachside bonfires, and starlit conversations.".to_owned(),
                    celestial: CelestialType::Moon,
                    theme: ThemeMode::Dark,
                    position: LayoutPosition::Right,
                    background: Background::solid(Rgba8::rgb(0x1e, 0x1b, 0x4b)),
                },
                SectionDescriptor {
                    title: "Coastal Retreats & Adventures".to_owned(),
                    description: "From serene shorelines to thrilling water sports, our curated beach experiences offer the perfect summer escape for everyone.".to_owned(),
                    celestial: CelestialType::Sun,
                    theme: ThemeMode::Light,
                    position: LayoutPosition::Left,
                    background: Background::solid(Rgba8::rgb(0xff, 0xfb, 0xeb)),
                },
                SectionDescriptor {
                    title: "Summer Under the Stars".to_owned(),
                    description: "Join our guided astronomical tours and camping experiences where the night sky becomes your personal planetarium.".to_owned(),
                    celestial: CelestialType::Moon,
                    theme: ThemeMode::Dark,
                    position: LayoutPosition::Right,
                    background: Background::solid(Rgba8::rgb(0x0f, 0x17, 0x2a)),
                },
            ],
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/model.rs"]
mod tests;
