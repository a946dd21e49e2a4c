use crate::{
    field::element::{DecorativeElement, FieldCategory},
    foundation::math::{fmod, round2},
};

/// A crater on the moon's face; positions are percent of the moon box.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Crater {
    pub id: String,
    pub size_px: f64,
    /// Shading depth, 1 to 3.
    pub depth: u8,
    pub top: f64,
    pub left: f64,
    /// Highlight center inside the crater, percent.
    pub highlight_x: f64,
    pub highlight_y: f64,
}

impl Crater {
    pub(crate) fn as_element(&self) -> DecorativeElement {
        DecorativeElement {
            id: self.id.clone(),
            category: FieldCategory::Crater,
            size: self.size_px,
            top: self.top,
            left: self.left,
            opacity: 1.0,
            animation_delay_s: None,
            animation_duration_s: None,
        }
    }
}

fn crater(i: usize) -> Crater {
    let x = i as f64;
    Crater {
        id: FieldCategory::Crater.element_id(i),
        size_px: (6 + (i % 5) * 5 + (i % 3) * 3) as f64,
        depth: 1 + (i % 3) as u8,
        top: round2(fmod(x * 7.3, 85.0) + 5.0),
        left: round2(fmod(x * 11.7, 85.0) + 5.0),
        highlight_x: (30 + i % 40) as f64,
        highlight_y: (25 + i % 50) as f64,
    }
}

/// Generate `count` craters, in index order.
pub fn generate_craters(count: usize) -> Vec<Crater> {
    (0..count).map(crater).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/field/craters.rs"]
mod tests;
