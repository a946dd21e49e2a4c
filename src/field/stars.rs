//! Index-driven star placement.
//!
//! Every value is a pure function of the element index: `sin`/`cos` of a scaled index for
//! placement and small modulo tables for size and timing. There is no seed and no entropy
//! source, so two calls (or two machines) agree on every field.

use crate::{
    animation::ease::Ease,
    field::clouds::generate_clouds,
    field::craters::generate_craters,
    field::element::{DecorativeElement, FieldCategory},
    field::shooting::generate_shooting_stars,
    foundation::math::{fmod, round2, wave_to_percent},
};

const TOP_FREQ: f64 = 0.37;
const LEFT_FREQ: f64 = 0.73;

/// Vertical placement shared by the star categories, in percent.
pub(crate) fn star_top(i: usize) -> f64 {
    round2(wave_to_percent((i as f64 * TOP_FREQ).sin()))
}

/// Horizontal placement shared by the star categories, in percent.
pub(crate) fn star_left(i: usize) -> f64 {
    round2(wave_to_percent((i as f64 * LEFT_FREQ).cos()))
}

fn static_star(i: usize) -> DecorativeElement {
    let size = if i % 10 == 0 {
        3.0
    } else if i % 5 == 0 {
        2.0
    } else {
        1.0
    };
    let opacity = round2(0.5 + (i as f64).sin() * 0.5).clamp(0.0, 1.0);
    DecorativeElement {
        id: FieldCategory::Static.element_id(i),
        category: FieldCategory::Static,
        size,
        top: star_top(i),
        left: star_left(i),
        opacity,
        animation_delay_s: None,
        animation_duration_s: None,
    }
}

fn twinkling_star(i: usize) -> DecorativeElement {
    let x = i as f64;
    DecorativeElement {
        id: FieldCategory::Twinkle.element_id(i),
        category: FieldCategory::Twinkle,
        size: if i % 5 == 0 { 2.0 } else { 1.0 },
        top: star_top(i),
        left: star_left(i),
        opacity: 0.9,
        animation_delay_s: Some(round2(fmod(x * 0.21, 5.0))),
        animation_duration_s: Some(round2(2.0 + fmod(x * 0.17, 3.0))),
    }
}

/// Eased position within the current twinkle cycle: 0 at the ends, 1 halfway.
fn twinkle_pulse(e: &DecorativeElement, t: f64) -> Option<f64> {
    match (e.animation_delay_s, e.animation_duration_s) {
        (Some(delay), Some(duration)) if duration > 0.0 && t >= delay => {
            let phase = ((t - delay) / duration).fract();
            let tri = 1.0 - (2.0 * phase - 1.0).abs();
            Some(Ease::InOutQuad.apply(tri))
        }
        _ => None,
    }
}

/// Opacity of a twinkling star `t` seconds after mount.
///
/// Follows the twinkle keyframes: 0.8 at the ends of each cycle, 1.0 halfway, eased in and
/// out. Before its delay elapses, or for elements without timing, the star keeps its
/// generated opacity.
pub fn twinkle_opacity_at(e: &DecorativeElement, t: f64) -> f64 {
    twinkle_pulse(e, t).map_or(e.opacity, |p| 0.8 + 0.2 * p)
}

/// Scale factor of a twinkling star `t` seconds after mount, 1.0 to 1.2 in step with
/// [`twinkle_opacity_at`].
pub fn twinkle_scale_at(e: &DecorativeElement, t: f64) -> f64 {
    twinkle_pulse(e, t).map_or(1.0, |p| 1.0 + 0.2 * p)
}

/// Generate `count` elements of `category`, in index order.
///
/// Shooting stars, clouds and craters are returned as their base element view; use the
/// dedicated generators for the full records.
pub fn generate(category: FieldCategory, count: usize) -> Vec<DecorativeElement> {
    match category {
        FieldCategory::Static => (0..count).map(static_star).collect(),
        FieldCategory::Twinkle => (0..count).map(twinkling_star).collect(),
        FieldCategory::Shooting => generate_shooting_stars(count)
            .into_iter()
            .map(|s| s.element)
            .collect(),
        FieldCategory::Cloud => generate_clouds(count)
            .iter()
            .map(|c| c.as_element())
            .collect(),
        FieldCategory::Crater => generate_craters(count)
            .iter()
            .map(|c| c.as_element())
            .collect(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/stars.rs"]
mod tests;
