use crate::{
    field::element::{DecorativeElement, FieldCategory},
    foundation::math::{fmod, round2},
};

/// One fading particle behind a shooting star's head.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TrailParticle {
    pub size: f64,
    /// Distance along the tail, in pixels.
    pub distance_from_head: f64,
    /// Deviation from the streak direction, in degrees.
    pub angle_offset_deg: f64,
    pub opacity: f64,
    pub delay_s: f64,
}

/// A streak crossing the upper sky.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShootingStar {
    #[serde(flatten)]
    pub element: DecorativeElement,
    /// Direction of travel below the horizontal, in degrees.
    pub angle_deg: f64,
    /// Tail length in pixels.
    pub tail_length: f64,
    pub trail: Vec<TrailParticle>,
}

impl ShootingStar {
    pub(crate) fn write_fingerprint(&self, h: &mut crate::foundation::math::Fnv1a64) {
        self.element.write_fingerprint(h);
        h.write_f64(self.angle_deg);
        h.write_f64(self.tail_length);
        h.write_u64(self.trail.len() as u64);
        for p in &self.trail {
            for v in [
                p.size,
                p.distance_from_head,
                p.angle_offset_deg,
                p.opacity,
                p.delay_s,
            ] {
                h.write_f64(v);
            }
        }
    }
}

/// Trail length for star `i`: between 3 and 6 particles.
pub(crate) fn trail_len(i: usize) -> usize {
    3 + i % 4
}

fn trail(i: usize, head_size: f64, tail_length: f64) -> Vec<TrailParticle> {
    let n = trail_len(i);
    let slots = (n + 1) as f64;
    (0..n)
        .map(|j| {
            let k = (j + 1) as f64;
            let wobble = ((i + j) % 5) as f64 - 2.0;
            TrailParticle {
                size: round2((head_size - 0.4 * k).max(0.5)),
                distance_from_head: round2(tail_length * k / slots),
                angle_offset_deg: round2(wobble * 1.5),
                opacity: round2(0.8 * (1.0 - k / slots)),
                delay_s: round2(0.05 * k),
            }
        })
        .collect()
}

fn shooting_star(i: usize) -> ShootingStar {
    let x = i as f64;
    let size = 2.0 + (i % 2) as f64;
    let tail_length = round2(80.0 + fmod(x * 37.0, 120.0));
    let element = DecorativeElement {
        id: FieldCategory::Shooting.element_id(i),
        category: FieldCategory::Shooting,
        size,
        top: round2(fmod(x * 17.3, 40.0) + 5.0),
        left: round2(fmod(x * 23.7, 70.0) + 10.0),
        opacity: round2(0.7 + (i % 4) as f64 * 0.1),
        animation_delay_s: Some(round2(fmod(x * 1.7, 8.0) + 1.0)),
        animation_duration_s: Some(round2(1.2 + fmod(x * 0.3, 1.5))),
    };
    ShootingStar {
        element,
        angle_deg: round2(15.0 + fmod(x * 13.0, 30.0)),
        tail_length,
        trail: trail(i, size, tail_length),
    }
}

/// Generate `count` shooting stars, in index order.
pub fn generate_shooting_stars(count: usize) -> Vec<ShootingStar> {
    (0..count).map(shooting_star).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/field/shooting.rs"]
mod tests;
