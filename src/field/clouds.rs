use crate::{
    field::element::{DecorativeElement, FieldCategory},
    foundation::math::{fmod, round2},
};

/// A cloud puff drifting horizontally across the sky.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Cloud {
    pub id: String,
    /// Width in pixels.
    pub size: f64,
    pub top: f64,
    pub initial_left: f64,
    /// `1` drifts right, `-1` drifts left.
    pub direction: i8,
    /// Drift speed in percent of the container width per second.
    pub speed: f64,
    pub delay_s: f64,
    pub opacity: f64,
    pub scale: f64,
}

impl Cloud {
    /// Horizontal position after `secs` seconds, wrapped into `[0, 100)`.
    ///
    /// The cloud holds still until its delay has elapsed.
    pub fn left_at(&self, secs: f64) -> f64 {
        let moving = (secs - self.delay_s).max(0.0);
        let left = self.initial_left + f64::from(self.direction) * self.speed * moving;
        // rem_euclid of a tiny negative rounds up to exactly 100.
        let wrapped = left.rem_euclid(100.0);
        if wrapped >= 100.0 { 0.0 } else { wrapped }
    }

    /// Seconds for one full crossing of the container.
    pub fn crossing_secs(&self) -> f64 {
        100.0 / self.speed
    }

    pub(crate) fn as_element(&self) -> DecorativeElement {
        DecorativeElement {
            id: self.id.clone(),
            category: FieldCategory::Cloud,
            size: self.size,
            top: self.top,
            left: self.initial_left,
            opacity: self.opacity,
            animation_delay_s: Some(self.delay_s),
            animation_duration_s: Some(round2(self.crossing_secs())),
        }
    }
}

fn cloud(i: usize) -> Cloud {
    let x = i as f64;
    Cloud {
        id: FieldCategory::Cloud.element_id(i),
        size: round2(80.0 + fmod(x * 29.0, 120.0)),
        top: round2(fmod(x * 13.7, 60.0) + 5.0),
        initial_left: round2(fmod(x * 31.3, 100.0)),
        direction: if i % 2 == 0 { 1 } else { -1 },
        speed: round2(0.5 + (i % 5) as f64 * 0.25),
        delay_s: round2(fmod(x * 2.3, 10.0)),
        opacity: round2(0.4 + (i % 4) as f64 * 0.15),
        scale: round2(0.6 + (i % 3) as f64 * 0.2),
    }
}

/// Generate `count` clouds, in index order.
pub fn generate_clouds(count: usize) -> Vec<Cloud> {
    (0..count).map(cloud).collect()
}
