use crate::{
    field::clouds::{Cloud, generate_clouds},
    field::craters::{Crater, generate_craters},
    field::element::{DecorativeElement, FieldCategory},
    field::shooting::{ShootingStar, generate_shooting_stars},
    field::stars::generate,
    foundation::math::Fnv1a64,
};

/// How many records of each category a field holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FieldCounts {
    pub static_stars: usize,
    pub twinkling_stars: usize,
    pub shooting_stars: usize,
    pub clouds: usize,
    pub craters: usize,
}

impl Default for FieldCounts {
    fn default() -> Self {
        Self {
            static_stars: 150,
            twinkling_stars: 40,
            shooting_stars: 6,
            clouds: 5,
            craters: 15,
        }
    }
}

impl FieldCounts {
    pub fn count(&self, category: FieldCategory) -> usize {
        match category {
            FieldCategory::Static => self.static_stars,
            FieldCategory::Twinkle => self.twinkling_stars,
            FieldCategory::Shooting => self.shooting_stars,
            FieldCategory::Cloud => self.clouds,
            FieldCategory::Crater => self.craters,
        }
    }
}

/// The decorative field generated once when a section mounts.
///
/// `elements` holds the base view of every record in category order (static, twinkle,
/// shooting, cloud, crater); the typed vectors carry the category-specific fields.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StarField {
    pub elements: Vec<DecorativeElement>,
    pub shooting_stars: Vec<ShootingStar>,
    pub clouds: Vec<Cloud>,
    pub craters: Vec<Crater>,
}

impl StarField {
    #[tracing::instrument(level = "debug")]
    pub fn generate(counts: &FieldCounts) -> Self {
        let shooting_stars = generate_shooting_stars(counts.shooting_stars);
        let clouds = generate_clouds(counts.clouds);
        let craters = generate_craters(counts.craters);

        let mut elements = Vec::with_capacity(
            FieldCategory::ALL
                .iter()
                .map(|&c| counts.count(c))
                .sum::<usize>(),
        );
        elements.extend(generate(FieldCategory::Static, counts.static_stars));
        elements.extend(generate(FieldCategory::Twinkle, counts.twinkling_stars));
        elements.extend(shooting_stars.iter().map(|s| s.element.clone()));
        elements.extend(clouds.iter().map(Cloud::as_element));
        elements.extend(craters.iter().map(Crater::as_element));

        tracing::debug!(elements = elements.len(), "generated star field");
        Self {
            elements,
            shooting_stars,
            clouds,
            craters,
        }
    }

    /// Elements of one category, in generation order.
    pub fn by_category(
        &self,
        category: FieldCategory,
    ) -> impl Iterator<Item = &DecorativeElement> + '_ {
        self.elements.iter().filter(move |e| e.category == category)
    }

    /// Stable 64-bit digest of every generated value.
    ///
    /// Two fields with equal fingerprints render identically; used to check that a field
    /// built in one process matches one built elsewhere.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        h.write_u64(self.elements.len() as u64);
        for e in &self.elements {
            e.write_fingerprint(&mut h);
        }
        for s in &self.shooting_stars {
            s.write_fingerprint(&mut h);
        }
        for c in &self.clouds {
            h.write_u8(c.direction as u8);
            for v in [c.speed, c.scale] {
                h.write_f64(v);
            }
        }
        for c in &self.craters {
            h.write_u8(c.depth);
            h.write_f64(c.highlight_x);
            h.write_f64(c.highlight_y);
        }
        h.finish()
    }
}

/// Elements of `category` from a field that may not exist yet.
///
/// A missing field yields nothing, so a renderer running before the field is generated
/// draws an empty sky instead of failing.
pub fn elements_or_empty(
    field: Option<&StarField>,
    category: FieldCategory,
) -> impl Iterator<Item = &DecorativeElement> {
    field.into_iter().flat_map(move |f| f.by_category(category))
}

#[cfg(test)]
#[path = "../../tests/unit/field/starfield.rs"]
mod tests;
