//! Query-by-example construction for planet listing.
//!
//! A [`PlanetExample`] is a partially populated planet. [`PlanetFilter::from_example`]
//! turns it into a predicate that requires exact, case-sensitive equality on
//! every populated field and ignores the rest. The id never participates.

use crate::planet::{is_storable_text, Planet};
use crate::types::DbId;

/// A template planet. Unset fields impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanetExample {
    pub id: Option<DbId>,
    pub name: Option<String>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
}

impl PlanetExample {
    /// Template used by the list endpoint: only terrain and climate.
    pub fn from_terrain_and_climate(terrain: Option<String>, climate: Option<String>) -> Self {
        Self {
            terrain,
            climate,
            ..Self::default()
        }
    }
}

/// A matchable planet column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanetColumn {
    Name,
    Climate,
    Terrain,
}

impl PlanetColumn {
    pub fn as_str(self) -> &'static str {
        match self {
            PlanetColumn::Name => "name",
            PlanetColumn::Climate => "climate",
            PlanetColumn::Terrain => "terrain",
        }
    }

    fn value_of(self, planet: &Planet) -> &str {
        match self {
            PlanetColumn::Name => &planet.name,
            PlanetColumn::Climate => &planet.climate,
            PlanetColumn::Terrain => &planet.terrain,
        }
    }
}

/// Equality condition on one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub column: PlanetColumn,
    pub value: String,
}

/// Conjunction of equality conditions built from a [`PlanetExample`].
///
/// An empty filter matches every planet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanetFilter {
    conditions: Vec<Condition>,
}

impl PlanetFilter {
    /// Filter that matches everything.
    pub fn all() -> Self {
        Self::default()
    }

    /// Build a filter from a template.
    ///
    /// Conditions are emitted in column order (name, climate, terrain).
    /// Empty strings count as unset.
    pub fn from_example(example: &PlanetExample) -> Self {
        let candidates = [
            (PlanetColumn::Name, &example.name),
            (PlanetColumn::Climate, &example.climate),
            (PlanetColumn::Terrain, &example.terrain),
        ];

        let conditions = candidates
            .into_iter()
            .filter_map(|(column, value)| match value.as_deref() {
                Some(v) if !v.is_empty() => Some(Condition {
                    column,
                    value: v.to_string(),
                }),
                _ => None,
            })
            .collect();

        Self { conditions }
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn is_unconstrained(&self) -> bool {
        self.conditions.is_empty()
    }

    /// False when some condition value can never appear in storage, so the
    /// filter is known to match nothing.
    pub fn is_satisfiable(&self) -> bool {
        self.conditions.iter().all(|c| is_storable_text(&c.value))
    }

    /// Evaluate the filter against a planet.
    pub fn matches(&self, planet: &Planet) -> bool {
        self.conditions
            .iter()
            .all(|c| c.column.value_of(planet) == c.value)
    }
}
