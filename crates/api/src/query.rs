//! Query parameter types for API handlers.

/// Optional filters for `GET /planets` (`?terrain=&climate=`).
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PlanetListParams {
    pub terrain: Option<String>,
    pub climate: Option<String>,
}

impl PlanetListParams {
    /// Collect filters from raw query pairs.
    ///
    /// A repeated key keeps its first value; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "terrain" => &mut params.terrain,
                "climate" => &mut params.climate,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }
}
