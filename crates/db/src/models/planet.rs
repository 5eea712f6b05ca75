//! Row mapping for the `planets` table.

use sqlx::FromRow;
use starwars_core::planet::Planet;
use starwars_core::types::DbId;

/// A row from the `planets` table.
///
/// `created_at`/`updated_at` are not selected; they are bookkeeping only.
#[derive(Debug, Clone, FromRow)]
pub struct PlanetRow {
    pub id: DbId,
    pub name: String,
    pub climate: String,
    pub terrain: String,
}

impl From<PlanetRow> for Planet {
    fn from(row: PlanetRow) -> Self {
        Planet {
            id: row.id,
            name: row.name,
            climate: row.climate,
            terrain: row.terrain,
        }
    }
}
