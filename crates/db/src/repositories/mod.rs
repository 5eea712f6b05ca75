mod errors;
mod planet_repo;

pub use errors::classify_sqlx_error;
pub use planet_repo::PgPlanetRepo;
