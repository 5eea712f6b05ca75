//! Translation of sqlx failures into [`RepositoryError`].

use starwars_core::planet::CreatePlanet;
use starwars_core::repository::{ConstraintViolation, RepositoryError};

/// PostgreSQL SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";
/// PostgreSQL SQLSTATE for `check_violation`.
const CHECK_VIOLATION: &str = "23514";
/// PostgreSQL SQLSTATE for `not_null_violation`.
const NOT_NULL_VIOLATION: &str = "23502";

const REQUIRED_FIELDS: [&str; 3] = ["name", "climate", "terrain"];

/// Classify an error raised while inserting `input`.
///
/// - Unique violations on `uq_planets_name` become `DuplicateName`.
/// - Check (`ck_planets_<field>_not_empty`) and not-null violations become
///   `MissingField`.
/// - Everything else is a storage error.
pub fn classify_sqlx_error(err: sqlx::Error, input: &CreatePlanet) -> RepositoryError {
    if let sqlx::Error::Database(db_err) = &err {
        let code = db_err.code();
        if let Some(violation) = constraint_violation(code.as_deref(), db_err.constraint(), input)
        {
            tracing::debug!(constraint = ?db_err.constraint(), %violation, "Insert rejected");
            return violation.into();
        }
    }
    storage_error(err)
}

/// Wrap an unexpected sqlx failure, logging the detail.
pub(crate) fn storage_error(err: sqlx::Error) -> RepositoryError {
    tracing::error!(error = %err, "Database error");
    RepositoryError::Storage(err.to_string())
}

fn constraint_violation(
    code: Option<&str>,
    constraint: Option<&str>,
    input: &CreatePlanet,
) -> Option<ConstraintViolation> {
    match code? {
        UNIQUE_VIOLATION if constraint == Some("uq_planets_name") => {
            Some(ConstraintViolation::DuplicateName(input.name.clone()))
        }
        CHECK_VIOLATION | NOT_NULL_VIOLATION => {
            let field = constraint
                .and_then(field_from_constraint)
                .or_else(|| input.first_missing_field())
                .unwrap_or("name");
            Some(ConstraintViolation::MissingField(field))
        }
        _ => None,
    }
}

fn field_from_constraint(constraint: &str) -> Option<&'static str> {
    let field = constraint
        .strip_prefix("ck_planets_")?
        .strip_suffix("_not_empty")?;
    REQUIRED_FIELDS.into_iter().find(|f| *f == field)
}
