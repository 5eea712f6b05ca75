use starwars_core::service::PlanetService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the service holds its repository behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Planet operations over the configured repository.
    pub planets: PlanetService,
}
