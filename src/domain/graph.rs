use thiserror::Error;

use crate::config::{DEFAULT_ROUTES, DEFAULT_STATIONS};
use crate::domain::station::{EdgeKey, Route, Station, StationId};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("station at position {position} has id {found}; ids must be dense and zero-based")]
    NonDenseId { position: usize, found: StationId },
    #[error("station names must be unique, '{0}' appears twice")]
    DuplicateName(String),
}

/// Static station/route description, built once and never mutated.
#[derive(Debug, Clone)]
pub struct GraphModel {
    stations: Vec<Station>,
    routes: Vec<Route>,
}

impl GraphModel {
    /// Stations must be given in id order starting at 0. Routes are kept in
    /// declaration order even if an endpoint is unknown; the renderer degrades
    /// those instead of failing here.
    pub fn new(stations: Vec<Station>, routes: Vec<Route>) -> Result<Self, GraphError> {
        for (position, station) in stations.iter().enumerate() {
            if station.id != position {
                return Err(GraphError::NonDenseId {
                    position,
                    found: station.id,
                });
            }
            if stations[..position].iter().any(|s| s.name == station.name) {
                return Err(GraphError::DuplicateName(station.name.clone()));
            }
        }

        for route in &routes {
            if route.from >= stations.len() || route.to >= stations.len() {
                log::warn!(
                    "Route {}->{} references a station outside 0..{}",
                    route.from,
                    route.to,
                    stations.len()
                );
            }
        }

        Ok(Self { stations, routes })
    }

    /// The network shipped in `config::layout`
    pub fn default_network() -> Self {
        let stations = DEFAULT_STATIONS
            .iter()
            .map(|&(id, name, x, y)| Station::new(id, name, x, y))
            .collect();
        let routes = DEFAULT_ROUTES
            .iter()
            .map(|&(from, to)| Route::new(from, to))
            .collect();
        // The const tables are dense by construction
        Self { stations, routes }
    }

    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(id)
    }

    pub fn station_name(&self, id: StationId) -> Option<&str> {
        self.station(id).map(|s| s.name.as_str())
    }

    /// Display name, or a placeholder that makes the inconsistency visible
    pub fn station_label(&self, id: StationId) -> String {
        match self.station_name(id) {
            Some(name) => name.to_string(),
            None => {
                log::warn!("Unknown station id {} referenced by remote data", id);
                format!("Station #{}", id)
            }
        }
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn contains(&self, id: StationId) -> bool {
        id < self.stations.len()
    }

    /// First declared route joining `a` and `b`, in either direction
    pub fn route_between(&self, a: StationId, b: StationId) -> Option<&Route> {
        let key = EdgeKey::new(a, b);
        self.routes.iter().find(|r| r.key() == key)
    }
}
