use serde::{Deserialize, Serialize};

/// Dense, zero-based station index. Doubles as a direct index into the graph.
pub type StationId = usize;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    /// Layout coordinates, not geographic
    pub x: f32,
    pub y: f32,
}

impl Station {
    pub fn new(id: StationId, name: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            id,
            name: name.into(),
            x,
            y,
        }
    }
}

/// Undirected connection between two stations.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub from: StationId,
    pub to: StationId,
}

impl Route {
    pub fn new(from: StationId, to: StationId) -> Self {
        Self { from, to }
    }

    /// Order-independent identity of the route
    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(self.from, self.to)
    }
}

/// Normalised `(min, max)` endpoint pair. `(a, b)` and `(b, a)` produce the same key.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    pub low: StationId,
    pub high: StationId,
}

impl EdgeKey {
    pub fn new(a: StationId, b: StationId) -> Self {
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }
}

impl std::fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_key_ignores_argument_order() {
        assert_eq!(EdgeKey::new(3, 1), EdgeKey::new(1, 3));
        assert_eq!(Route::new(7, 6).key(), Route::new(6, 7).key());
        assert_eq!(EdgeKey::new(5, 2).to_string(), "2-5");
    }
}
