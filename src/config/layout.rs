//! The fixed station network drawn on the map, and the painter geometry.
//!
//! Routes must match the ones the booking service was started with, otherwise
//! computed paths will reference hops that were never drawn.

/// (id, name, x, y) in layout coordinates, declaration order == id order
pub const DEFAULT_STATIONS: &[(usize, &str, f32, f32)] = &[
    (0, "Delhi", 200.0, 150.0),
    (1, "Agra", 350.0, 250.0),
    (2, "Jaipur", 50.0, 300.0),
    (3, "Mumbai", 200.0, 400.0),
    (4, "Pune", 400.0, 450.0),
    (5, "Goa", 550.0, 350.0),
    (6, "Lucknow", 550.0, 200.0),
    (7, "Muzaffarnagar", 380.0, 50.0),
];

/// Undirected (from, to) pairs
pub const DEFAULT_ROUTES: &[(usize, usize)] = &[
    (0, 1),
    (0, 2),
    (1, 2),
    (1, 3),
    (2, 3),
    (3, 4),
    (3, 5),
    (4, 5),
    (0, 7),
    (7, 6),
    (6, 1),
];

pub struct MapGeometry {
    /// Station layout positions are the top-left of the node box; lines join the centres
    pub node_center_offset: f32,
    pub node_radius: f32,
    pub label_offset_y: f32,
    /// Padding around the whole map inside the panel
    pub margin: f32,
}

pub const MAP_GEOMETRY: MapGeometry = MapGeometry {
    node_center_offset: 35.0,
    node_radius: 22.0,
    label_offset_y: 34.0,
    margin: 10.0,
};
