use eframe::egui::{Pos2, pos2};

use crate::config::MAP_GEOMETRY;
use crate::domain::{GraphModel, Station};
use crate::surface::scene::Surface;

/// Draws the static network onto a [`Surface`]: one edge per route, then one
/// node and one label per station, both in declaration order.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceRenderer {
    /// Offset from a station's layout position to its drawn centre
    pub center_offset: f32,
    pub label_offset_y: f32,
}

impl Default for SurfaceRenderer {
    fn default() -> Self {
        Self {
            center_offset: MAP_GEOMETRY.node_center_offset,
            label_offset_y: MAP_GEOMETRY.label_offset_y,
        }
    }
}

impl SurfaceRenderer {
    pub fn render(&self, graph: &GraphModel) -> Surface {
        let mut surface = Surface::new();
        self.redraw(&mut surface, graph);
        surface
    }

    /// Full replace of the surface children. Calling it twice with the same graph
    /// yields the same surface.
    pub fn redraw(&self, surface: &mut Surface, graph: &GraphModel) {
        surface.clear();

        for route in graph.routes() {
            match (graph.station(route.from), graph.station(route.to)) {
                (Some(a), Some(b)) => {
                    surface.push_edge(route.key(), self.center_of(a), self.center_of(b));
                }
                _ => {
                    log::warn!(
                        "Skipping edge {}: endpoint is not a known station",
                        route.key()
                    );
                }
            }
        }

        for station in graph.stations() {
            let center = self.center_of(station);
            surface.push_node(station.id, &station.name, center);
            surface.push_label(
                &station.name,
                pos2(center.x, center.y + self.label_offset_y),
            );
        }
    }

    fn center_of(&self, station: &Station) -> Pos2 {
        pos2(station.x + self.center_offset, station.y + self.center_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EdgeKey, Route};

    #[test]
    fn one_element_per_declaration_in_order() {
        let graph = GraphModel::default_network();
        let surface = SurfaceRenderer::default().render(&graph);

        assert_eq!(surface.edges().len(), graph.routes().len());
        assert_eq!(surface.nodes().len(), graph.station_count());
        assert_eq!(surface.labels().len(), graph.station_count());

        for (edge, route) in surface.edges().iter().zip(graph.routes()) {
            assert_eq!(edge.key, route.key());
        }
        for (node, station) in surface.nodes().iter().zip(graph.stations()) {
            assert_eq!(node.station, station.id);
            assert_eq!(node.name, station.name);
        }
        assert!(surface.edges().iter().all(|e| e.is_default()));
    }

    #[test]
    fn edge_lookup_is_symmetric_for_every_route() {
        let graph = GraphModel::default_network();
        let surface = SurfaceRenderer::default().render(&graph);

        for route in graph.routes() {
            let forward = surface.edge_between(route.from, route.to);
            let backward = surface.edge_between(route.to, route.from);
            assert!(forward.is_some());
            assert_eq!(forward, backward);
            let edge = surface.edge(forward.unwrap()).unwrap();
            assert_eq!(edge.key, EdgeKey::new(route.from, route.to));
        }
        assert_eq!(surface.edge_between(0, 5), None);
    }

    #[test]
    fn redraw_is_idempotent() {
        let graph = GraphModel::default_network();
        let renderer = SurfaceRenderer::default();
        let mut surface = renderer.render(&graph);
        let first = surface.edges().to_vec();
        renderer.redraw(&mut surface, &graph);
        assert_eq!(surface.edges(), first.as_slice());
        assert_eq!(surface.nodes().len(), graph.station_count());
    }

    #[test]
    fn nodes_are_found_by_name() {
        let graph = GraphModel::default_network();
        let surface = SurfaceRenderer::default().render(&graph);
        let node = surface.node_by_name("Lucknow").unwrap();
        assert_eq!(surface.node(node).unwrap().station, 6);
        assert_eq!(surface.node_by_name("Chennai"), None);
    }

    #[test]
    fn route_with_unknown_endpoint_is_skipped() {
        let stations = vec![
            Station::new(0, "Delhi", 200.0, 150.0),
            Station::new(1, "Agra", 350.0, 250.0),
        ];
        let graph = GraphModel::new(stations, vec![Route::new(0, 1), Route::new(1, 9)]).unwrap();
        let surface = SurfaceRenderer::default().render(&graph);
        assert_eq!(surface.edges().len(), 1);
        assert!(surface.edge_between(0, 1).is_some());
        assert_eq!(surface.edge_between(1, 9), None);
    }

    #[test]
    fn duplicate_routes_resolve_to_first_declared_edge() {
        let stations = vec![
            Station::new(0, "Delhi", 0.0, 0.0),
            Station::new(1, "Agra", 10.0, 10.0),
        ];
        let graph = GraphModel::new(stations, vec![Route::new(0, 1), Route::new(1, 0)]).unwrap();
        let surface = SurfaceRenderer::default().render(&graph);
        assert_eq!(surface.edges().len(), 2);
        assert_eq!(surface.edge_between(1, 0).map(|e| e.0), Some(0));
    }
}
