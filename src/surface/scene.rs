//! Retained drawing surface: the visual elements of the map and the handles
//! used to mutate them after they are drawn.

use std::collections::HashMap;

use eframe::egui::{Color32, Pos2};

use crate::config::ANIMATION;
use crate::domain::{EdgeKey, StationId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone, PartialEq)]
pub struct VisualEdge {
    pub id: EdgeId,
    /// Stable identity attached at creation; lookups never rely on position
    pub key: EdgeKey,
    pub start: Pos2,
    pub end: Pos2,
    pub stroke: Color32,
    pub width: f32,
    pub opacity: f32,
    pub active: bool,
}

impl VisualEdge {
    fn reset(&mut self) {
        self.stroke = ANIMATION.default.edge_color;
        self.width = ANIMATION.default.edge_width;
        self.opacity = ANIMATION.default.edge_opacity;
        self.active = false;
    }

    pub fn is_default(&self) -> bool {
        !self.active
            && self.stroke == ANIMATION.default.edge_color
            && self.width == ANIMATION.default.edge_width
            && self.opacity == ANIMATION.default.edge_opacity
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VisualNode {
    pub id: NodeId,
    pub station: StationId,
    /// Tag used for lookup by name
    pub name: String,
    pub center: Pos2,
    pub fill: Color32,
    pub scale: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VisualLabel {
    pub text: String,
    pub anchor: Pos2,
}

/// A single deferred change to the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceMutation {
    HighlightNode { node: NodeId, color: Color32 },
    DescaleNode { node: NodeId },
    HighlightEdge { edge: EdgeId, color: Color32 },
}

/// The persistent drawing surface. Only the renderer replaces its children;
/// only the animator mutates them afterwards.
#[derive(Debug, Clone, Default)]
pub struct Surface {
    edges: Vec<VisualEdge>,
    nodes: Vec<VisualNode>,
    labels: Vec<VisualLabel>,
    edge_by_key: HashMap<EdgeKey, EdgeId>,
    node_by_name: HashMap<String, NodeId>,
    node_by_station: HashMap<StationId, NodeId>,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every child element and handle
    pub fn clear(&mut self) {
        self.edges.clear();
        self.nodes.clear();
        self.labels.clear();
        self.edge_by_key.clear();
        self.node_by_name.clear();
        self.node_by_station.clear();
    }

    pub(crate) fn push_edge(&mut self, key: EdgeKey, start: Pos2, end: Pos2) -> EdgeId {
        let id = EdgeId(self.edges.len());
        let mut edge = VisualEdge {
            id,
            key,
            start,
            end,
            stroke: Color32::TRANSPARENT,
            width: 0.0,
            opacity: 0.0,
            active: false,
        };
        edge.reset();
        self.edges.push(edge);
        // First declared route wins for duplicate endpoint pairs
        self.edge_by_key.entry(key).or_insert(id);
        id
    }

    pub(crate) fn push_node(&mut self, station: StationId, name: &str, center: Pos2) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(VisualNode {
            id,
            station,
            name: name.to_string(),
            center,
            fill: ANIMATION.default.node_fill,
            scale: ANIMATION.default.node_scale,
        });
        self.node_by_name.entry(name.to_string()).or_insert(id);
        self.node_by_station.entry(station).or_insert(id);
        id
    }

    pub(crate) fn push_label(&mut self, text: &str, anchor: Pos2) {
        self.labels.push(VisualLabel {
            text: text.to_string(),
            anchor,
        });
    }

    pub fn edges(&self) -> &[VisualEdge] {
        &self.edges
    }

    pub fn nodes(&self) -> &[VisualNode] {
        &self.nodes
    }

    pub fn labels(&self) -> &[VisualLabel] {
        &self.labels
    }

    pub fn edge(&self, id: EdgeId) -> Option<&VisualEdge> {
        self.edges.get(id.0)
    }

    pub fn node(&self, id: NodeId) -> Option<&VisualNode> {
        self.nodes.get(id.0)
    }

    /// Resolves the visual edge joining two stations regardless of argument order
    pub fn edge_between(&self, a: StationId, b: StationId) -> Option<EdgeId> {
        self.edge_by_key.get(&EdgeKey::new(a, b)).copied()
    }

    pub fn node_by_name(&self, name: &str) -> Option<NodeId> {
        self.node_by_name.get(name).copied()
    }

    pub fn node_for_station(&self, station: StationId) -> Option<NodeId> {
        self.node_by_station.get(&station).copied()
    }

    /// Reverts every edge and node to the resting style
    pub fn reset_styles(&mut self) {
        for edge in &mut self.edges {
            edge.reset();
        }
        for node in &mut self.nodes {
            node.fill = ANIMATION.default.node_fill;
            node.scale = ANIMATION.default.node_scale;
        }
    }

    /// Applies a deferred mutation. Handles from a previous render are ignored.
    pub fn apply(&mut self, mutation: SurfaceMutation) {
        match mutation {
            SurfaceMutation::HighlightNode { node, color } => {
                if let Some(n) = self.nodes.get_mut(node.0) {
                    n.fill = color;
                    n.scale = ANIMATION.highlight.node_scale;
                }
            }
            SurfaceMutation::DescaleNode { node } => {
                if let Some(n) = self.nodes.get_mut(node.0) {
                    n.scale = ANIMATION.default.node_scale;
                }
            }
            SurfaceMutation::HighlightEdge { edge, color } => {
                if let Some(e) = self.edges.get_mut(edge.0) {
                    e.stroke = color;
                    e.width = ANIMATION.highlight.edge_width;
                    e.opacity = ANIMATION.highlight.edge_opacity;
                    e.active = true;
                }
            }
        }
    }

    pub fn active_edges(&self) -> impl Iterator<Item = &VisualEdge> {
        self.edges.iter().filter(|e| e.active)
    }
}
