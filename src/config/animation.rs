//! Path animation timing and the visual attributes it toggles.

use eframe::egui::Color32;

/// Resting look of every edge and node after a reset
pub struct DefaultStyle {
    pub edge_color: Color32,
    pub edge_width: f32,
    pub edge_opacity: f32,
    pub node_fill: Color32,
    pub node_scale: f32,
}

/// Look applied to the highlighted hops of a path
pub struct HighlightStyle {
    pub edge_width: f32,
    pub edge_opacity: f32,
    pub node_scale: f32,
}

/// Colours used for the two route query results
pub struct PathColors {
    pub fastest: Color32,
    pub cheapest: Color32,
}

pub struct AnimationConfig {
    /// Delay between consecutive hops
    pub step_ms: u64,
    /// Time a highlighted node stays enlarged
    pub half_step_ms: u64,
    pub default: DefaultStyle,
    pub highlight: HighlightStyle,
    pub paths: PathColors,
}

pub const ANIMATION: AnimationConfig = AnimationConfig {
    step_ms: 300,
    half_step_ms: 150,
    default: DefaultStyle {
        edge_color: Color32::from_rgb(0x66, 0x7e, 0xea),
        edge_width: 4.0,
        edge_opacity: 0.3,
        node_fill: Color32::from_rgb(0x66, 0x7e, 0xea),
        node_scale: 1.0,
    },
    highlight: HighlightStyle {
        edge_width: 6.0,
        edge_opacity: 1.0,
        node_scale: 1.2,
    },
    paths: PathColors {
        fastest: Color32::from_rgb(0x21, 0x96, 0xf3),
        cheapest: Color32::from_rgb(0xff, 0x98, 0x00),
    },
};
