use eframe::egui::{Align2, FontId, Pos2, Rect, Sense, Stroke, Ui, Vec2, pos2, vec2};

use crate::config::MAP_GEOMETRY;
use crate::surface::Surface;
use crate::ui::config::UI_CONFIG;

/// Maps surface coordinates into the allocated screen rect, keeping aspect ratio.
struct MapTransform {
    origin: Pos2,
    offset: Vec2,
    scale: f32,
}

impl MapTransform {
    fn fit(surface: &Surface, target: Rect) -> Self {
        let pad = MAP_GEOMETRY.node_radius * 2.0 + MAP_GEOMETRY.margin;
        let mut bounds = Rect::NOTHING;
        for node in surface.nodes() {
            bounds.extend_with(node.center);
        }
        for label in surface.labels() {
            bounds.extend_with(label.anchor);
        }
        if !bounds.is_positive() {
            bounds = Rect::from_min_size(Pos2::ZERO, vec2(1.0, 1.0));
        }
        let bounds = bounds.expand(pad);

        let scale = (target.width() / bounds.width())
            .min(target.height() / bounds.height())
            .max(0.1);
        let used = bounds.size() * scale;
        let offset = (target.size() - used) * 0.5;

        Self {
            origin: bounds.min,
            offset: target.min.to_vec2() + offset,
            scale,
        }
    }

    fn apply(&self, p: Pos2) -> Pos2 {
        pos2(
            (p.x - self.origin.x) * self.scale,
            (p.y - self.origin.y) * self.scale,
        ) + self.offset
    }
}

/// Paints the current state of the surface: edges first, then nodes and labels.
pub fn paint_surface(ui: &mut Ui, surface: &Surface) {
    let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
    let rect = response.rect;
    painter.rect_filled(rect, 8.0, UI_CONFIG.colors.map_background);

    let transform = MapTransform::fit(surface, rect);

    for edge in surface.edges() {
        let color = edge.stroke.gamma_multiply(edge.opacity);
        painter.line_segment(
            [transform.apply(edge.start), transform.apply(edge.end)],
            Stroke::new(edge.width * transform.scale, color),
        );
    }

    for node in surface.nodes() {
        let radius = MAP_GEOMETRY.node_radius * node.scale * transform.scale;
        let center = transform.apply(node.center);
        painter.circle_filled(center, radius, node.fill);
        painter.circle_stroke(center, radius, Stroke::new(2.0, UI_CONFIG.colors.map_background));
    }

    let font = FontId::proportional((13.0 * transform.scale).clamp(9.0, 18.0));
    for label in surface.labels() {
        painter.text(
            transform.apply(label.anchor),
            Align2::CENTER_TOP,
            &label.text,
            font.clone(),
            UI_CONFIG.colors.node_label,
        );
    }
}
