//! Malt eine [`RenderScene`] auf eine beliebige [`Surface`].

use crate::core::geometry;
use crate::shared::options::PLACEHOLDER_TEXT;
use crate::shared::{RenderScene, StrokeStyle, Surface, TextAnchor};
use glam::Vec2;

/// Zeichnet den kompletten Frame: Punkte, Selektion, Kanten, Kurve.
pub fn paint_scene<S: Surface + ?Sized>(scene: &RenderScene, surface: &mut S) {
    surface.clear();

    if scene.points.is_empty() {
        paint_placeholder(scene, surface);
    }

    let size = surface.size();
    let label = scene.options.label_style();
    for point in scene.points.iter().filter(|p| p.is_visible_in(size)) {
        point.draw(surface, &label);
    }

    if let Some(selected) = scene.selected_point() {
        surface.stroke_circle(
            selected.position,
            selected.radius(),
            scene.options.selection_stroke(),
        );
    }

    if let Some(vertices) = scene.vertices() {
        if scene.show_outline {
            paint_outline(&vertices, scene.options.outline_stroke(), surface);
        }
        if scene.show_inscribed_curve {
            paint_inscribed_curve(&vertices, scene.options.curve_stroke(), surface);
        }
    }
}

fn paint_placeholder<S: Surface + ?Sized>(scene: &RenderScene, surface: &mut S) {
    let center = surface.size() * 0.5;
    surface.text(
        center,
        TextAnchor::Center,
        PLACEHOLDER_TEXT,
        scene.options.placeholder_font_size,
        scene.options.label_color,
    );
}

fn paint_outline<S: Surface + ?Sized>(vertices: &[Vec2; 4], stroke: StrokeStyle, surface: &mut S) {
    for (from, to) in geometry::closed_edges(vertices) {
        surface.line(from, to, stroke);
    }
}

fn paint_inscribed_curve<S: Surface + ?Sized>(
    vertices: &[Vec2; 4],
    stroke: StrokeStyle,
    surface: &mut S,
) {
    for segment in geometry::inscribed_curve(vertices) {
        surface.quadratic_bezier(segment.start, segment.control, segment.end, stroke);
    }
}
