//! [`Surface`]-Implementierung auf einem `egui::Painter`.

use crate::shared::{Rgba, StrokeStyle, Surface, TextAnchor};
use glam::Vec2;

/// Zeichenfläche auf einem egui-Rechteck.
///
/// Flächen-Koordinaten sind relativ zu `rect.min`.
pub struct EguiSurface<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
    background: Rgba,
}

impl<'a> EguiSurface<'a> {
    /// Bindet die Fläche an `rect` des übergebenen Painters.
    pub fn new(painter: &'a egui::Painter, rect: egui::Rect, background: Rgba) -> Self {
        Self {
            painter,
            rect,
            background,
        }
    }

    fn to_screen(&self, pos: Vec2) -> egui::Pos2 {
        self.rect.min + egui::vec2(pos.x, pos.y)
    }
}

/// Konvertiert eine RGBA-Farbe (0.0..=1.0) nach `egui::Color32`.
pub fn to_color32(color: Rgba) -> egui::Color32 {
    let channel = |value: f32| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        channel(color[3]),
    )
}

fn to_stroke(stroke: StrokeStyle) -> egui::Stroke {
    egui::Stroke::new(stroke.width, to_color32(stroke.color))
}

impl Surface for EguiSurface<'_> {
    fn size(&self) -> Vec2 {
        Vec2::new(self.rect.width(), self.rect.height())
    }

    fn clear(&mut self) {
        self.painter
            .rect_filled(self.rect, 0.0, to_color32(self.background));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.painter
            .circle_filled(self.to_screen(center), radius, to_color32(color));
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, stroke: StrokeStyle) {
        self.painter
            .circle_stroke(self.to_screen(center), radius, to_stroke(stroke));
    }

    fn line(&mut self, from: Vec2, to: Vec2, stroke: StrokeStyle) {
        self.painter.line_segment(
            [self.to_screen(from), self.to_screen(to)],
            to_stroke(stroke),
        );
    }

    fn text(&mut self, pos: Vec2, anchor: TextAnchor, text: &str, font_size: f32, color: Rgba) {
        let align = match anchor {
            TextAnchor::LeftBottom => egui::Align2::LEFT_BOTTOM,
            TextAnchor::Center => egui::Align2::CENTER_CENTER,
        };
        self.painter.text(
            self.to_screen(pos),
            align,
            text,
            egui::FontId::proportional(font_size),
            to_color32(color),
        );
    }

    fn quadratic_bezier(&mut self, start: Vec2, control: Vec2, end: Vec2, stroke: StrokeStyle) {
        let shape = egui::epaint::QuadraticBezierShape::from_points_stroke(
            [
                self.to_screen(start),
                self.to_screen(control),
                self.to_screen(end),
            ],
            false,
            egui::Color32::TRANSPARENT,
            to_stroke(stroke),
        );
        self.painter.add(shape);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_color32_scales_and_clamps_channels() {
        assert_eq!(
            to_color32([1.0, 0.0, 0.5, 1.0]),
            egui::Color32::from_rgba_unmultiplied(255, 0, 128, 255)
        );
        assert_eq!(
            to_color32([2.0, -1.0, 0.0, 1.0]),
            egui::Color32::from_rgba_unmultiplied(255, 0, 0, 255)
        );
    }
}
