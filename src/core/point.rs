//! Steuerpunkt: Position, Radius, Hitbox und Darstellung.

use crate::shared::{LabelStyle, Rgba, Surface, TextAnchor};
use glam::Vec2;

/// Herkunft eines Steuerpunkts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointKind {
    /// Per Doppelklick gesetzt
    Placed,
    /// Per Schließungsformel aus den ersten drei Punkten berechnet
    Derived,
}

/// Verschiebbarer, zeichenbarer Steuerpunkt.
///
/// Hat keine eigene Identität; referenziert wird er über seinen Index im
/// [`Parallelogram`](super::Parallelogram).
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    /// Position in Flächen-Koordinaten
    pub position: Vec2,
    radius: f32,
    extents: Vec2,
    /// Füllfarbe
    pub fill: Rgba,
    /// Herkunft (gesetzt oder berechnet)
    pub kind: PointKind,
}

impl Point {
    /// Erstellt einen Punkt.
    ///
    /// Die Hitbox-Ausdehnung entspricht dem Radius; bei Radius 0 wird 1 verwendet.
    pub fn new(position: Vec2, radius: f32, fill: Rgba, kind: PointKind) -> Self {
        let extent = if radius != 0.0 { radius } else { 1.0 };
        Self {
            position,
            radius,
            extents: Vec2::splat(extent),
            fill,
            kind,
        }
    }

    /// Radius in Pixeln.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Hitbox-Ausdehnung nach rechts/unten.
    pub fn extents(&self) -> Vec2 {
        self.extents
    }

    /// Prüft, ob `pos` in der Hitbox liegt.
    ///
    /// Die Box reicht nach links/oben um `radius`, nach rechts/unten um `extents`.
    pub fn contains(&self, pos: Vec2) -> bool {
        self.position.x - self.radius <= pos.x
            && self.position.x + self.extents.x >= pos.x
            && self.position.y - self.radius <= pos.y
            && self.position.y + self.extents.y >= pos.y
    }

    /// Sichtbarkeitstest gegen eine Fläche der Größe `size`.
    ///
    /// Übersprungen wird ein Punkt nur, wenn er gleichzeitig jenseits aller
    /// vier Ränder liegt.
    pub fn is_visible_in(&self, size: Vec2) -> bool {
        self.position.x < size.x
            || self.position.y < size.y
            || self.position.x + self.extents.x > 0.0
            || self.position.y + self.extents.y > 0.0
    }

    /// Koordinaten-Beschriftung, z.B. `(x: 10, y: 50)`.
    pub fn label(&self) -> String {
        format!("(x: {:.0}, y: {:.0})", self.position.x, self.position.y)
    }

    /// Zeichnet Kreisscheibe und Koordinaten-Beschriftung.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, label: &LabelStyle) {
        surface.fill_circle(self.position, self.radius, self.fill);
        surface.text(
            self.position - Vec2::splat(label.offset),
            TextAnchor::LeftBottom,
            &self.label(),
            label.font_size,
            label.color,
        );
    }
}
