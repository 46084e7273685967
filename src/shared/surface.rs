//! Zeichenflächen-Vertrag zwischen Core/Render und dem Host.
//!
//! Die Fläche arbeitet in lokalen Koordinaten (Ursprung oben links, Y nach unten).

use glam::Vec2;

/// RGBA-Farbe mit Komponenten im Bereich 0.0..=1.0.
pub type Rgba = [f32; 4];

/// Linienstil für Konturen, Kanten und Kurven
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Linienbreite in Pixeln
    pub width: f32,
    /// Linienfarbe
    pub color: Rgba,
}

impl StrokeStyle {
    /// Erstellt einen Linienstil.
    pub const fn new(width: f32, color: Rgba) -> Self {
        Self { width, color }
    }
}

/// Ausrichtung eines Texts relativ zu seiner Ankerposition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Anker liegt auf der Grundlinie am linken Rand (Canvas-Standard)
    LeftBottom,
    /// Anker liegt in der Mitte des Texts
    Center,
}

/// Zeichenprimitive, die eine Fläche anbieten muss.
pub trait Surface {
    /// Größe der Fläche in Pixeln (Breite, Höhe).
    fn size(&self) -> Vec2;

    /// Leert die komplette Fläche.
    fn clear(&mut self);

    /// Zeichnet eine gefüllte Kreisscheibe.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    /// Zeichnet einen Kreisring.
    fn stroke_circle(&mut self, center: Vec2, radius: f32, stroke: StrokeStyle);

    /// Zeichnet eine gerade Linie.
    fn line(&mut self, from: Vec2, to: Vec2, stroke: StrokeStyle);

    /// Zeichnet einen Text.
    fn text(&mut self, pos: Vec2, anchor: TextAnchor, text: &str, font_size: f32, color: Rgba);

    /// Zeichnet eine quadratische Bézier-Kurve.
    fn quadratic_bezier(&mut self, start: Vec2, control: Vec2, end: Vec2, stroke: StrokeStyle);
}
