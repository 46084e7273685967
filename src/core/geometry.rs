//! Reine Geometrie des Parallelogramms: Schließungsformel, Kanten, eingeschriebene Kurve.

use glam::Vec2;

/// Quadratisches Bézier-Segment (Start, Kontrollpunkt, Ende)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadSegment {
    /// Startpunkt
    pub start: Vec2,
    /// Kontrollpunkt (zieht die Kurve zur Ecke)
    pub control: Vec2,
    /// Endpunkt
    pub end: Vec2,
}

/// Berechnet den vierten Eckpunkt: `p0 + (p2 - p1)`.
pub fn closure_point(p0: Vec2, p1: Vec2, p2: Vec2) -> Vec2 {
    p0 + (p2 - p1)
}

/// Mittelpunkt zwischen zwei Punkten.
pub fn midpoint(a: Vec2, b: Vec2) -> Vec2 {
    a + (b - a) * 0.5
}

/// Kanten eines geschlossenen Polygons: i → i+1, letzter → erster.
pub fn closed_edges(vertices: &[Vec2]) -> Vec<(Vec2, Vec2)> {
    if vertices.len() < 2 {
        return Vec::new();
    }
    (0..vertices.len())
        .map(|i| (vertices[i], vertices[(i + 1) % vertices.len()]))
        .collect()
}

/// Kantenmittelpunkte des Vierecks; Eintrag i liegt auf der Kante i → i+1.
pub fn edge_midpoints(vertices: &[Vec2; 4]) -> [Vec2; 4] {
    std::array::from_fn(|i| midpoint(vertices[i], vertices[(i + 1) % 4]))
}

/// Eingeschriebene Kurve als vier quadratische Segmente.
///
/// Segment i verbindet den Mittelpunkt der Kante i mit dem der Kante i+1;
/// Kontrollpunkt ist die gemeinsame Ecke `vertices[i + 1]`.
pub fn inscribed_curve(vertices: &[Vec2; 4]) -> [QuadSegment; 4] {
    let mids = edge_midpoints(vertices);
    std::array::from_fn(|i| QuadSegment {
        start: mids[i],
        control: vertices[(i + 1) % 4],
        end: mids[(i + 1) % 4],
    })
}
