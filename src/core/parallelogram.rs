//! Geordnete Punktfolge des Parallelogramms mit Phasen- und Hit-Test-Logik.

use super::geometry;
use super::Point;
use glam::Vec2;

/// Obergrenze der Punktanzahl (vier Ecken).
pub const MAX_POINTS: usize = 4;

/// Aufbauphase in Abhängigkeit von der Punktanzahl
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapePhase {
    /// Noch kein Punkt gesetzt
    Empty,
    /// Ein oder zwei Punkte gesetzt
    Partial,
    /// Drei Punkte gesetzt; der nächste Doppelklick berechnet den vierten
    ThreePoints,
    /// Alle vier Ecken vorhanden
    Complete,
}

impl ShapePhase {
    /// Anzeigename für die Statusleiste.
    pub fn label(self) -> &'static str {
        match self {
            ShapePhase::Empty => "Leer",
            ShapePhase::Partial => "Im Aufbau",
            ShapePhase::ThreePoints => "Drei Punkte",
            ShapePhase::Complete => "Vollständig",
        }
    }
}

/// Besitzt die Steuerpunkte; die Einfügereihenfolge bestimmt die Kanten.
#[derive(Debug, Clone, Default)]
pub struct Parallelogram {
    points: Vec<Point>,
}

impl Parallelogram {
    /// Erstellt ein leeres Parallelogramm.
    pub fn new() -> Self {
        Self {
            points: Vec::with_capacity(MAX_POINTS),
        }
    }

    /// Alle Punkte in Einfügereihenfolge.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Punkt an Index `index`.
    pub fn point(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    /// Mutable Referenz auf den Punkt an Index `index`.
    pub fn point_mut(&mut self, index: usize) -> Option<&mut Point> {
        self.points.get_mut(index)
    }

    /// Anzahl der Punkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn noch kein Punkt existiert.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Aktuelle Aufbauphase.
    pub fn phase(&self) -> ShapePhase {
        match self.points.len() {
            0 => ShapePhase::Empty,
            1 | 2 => ShapePhase::Partial,
            3 => ShapePhase::ThreePoints,
            _ => ShapePhase::Complete,
        }
    }

    /// Gibt `true` zurück, wenn alle vier Ecken existieren.
    pub fn is_complete(&self) -> bool {
        self.phase() == ShapePhase::Complete
    }

    /// Hängt einen Punkt an. Gibt `false` zurück, wenn bereits vier existieren.
    pub fn push(&mut self, point: Point) -> bool {
        if self.points.len() >= MAX_POINTS {
            return false;
        }
        self.points.push(point);
        true
    }

    /// Position des vierten Punkts nach Schließungsformel (ab drei Punkten).
    pub fn closure_point(&self) -> Option<Vec2> {
        match self.points.as_slice() {
            [p0, p1, p2, ..] => Some(geometry::closure_point(
                p0.position,
                p1.position,
                p2.position,
            )),
            _ => None,
        }
    }

    /// Setzt den vierten Punkt auf die Schließungsposition.
    ///
    /// Gibt `true` zurück, wenn ein vierter Punkt existiert und gesetzt wurde.
    pub fn snap_fourth_point(&mut self) -> bool {
        let Some(target) = self.closure_point() else {
            return false;
        };
        match self.points.get_mut(3) {
            Some(fourth) => {
                fourth.position = target;
                true
            }
            None => false,
        }
    }

    /// Erster Punkt (in Einfügereihenfolge), dessen Hitbox `pos` enthält.
    pub fn hit_test(&self, pos: Vec2) -> Option<usize> {
        self.points.iter().position(|point| point.contains(pos))
    }

    /// Eckpunkte als Array, sobald das Parallelogramm vollständig ist.
    pub fn vertices(&self) -> Option<[Vec2; 4]> {
        match self.points.as_slice() {
            [p0, p1, p2, p3] => Some([p0.position, p1.position, p2.position, p3.position]),
            _ => None,
        }
    }

    /// Entfernt alle Punkte.
    pub fn clear(&mut self) {
        self.points.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PointKind;

    fn placed(x: f32, y: f32) -> Point {
        Point::new(Vec2::new(x, y), 5.5, [0.0; 4], PointKind::Placed)
    }

    fn three_points() -> Parallelogram {
        let mut shape = Parallelogram::new();
        shape.push(placed(10.0, 10.0));
        shape.push(placed(50.0, 10.0));
        shape.push(placed(50.0, 50.0));
        shape
    }

    #[test]
    fn phase_follows_point_count() {
        let mut shape = Parallelogram::new();
        assert_eq!(shape.phase(), ShapePhase::Empty);
        shape.push(placed(0.0, 0.0));
        assert_eq!(shape.phase(), ShapePhase::Partial);
        shape.push(placed(1.0, 0.0));
        assert_eq!(shape.phase(), ShapePhase::Partial);
        shape.push(placed(1.0, 1.0));
        assert_eq!(shape.phase(), ShapePhase::ThreePoints);
        shape.push(placed(0.0, 1.0));
        assert_eq!(shape.phase(), ShapePhase::Complete);
    }

    #[test]
    fn push_rejects_fifth_point() {
        let mut shape = three_points();
        assert!(shape.push(placed(10.0, 50.0)));
        assert!(!shape.push(placed(99.0, 99.0)));
        assert_eq!(shape.len(), MAX_POINTS);
    }

    #[test]
    fn closure_point_requires_three_points() {
        let mut shape = Parallelogram::new();
        shape.push(placed(10.0, 10.0));
        assert_eq!(shape.closure_point(), None);

        let shape = three_points();
        assert_eq!(shape.closure_point(), Some(Vec2::new(10.0, 50.0)));
    }

    #[test]
    fn snap_fourth_point_restores_closure_position() {
        let mut shape = three_points();
        assert!(!shape.snap_fourth_point());

        shape.push(placed(300.0, 300.0));
        assert!(shape.snap_fourth_point());
        assert_eq!(shape.points()[3].position, Vec2::new(10.0, 50.0));
    }

    #[test]
    fn hit_test_returns_first_match_in_insertion_order() {
        let mut shape = Parallelogram::new();
        shape.push(placed(10.0, 10.0));
        shape.push(placed(12.0, 12.0));

        assert_eq!(shape.hit_test(Vec2::new(13.0, 13.0)), Some(0));
        assert_eq!(shape.hit_test(Vec2::new(17.0, 17.0)), Some(1));
        assert_eq!(shape.hit_test(Vec2::new(40.0, 40.0)), None);
    }
}
