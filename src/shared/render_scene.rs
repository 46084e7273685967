//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::EditorOptions;
use crate::core::{Point, MAX_POINTS};
use glam::Vec2;

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Größe der Zeichenfläche in Pixeln
    pub surface_size: Vec2,
    /// Steuerpunkte in Einfügereihenfolge
    pub points: Vec<Point>,
    /// Index des selektierten Punkts
    pub selected_index: Option<usize>,
    /// Parallelogramm-Kanten zeichnen
    pub show_outline: bool,
    /// Eingeschriebene Kurve zeichnen
    pub show_inscribed_curve: bool,
    /// Laufzeit-Optionen für Farben, Größen, Breiten
    pub options: EditorOptions,
}

impl RenderScene {
    /// Selektierter Punkt (falls vorhanden).
    pub fn selected_point(&self) -> Option<&Point> {
        self.selected_index.and_then(|index| self.points.get(index))
    }

    /// Eckpunkte, sobald alle vier Punkte existieren.
    pub fn vertices(&self) -> Option<[Vec2; MAX_POINTS]> {
        match self.points.as_slice() {
            [p0, p1, p2, p3] => Some([p0.position, p1.position, p2.position, p3.position]),
            _ => None,
        }
    }
}
