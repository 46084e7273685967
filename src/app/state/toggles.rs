use crate::shared::EditorOptions;

/// Schalter für Overlays und die Kopplung des vierten Punkts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayToggles {
    /// Parallelogramm-Kanten zeichnen
    pub show_outline: bool,
    /// Eingeschriebene Kurve zeichnen
    pub show_inscribed_curve: bool,
    /// Vierten Punkt per Schließungsformel an die anderen drei koppeln
    pub lock_fourth_point: bool,
}

impl OverlayToggles {
    /// Übernimmt den Startzustand aus den Optionen.
    pub fn from_options(options: &EditorOptions) -> Self {
        Self {
            show_outline: options.show_outline,
            show_inscribed_curve: options.show_inscribed_curve,
            lock_fourth_point: options.lock_fourth_point,
        }
    }
}

impl Default for OverlayToggles {
    fn default() -> Self {
        Self::from_options(&EditorOptions::default())
    }
}
