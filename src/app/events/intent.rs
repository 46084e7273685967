use glam::Vec2;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
/// Alle Positionen liegen in Flächen-Koordinaten.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Primäre Maustaste auf der Fläche gedrückt
    PointerPressed { pos: Vec2 },
    /// Zeiger bei gedrückter Taste bewegt
    PointerMoved { pos: Vec2 },
    /// Primäre Maustaste losgelassen
    PointerReleased,
    /// Doppelklick auf der Fläche
    PointerDoubleClicked { pos: Vec2 },
    /// Größe der Zeichenfläche hat sich geändert
    SurfaceResized { size: [f32; 2] },
    /// Sitzung zurücksetzen (wird von der Session abgefangen)
    ResetRequested,
    /// Parallelogramm-Kanten ein-/ausblenden
    ToggleOutlineRequested,
    /// Eingeschriebene Kurve ein-/ausblenden
    ToggleInscribedCurveRequested,
    /// Kopplung des vierten Punkts umschalten
    ToggleLockRequested,
}

impl AppIntent {
    /// Gibt `true` für Intents aus dem Pointer-Eingabestrom zurück.
    pub fn is_pointer(&self) -> bool {
        matches!(
            self,
            AppIntent::PointerPressed { .. }
                | AppIntent::PointerMoved { .. }
                | AppIntent::PointerReleased
                | AppIntent::PointerDoubleClicked { .. }
        )
    }
}
