use glam::Vec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Neuen Punkt an Position anhängen
    AddPoint { pos: Vec2 },
    /// Vierten Punkt per Schließungsformel ergänzen
    CompleteParallelogram,
    /// Drag auf Punkt `index` starten
    BeginDrag { index: usize, pos: Vec2 },
    /// Gezogenen Punkt auf Zeigerposition nachführen
    UpdateDrag { pos: Vec2 },
    /// Drag beenden (Selektion bleibt erhalten)
    EndDrag,
    /// Selektion aufheben
    ClearSelection,
    /// Kanten-Overlay umschalten
    ToggleOutline,
    /// Kurven-Overlay umschalten
    ToggleInscribedCurve,
    /// Kopplung des vierten Punkts umschalten
    ToggleLock,
    /// Flächengröße setzen
    SetSurfaceSize { size: [f32; 2] },
}
