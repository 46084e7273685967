use crate::app::CommandLog;
use crate::core::{Parallelogram, Point, ShapePhase};
use crate::shared::EditorOptions;

use super::{OverlayToggles, SelectionState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Steuerpunkte des Parallelogramms
    pub shape: Parallelogram,
    /// Selektion und Drag
    pub selection: SelectionState,
    /// View-State (Flächengröße, Dirty-Flag)
    pub view: ViewState,
    /// Overlay- und Sperr-Schalter
    pub toggles: OverlayToggles,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Größen, Startzustand)
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standardoptionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default(), [0.0, 0.0])
    }

    /// Erstellt einen leeren App-State für eine Fläche der Größe `surface_size`.
    pub fn with_options(options: EditorOptions, surface_size: [f32; 2]) -> Self {
        Self {
            shape: Parallelogram::new(),
            selection: SelectionState::new(),
            view: ViewState::new(surface_size),
            toggles: OverlayToggles::from_options(&options),
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Aktuelle Aufbauphase des Parallelogramms
    pub fn phase(&self) -> ShapePhase {
        self.shape.phase()
    }

    /// Gibt die Anzahl der Punkte zurück (für UI-Anzeige)
    pub fn point_count(&self) -> usize {
        self.shape.len()
    }

    /// Aktuell selektierter Punkt (falls vorhanden).
    pub fn selected_point(&self) -> Option<&Point> {
        self.selection
            .selected_index
            .and_then(|index| self.shape.point(index))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
