use glam::Vec2;

/// Auswahl- und Drag-Zustand
///
/// Die Selektion ist ein reiner Index in die Punktfolge des Parallelogramms
/// und besitzt den Punkt nicht.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    /// Index des selektierten Punkts
    pub selected_index: Option<usize>,
    /// Ob gerade ein Punkt gezogen wird
    pub dragging: bool,
    /// Abstand Zeiger → Punktposition beim Drag-Start
    pub drag_offset: Vec2,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self {
            selected_index: None,
            dragging: false,
            drag_offset: Vec2::ZERO,
        }
    }

    /// Hebt Selektion und Drag auf.
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}
