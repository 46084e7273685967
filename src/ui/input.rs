//! Pointer-Input der Zeichenfläche → AppIntent.
//!
//! Alle Positionen werden relativ zur linken oberen Ecke der Fläche geliefert.

use crate::app::AppIntent;
use glam::Vec2;

/// Verfolgt, ob die primäre Taste innerhalb der Fläche gedrückt wurde.
#[derive(Debug, Default)]
pub struct InputState {
    pressed_inside: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt `true` zurück, solange eine Taste innerhalb der Fläche gehalten wird.
    pub fn is_pressed(&self) -> bool {
        self.pressed_inside
    }

    /// Sammelt Pointer-Events der Fläche und gibt AppIntents zurück.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
    ) -> Vec<AppIntent> {
        let rect = response.rect;
        let (pressed, released, moved, pointer) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.delta() != egui::Vec2::ZERO,
                i.pointer.interact_pos(),
            )
        });

        let mut events = Vec::new();

        if pressed {
            if let Some(pos) = pointer.filter(|pos| rect.contains(*pos)) {
                self.pressed_inside = true;
                events.push(AppIntent::PointerPressed {
                    pos: to_local(pos, rect),
                });
            }
        }

        if self.pressed_inside && moved && !pressed {
            if let Some(pos) = pointer {
                events.push(AppIntent::PointerMoved {
                    pos: to_local(pos, rect),
                });
            }
        }

        if released && self.pressed_inside {
            self.pressed_inside = false;
            events.push(AppIntent::PointerReleased);
        }

        if response.double_clicked_by(egui::PointerButton::Primary) {
            if let Some(pos) = response.interact_pointer_pos() {
                events.push(AppIntent::PointerDoubleClicked {
                    pos: to_local(pos, rect),
                });
            }
        }

        events
    }
}

/// Rechnet eine Bildschirmposition in Flächen-Koordinaten um.
pub fn to_local(pos: egui::Pos2, rect: egui::Rect) -> Vec2 {
    let local = pos - rect.min;
    Vec2::new(local.x, local.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_local_subtracts_rect_origin() {
        let rect = egui::Rect::from_min_size(egui::pos2(20.0, 40.0), egui::vec2(300.0, 200.0));

        assert_eq!(to_local(egui::pos2(20.0, 40.0), rect), Vec2::ZERO);
        assert_eq!(to_local(egui::pos2(70.0, 90.0), rect), Vec2::new(50.0, 50.0));
    }

    #[test]
    fn new_input_state_is_not_pressed() {
        assert!(!InputState::new().is_pressed());
    }
}
