//! Keyboard-Shortcuts für die Zeichenfläche.
//!
//! `R` setzt zurück, `O`/`E`/`L` schalten Kanten, Kurve und Sperre um.

use crate::app::AppIntent;

const SHORTCUTS: [(egui::Key, AppIntent); 4] = [
    (egui::Key::R, AppIntent::ResetRequested),
    (egui::Key::O, AppIntent::ToggleOutlineRequested),
    (egui::Key::E, AppIntent::ToggleInscribedCurveRequested),
    (egui::Key::L, AppIntent::ToggleLockRequested),
];

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
///
/// Greift nicht, solange ein Textfeld den Fokus hat oder ein Modifier
/// gedrückt ist.
pub fn collect_keyboard_intents(ctx: &egui::Context) -> Vec<AppIntent> {
    if ctx.wants_keyboard_input() {
        return Vec::new();
    }

    ctx.input(|i| {
        if i.modifiers.any() {
            return Vec::new();
        }
        SHORTCUTS
            .iter()
            .filter(|(key, _)| i.key_pressed(*key))
            .map(|(_, intent)| intent.clone())
            .collect()
    })
}
