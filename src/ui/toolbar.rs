//! Toolbar mit den Bedienelementen der Sitzung.

use crate::app::{AppIntent, AppState};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let toggles = &state.toggles;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui
                .button("Reset (R)")
                .on_hover_text("Alle Punkte entfernen und neu beginnen")
                .clicked()
            {
                events.push(AppIntent::ResetRequested);
            }

            ui.separator();

            if ui
                .add(egui::Button::new("Parallelogramm (O)").selected(toggles.show_outline))
                .clicked()
            {
                events.push(AppIntent::ToggleOutlineRequested);
            }

            if ui
                .add(egui::Button::new("Ellipse (E)").selected(toggles.show_inscribed_curve))
                .clicked()
            {
                events.push(AppIntent::ToggleInscribedCurveRequested);
            }

            let lock_btn = ui
                .add_enabled(
                    state.shape.is_complete(),
                    egui::Button::new("Sperre (L)").selected(toggles.lock_fourth_point),
                )
                .on_hover_text("Vierten Punkt an die übrigen drei koppeln");
            if lock_btn.clicked() {
                events.push(AppIntent::ToggleLockRequested);
            }
        });
    });

    events
}
