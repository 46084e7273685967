//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

fn on_off(flag: bool) -> &'static str {
    if flag {
        "an"
    } else {
        "aus"
    }
}

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Punkte: {} | {}",
                state.point_count(),
                state.phase().label()
            ));

            ui.separator();

            ui.label(format!(
                "Kanten: {} | Ellipse: {} | Sperre: {}",
                on_off(state.toggles.show_outline),
                on_off(state.toggles.show_inscribed_curve),
                on_off(state.toggles.lock_fourth_point)
            ));

            ui.separator();

            match (state.selection.selected_index, state.selected_point()) {
                (Some(index), Some(point)) => {
                    ui.label(format!("Selektiert: #{} {}", index + 1, point.label()));
                }
                _ => {
                    ui.label("Keine Selektion");
                }
            }
        });
    });
}
