//! Lebenszyklus einer Editor-Sitzung: Zustand, Controller, Render-Schleife
//! und Pointer-Abo als eine Einheit.

use super::{AppController, AppIntent, AppState};
use crate::render::RenderLoop;
use crate::shared::{EditorOptions, Surface};

/// Abo auf Pointer-Events der Zeichenfläche.
///
/// Solange geschlossen, werden Pointer-Intents verworfen.
#[derive(Debug)]
struct PointerSubscription {
    open: bool,
}

impl PointerSubscription {
    fn acquire() -> Self {
        Self { open: true }
    }

    fn release(&mut self) {
        self.open = false;
    }
}

/// Eine laufende Editor-Sitzung, gebunden an eine Zeichenfläche.
pub struct EditorSession {
    state: AppState,
    controller: AppController,
    render_loop: RenderLoop,
    pointer: PointerSubscription,
    released: bool,
}

impl EditorSession {
    /// Startet eine neue Sitzung mit leerer Punktfolge.
    pub fn new(options: EditorOptions, surface_size: [f32; 2]) -> Self {
        log::info!(
            "Sitzung gestartet ({}x{})",
            surface_size[0],
            surface_size[1]
        );
        Self {
            state: AppState::with_options(options, surface_size),
            controller: AppController::new(),
            render_loop: RenderLoop::start(),
            pointer: PointerSubscription::acquire(),
            released: false,
        }
    }

    /// Lesender Zugriff auf den Zustand (UI, Tests).
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Gibt `true` zurück, solange die Render-Schleife läuft.
    pub fn is_running(&self) -> bool {
        self.render_loop.is_active()
    }

    /// Render-Schleife (für Statistik und Tests).
    pub fn render_loop(&self) -> &RenderLoop {
        &self.render_loop
    }

    /// Verarbeitet einen Intent.
    ///
    /// `ResetRequested` ersetzt die Sitzung; Pointer-Intents werden nur bei
    /// offenem Abo zugestellt.
    pub fn handle_intent(&mut self, intent: AppIntent) -> anyhow::Result<()> {
        if intent == AppIntent::ResetRequested {
            self.reset();
            return Ok(());
        }
        if intent.is_pointer() && !self.pointer.open {
            log::debug!("Pointer-Intent ohne Abo verworfen: {:?}", intent);
            return Ok(());
        }
        self.controller.handle_intent(&mut self.state, intent)
    }

    /// Ein Display-Frame: bei Bedarf neu aufbauen, dann auf `surface` ausgeben.
    ///
    /// Gibt `true` zurück, wenn der Frame neu aufgebaut wurde.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> bool {
        let state = &self.state;
        let controller = &self.controller;
        let rebuilt = self
            .render_loop
            .tick(state.view.dirty, || controller.build_render_scene(state));
        if rebuilt {
            self.state.view.dirty = false;
        }
        self.render_loop.present(surface);
        rebuilt
    }

    /// Ersetzt die Sitzung durch eine frische mit gleicher Flächengröße und
    /// gleichen Optionen; die alte wird abgebaut.
    pub fn reset(&mut self) {
        let fresh = Self::new(self.state.options.clone(), self.state.view.surface_size);
        let old = std::mem::replace(self, fresh);
        log::info!("Sitzung zurückgesetzt");
        old.teardown();
    }

    /// Baut die Sitzung ab.
    pub fn teardown(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        self.render_loop.cancel();
        self.pointer.release();
        self.state.shape.clear();
        self.state.selection.clear();
        log::info!(
            "Sitzung beendet ({} Commands verarbeitet)",
            self.state.command_log.len()
        );
    }
}

impl Drop for EditorSession {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::DrawList;
    use glam::Vec2;

    fn session() -> EditorSession {
        EditorSession::new(EditorOptions::default(), [400.0, 300.0])
    }

    fn double_click(session: &mut EditorSession, x: f32, y: f32) {
        session
            .handle_intent(AppIntent::PointerDoubleClicked {
                pos: Vec2::new(x, y),
            })
            .expect("Intent sollte verarbeitet werden");
    }

    #[test]
    fn new_session_is_empty_dirty_and_running() {
        let session = session();

        assert_eq!(session.state().point_count(), 0);
        assert!(session.state().view.dirty);
        assert!(session.is_running());
    }

    #[test]
    fn frame_clears_dirty_flag_after_rebuild() {
        let mut session = session();
        let mut target = DrawList::new(Vec2::new(400.0, 300.0));

        assert!(session.frame(&mut target));
        assert!(!session.state().view.dirty);
        assert!(!session.frame(&mut target));
        assert_eq!(session.render_loop().rebuild_count(), 1);
    }

    #[test]
    fn reset_yields_fresh_empty_session() {
        let mut session = session();
        double_click(&mut session, 10.0, 10.0);
        double_click(&mut session, 50.0, 10.0);
        let mut target = DrawList::new(Vec2::new(400.0, 300.0));
        session.frame(&mut target);

        session
            .handle_intent(AppIntent::ResetRequested)
            .expect("Reset sollte klappen");

        assert_eq!(session.state().point_count(), 0);
        assert!(session.state().view.dirty);
        assert!(session.is_running());
        assert_eq!(session.state().view.surface_size, [400.0, 300.0]);
        assert_eq!(session.render_loop().rebuild_count(), 0);
    }

    #[test]
    fn released_session_ignores_pointer_intents() {
        let mut session = session();
        session.release();

        double_click(&mut session, 10.0, 10.0);

        assert!(!session.is_running());
        assert_eq!(session.state().point_count(), 0);
    }

    #[test]
    fn release_is_idempotent() {
        let mut session = session();
        double_click(&mut session, 10.0, 10.0);

        session.release();
        session.release();

        assert_eq!(session.state().point_count(), 0);
        assert!(!session.is_running());
    }
}
