//! Frame-Schleife mit Dirty-Flag-Steuerung.
//!
//! Der Host ruft `tick` einmal pro Display-Frame auf. Nur wenn der Zustand
//! als dirty markiert ist, wird die Display-Liste neu aufgebaut; ansonsten
//! wird die zwischengespeicherte Liste erneut abgespielt.

use super::{paint_scene, DrawList};
use crate::shared::{RenderScene, Surface};

/// Abbrechbare, sich wiederholende Render-Aufgabe
#[derive(Debug, Default)]
pub struct RenderLoop {
    active: bool,
    cached: DrawList,
    rebuild_count: u64,
}

impl RenderLoop {
    /// Startet die Schleife.
    pub fn start() -> Self {
        Self {
            active: true,
            cached: DrawList::default(),
            rebuild_count: 0,
        }
    }

    /// Gibt `true` zurück, solange die Schleife nicht abgebrochen wurde.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Bricht die Schleife ab und verwirft den zwischengespeicherten Frame.
    pub fn cancel(&mut self) {
        self.active = false;
        self.cached = DrawList::default();
    }

    /// Anzahl der bisherigen Neuaufbauten.
    pub fn rebuild_count(&self) -> u64 {
        self.rebuild_count
    }

    /// Zuletzt aufgebauter Frame.
    pub fn cached_frame(&self) -> &DrawList {
        &self.cached
    }

    /// Baut den Frame neu auf, falls `dirty` gesetzt ist.
    ///
    /// Gibt `true` zurück, wenn neu aufgebaut wurde; der Aufrufer setzt dann
    /// sein Dirty-Flag zurück.
    pub fn tick(&mut self, dirty: bool, scene: impl FnOnce() -> RenderScene) -> bool {
        if !self.active || !dirty {
            return false;
        }

        let scene = scene();
        let mut frame = DrawList::new(scene.surface_size);
        paint_scene(&scene, &mut frame);
        self.cached = frame;
        self.rebuild_count += 1;
        true
    }

    /// Spielt den zwischengespeicherten Frame auf `surface` ab.
    pub fn present<S: Surface + ?Sized>(&self, surface: &mut S) {
        if self.active {
            self.cached.replay(surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::EditorOptions;
    use glam::Vec2;

    fn empty_scene() -> RenderScene {
        RenderScene {
            surface_size: Vec2::new(100.0, 100.0),
            points: Vec::new(),
            selected_index: None,
            show_outline: true,
            show_inscribed_curve: true,
            options: EditorOptions::default(),
        }
    }

    #[test]
    fn clean_tick_does_not_rebuild() {
        let mut render_loop = RenderLoop::start();

        assert!(!render_loop.tick(false, empty_scene));
        assert_eq!(render_loop.rebuild_count(), 0);
        assert!(render_loop.cached_frame().is_empty());
    }

    #[test]
    fn dirty_tick_rebuilds_once() {
        let mut render_loop = RenderLoop::start();

        assert!(render_loop.tick(true, empty_scene));
        assert_eq!(render_loop.rebuild_count(), 1);
        assert!(!render_loop.cached_frame().is_empty());
    }

    #[test]
    fn cancelled_loop_neither_rebuilds_nor_presents() {
        let mut render_loop = RenderLoop::start();
        render_loop.tick(true, empty_scene);

        render_loop.cancel();

        assert!(!render_loop.is_active());
        assert!(!render_loop.tick(true, empty_scene));
        let mut target = DrawList::new(Vec2::new(100.0, 100.0));
        render_loop.present(&mut target);
        assert!(target.is_empty());
    }
}
