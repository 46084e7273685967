//! Aufgezeichnete Zeichenbefehle (Display-Liste).
//!
//! `DrawList` ist selbst eine [`Surface`]: Die Szene wird einmal hineingemalt
//! und kann danach beliebig oft auf eine echte Fläche abgespielt werden.

use crate::shared::{Rgba, StrokeStyle, Surface, TextAnchor};
use glam::Vec2;

/// Einzelner aufgezeichneter Zeichenbefehl
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fläche leeren
    Clear,
    /// Gefüllte Kreisscheibe
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    /// Kreisring
    StrokeCircle {
        center: Vec2,
        radius: f32,
        stroke: StrokeStyle,
    },
    /// Gerade Linie
    Line {
        from: Vec2,
        to: Vec2,
        stroke: StrokeStyle,
    },
    /// Text
    Text {
        pos: Vec2,
        anchor: TextAnchor,
        text: String,
        font_size: f32,
        color: Rgba,
    },
    /// Quadratische Bézier-Kurve
    QuadraticBezier {
        start: Vec2,
        control: Vec2,
        end: Vec2,
        stroke: StrokeStyle,
    },
}

/// Display-Liste für eine Fläche fester Größe
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    size: Vec2,
    commands: Vec<DrawCommand>,
}

impl DrawList {
    /// Erstellt eine leere Liste für eine Fläche der Größe `size`.
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    /// Alle aufgezeichneten Befehle in Reihenfolge.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Gibt `true` zurück, wenn nichts aufgezeichnet wurde.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Alle aufgezeichneten Linien als (von, nach).
    pub fn lines(&self) -> Vec<(Vec2, Vec2)> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Line { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    /// Alle aufgezeichneten Bézier-Segmente als (Start, Kontrollpunkt, Ende).
    pub fn curves(&self) -> Vec<(Vec2, Vec2, Vec2)> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::QuadraticBezier {
                    start,
                    control,
                    end,
                    ..
                } => Some((*start, *control, *end)),
                _ => None,
            })
            .collect()
    }

    /// Alle aufgezeichneten Texte.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Spielt alle Befehle auf `surface` ab.
    pub fn replay<S: Surface + ?Sized>(&self, surface: &mut S) {
        for command in &self.commands {
            match command {
                DrawCommand::Clear => surface.clear(),
                DrawCommand::FillCircle {
                    center,
                    radius,
                    color,
                } => surface.fill_circle(*center, *radius, *color),
                DrawCommand::StrokeCircle {
                    center,
                    radius,
                    stroke,
                } => surface.stroke_circle(*center, *radius, *stroke),
                DrawCommand::Line { from, to, stroke } => surface.line(*from, *to, *stroke),
                DrawCommand::Text {
                    pos,
                    anchor,
                    text,
                    font_size,
                    color,
                } => surface.text(*pos, *anchor, text, *font_size, *color),
                DrawCommand::QuadraticBezier {
                    start,
                    control,
                    end,
                    stroke,
                } => surface.quadratic_bezier(*start, *control, *end, *stroke),
            }
        }
    }
}

impl Surface for DrawList {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self) {
        // Alles davor ist nach dem Leeren unsichtbar
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, stroke: StrokeStyle) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            stroke,
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, stroke: StrokeStyle) {
        self.commands.push(DrawCommand::Line { from, to, stroke });
    }

    fn text(&mut self, pos: Vec2, anchor: TextAnchor, text: &str, font_size: f32, color: Rgba) {
        self.commands.push(DrawCommand::Text {
            pos,
            anchor,
            text: text.to_owned(),
            font_size,
            color,
        });
    }

    fn quadratic_bezier(&mut self, start: Vec2, control: Vec2, end: Vec2, stroke: StrokeStyle) {
        self.commands.push(DrawCommand::QuadraticBezier {
            start,
            control,
            end,
            stroke,
        });
    }
}
